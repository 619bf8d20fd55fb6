use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlslMinifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl GlslMinifyError {
    /// Create a parse error for a source file
    pub fn parse(message: String, path: Option<PathBuf>) -> Self {
        Self::Parse { message, path }
    }

    /// Create a configuration error
    pub fn config(message: String) -> Self {
        Self::Config(message)
    }

    /// Format error with the offending file, when known
    pub fn format_detailed(&self) -> String {
        match self {
            GlslMinifyError::Parse {
                message,
                path: Some(path),
            } => format!("❌ Parse Error: {}\n📁 File: {}", message, path.display()),
            _ => format!("❌ {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlslMinifyError>;

impl From<serde_json::Error> for GlslMinifyError {
    fn from(err: serde_json::Error) -> Self {
        GlslMinifyError::config(err.to_string())
    }
}

impl From<anyhow::Error> for GlslMinifyError {
    fn from(err: anyhow::Error) -> Self {
        GlslMinifyError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_with_path() {
        let err = GlslMinifyError::parse(
            "Unexpected token".to_string(),
            Some(PathBuf::from("src/shaders.ts")),
        );
        assert_eq!(err.to_string(), "Parse error: Unexpected token");

        let detailed = err.format_detailed();
        assert!(detailed.contains("Unexpected token"));
        assert!(detailed.contains("src/shaders.ts"));
    }

    #[test]
    fn test_from_serde_json() {
        let err: GlslMinifyError = serde_json::from_str::<Vec<String>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, GlslMinifyError::Config(_)));
    }

    #[test]
    fn test_from_anyhow() {
        let err: GlslMinifyError = anyhow::anyhow!("boom").into();
        assert_eq!(err.format_detailed(), "❌ boom");
    }
}
