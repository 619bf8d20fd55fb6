use glsl_minify::process::{minify_sources, ProcessedSource};
use glsl_minify::utils::{ConfigLoader, GlslMinifyError, Logger, Result, CONFIG_FILE_NAME};
use glsl_minify::{minify, TransformStats, TransformerBuilder};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "glsl-minify")]
#[command(about = "Minify GLSL held in /* glsl */-tagged JS/TS literals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify tagged literals in JS/TS files
    Build {
        /// Source files to process
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Root directory holding glsl-minify.config.json
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Output directory (stdout when omitted)
        #[arg(short, long)]
        outdir: Option<String>,
        /// Marker tag, repeatable; overrides customPrefixes from the config file
        #[arg(short, long = "prefix")]
        prefixes: Vec<String>,
    },
    /// Run the GLSL pipeline on a raw shader file (stdin when omitted)
    MinifyGlsl {
        file: Option<PathBuf>,
    },
    /// Write an example glsl-minify.config.json
    Init {
        /// Directory to write the config into
        #[arg(short, long, default_value = ".")]
        root: String,
    },
    /// Show tool information
    Info,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Build {
                files,
                root,
                outdir,
                prefixes,
            } => {
                self.handle_build_command(&files, &root, outdir.as_deref(), &prefixes)
                    .await
            }
            Commands::MinifyGlsl { file } => self.handle_minify_glsl_command(file.as_deref()).await,
            Commands::Init { root } => self.handle_init_command(&root).await,
            Commands::Info => self.handle_info_command().await,
        }
    }

    async fn handle_build_command(
        &self,
        files: &[PathBuf],
        root: &str,
        outdir: Option<&str>,
        prefixes: &[String],
    ) -> Result<()> {
        let start = Instant::now();

        let file_config = ConfigLoader::load_from_file(Path::new(root))?;
        let config = ConfigLoader::merge_with_cli(file_config, prefixes);
        let builder = TransformerBuilder::new(Some(config));

        Logger::build_start(files.len(), builder.markers().markers());
        if builder.markers().is_empty() {
            Logger::warn("No markers configured; sources are copied unchanged");
        }

        let processed = self.process_files(files, &builder).await?;
        let targets = output_targets(&processed, Path::new(root), outdir)?;

        let mut total = TransformStats::default();
        for (output, target) in processed.iter().zip(&targets) {
            total.merge(&output.stats);
            self.emit(output, target.as_deref()).await?;
        }

        Logger::build_complete(processed.len(), &total, start.elapsed());
        Ok(())
    }

    pub(crate) async fn process_files(
        &self,
        files: &[PathBuf],
        builder: &TransformerBuilder,
    ) -> Result<Vec<ProcessedSource>> {
        let mut sources = Vec::with_capacity(files.len());
        for path in files {
            let content = tokio::fs::read_to_string(path).await?;
            sources.push((path.clone(), content));
        }

        minify_sources(&sources, builder)
    }

    async fn emit(&self, output: &ProcessedSource, target: Option<&Path>) -> Result<()> {
        let Some(target) = target else {
            println!("{}", output.code);
            return Ok(());
        };

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(target, &output.code).await?;
        Logger::file_written(&target.display().to_string());
        Ok(())
    }

    async fn handle_minify_glsl_command(&self, file: Option<&Path>) -> Result<()> {
        let code = match file {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => {
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                buffer
            }
        };

        println!("{}", minify(&code));
        Ok(())
    }

    async fn handle_init_command(&self, root: &str) -> Result<()> {
        let path = Path::new(root).join(CONFIG_FILE_NAME);

        if path.exists() {
            Logger::warn(&format!("{} already exists, leaving it alone", path.display()));
            return Ok(());
        }

        tokio::fs::write(&path, ConfigLoader::generate_example()).await?;
        Logger::info(&format!("📝 Created {}", path.display()));
        Ok(())
    }

    async fn handle_info_command(&self) -> Result<()> {
        let builder = TransformerBuilder::default();

        tracing::info!("🦀 GLSL Minify v{}", env!("CARGO_PKG_VERSION"));
        tracing::info!("══════════════════════════════════════");
        tracing::info!("🏗️  Architecture:");
        tracing::info!("  • oxc parser and code generator");
        tracing::info!("  • Regex rewrite pipeline for GLSL text");
        tracing::info!("");
        tracing::info!("🏷️  Default markers: {}", builder.markers().markers().join(", "));
        tracing::info!("⚙️  Config file: {}", CONFIG_FILE_NAME);

        Ok(())
    }
}

/// Where each output lands under `outdir`, keeping its path relative to `root`.
/// Two inputs mapping to the same file is an error.
fn output_targets(
    processed: &[ProcessedSource],
    root: &Path,
    outdir: Option<&str>,
) -> Result<Vec<Option<PathBuf>>> {
    let Some(outdir) = outdir else {
        return Ok(vec![None; processed.len()]);
    };

    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(processed.len());

    for output in processed {
        let relative = relative_output_path(&output.path, root).ok_or_else(|| {
            GlslMinifyError::Other(format!("Not a file: {}", output.path.display()))
        })?;
        let target = Path::new(outdir).join(relative);

        if let Some(previous) = seen.insert(target.clone(), &output.path) {
            return Err(GlslMinifyError::Other(format!(
                "{} and {} would both be written to {}",
                previous.display(),
                output.path.display(),
                target.display()
            )));
        }

        targets.push(Some(target));
    }

    Ok(targets)
}

// Paths below `root` keep their subdirectories; anything else falls back to the
// bare file name.
fn relative_output_path(path: &Path, root: &Path) -> Option<PathBuf> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let normal: Option<PathBuf> = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    normal
        .filter(|p| p.file_name().is_some())
        .or_else(|| path.file_name().map(PathBuf::from))
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
