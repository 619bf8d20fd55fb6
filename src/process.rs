//! Parse → transform → print for JS/TS sources.

use crate::stats::TransformStats;
use crate::transformer::{Bundle, CompiledUnit, TransformerBuilder};
use crate::utils::{GlslMinifyError, Logger, Result, Timer};
use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;
use std::path::{Path, PathBuf};

/// Printed output for one source file.
#[derive(Debug, Clone)]
pub struct ProcessedSource {
    pub path: PathBuf,
    pub code: String,
    pub stats: TransformStats,
}

/// Parse `source` into a unit owned by `allocator`.
pub fn parse_unit<'a>(allocator: &'a Allocator, source: &'a str, path: &Path) -> Result<CompiledUnit<'a>> {
    let source_type = SourceType::from_path(path).unwrap_or_default();
    let ret = Parser::new(allocator, source, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let errors: Vec<String> = ret
            .errors
            .iter()
            .map(|e| format!("Parse error: {}", e))
            .collect();
        return Err(GlslMinifyError::parse(
            errors.join("\n"),
            Some(path.to_path_buf()),
        ));
    }

    Ok(CompiledUnit::new(ret.program).with_path(path))
}

/// Minify every tagged literal in one JS/TS source.
pub fn minify_source(source: &str, path: &Path, builder: &TransformerBuilder) -> Result<ProcessedSource> {
    let _timer = Timer::start(&format!("GLSL minify {}", path.display()));
    Logger::processing_file(&path.display().to_string());

    let allocator = Allocator::default();
    let unit = parse_unit(&allocator, source, path)?;
    let unit = builder.make_transformer(&allocator).transform_source_file(unit);

    Ok(print_unit(&unit, path))
}

/// Minify several sources as one bundle, keeping their order.
pub fn minify_sources(
    sources: &[(PathBuf, String)],
    builder: &TransformerBuilder,
) -> Result<Vec<ProcessedSource>> {
    let _timer = Timer::start(&format!("GLSL minify bundle of {} file(s)", sources.len()));

    let allocator = Allocator::default();
    let mut units = Vec::with_capacity(sources.len());
    for (path, source) in sources {
        Logger::processing_file(&path.display().to_string());
        units.push(parse_unit(&allocator, source, path)?);
    }

    let bundle = builder
        .make_transformer(&allocator)
        .transform_bundle(Bundle::new(units));

    Ok(bundle
        .units
        .iter()
        .map(|unit| {
            let path = unit.path.clone().unwrap_or_default();
            print_unit(unit, &path)
        })
        .collect())
}

fn print_unit(unit: &CompiledUnit<'_>, path: &Path) -> ProcessedSource {
    ProcessedSource {
        path: path.to_path_buf(),
        code: Codegen::new().build(&unit.program).code,
        stats: unit.stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_source_rewrites_tagged_template() {
        let builder = TransformerBuilder::new(None);
        let source = "export const frag = /* glsl */ `\n  precision mediump float;\n  uniform float t;\n  void main() {\n    gl_FragColor = vec4(t, 0.0, 0.0, 1.0);\n  }\n`;\n";

        let out = minify_source(source, Path::new("shader.js"), &builder).unwrap();

        assert!(out.code.contains("precision mediump float;uniform float t;void main() {gl_FragColor=vec4(t,0.0,0.0,1.0);}"));
        assert_eq!(out.stats.literals_minified, 1);
        assert!(out.stats.saved_bytes() > 0);
    }

    #[test]
    fn test_minify_source_reports_parse_errors() {
        let builder = TransformerBuilder::new(None);
        let err = minify_source("const = ;", Path::new("broken.js"), &builder).unwrap_err();

        match err {
            GlslMinifyError::Parse { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("broken.js")));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_minify_source_typescript() {
        let builder = TransformerBuilder::new(None);
        let source = "const vert: string = /* glsl */ 'attribute vec2 p;  void main() { gl_Position = vec4(p, 0.0, 1.0); }';";

        let out = minify_source(source, Path::new("shader.ts"), &builder).unwrap();

        assert!(out.code.contains("gl_Position=vec4(p,0.0,1.0);"));
        assert!(out.code.contains("const vert: string"));
    }

    #[test]
    fn test_minify_sources_keeps_order() {
        let builder = TransformerBuilder::new(None);
        let sources = vec![
            (PathBuf::from("b.js"), "const b = /* glsl */ 'x = 1;';".to_string()),
            (PathBuf::from("a.js"), "const a = 'y = 2;';".to_string()),
        ];

        let out = minify_sources(&sources, &builder).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].path, PathBuf::from("b.js"));
        assert!(out[0].code.contains("x=1;"));
        assert_eq!(out[1].path, PathBuf::from("a.js"));
        assert!(out[1].code.contains("y = 2;"));
        assert_eq!(out[1].stats.literals_minified, 0);
    }
}
