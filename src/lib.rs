//! GLSL minification for JS/TS sources.
//!
//! String and template literals preceded by a marker comment (`/* glsl */` by
//! default) have their contents rewritten by a fixed text pipeline. Everything else
//! in the source, including every `${}` expression of a tagged template, is left
//! as it was.
//!
//! Entry points:
//!
//! - [`minify::minify`] runs the text pipeline on raw GLSL.
//! - [`transformer::TransformerBuilder`] rewrites parsed oxc programs, one unit or
//!   a whole bundle at a time.
//! - [`process`] wraps parsing and printing for plain source strings.

pub mod config;
pub mod literal;
pub mod minify;
pub mod process;
pub mod stats;
pub mod transformer;
pub mod trivia;
pub mod utils;

pub use config::TransformerConfig;
pub use minify::minify;
pub use process::{minify_source, minify_sources, ProcessedSource};
pub use stats::TransformStats;
pub use transformer::{
    transformer, Bundle, CompiledUnit, GlslTransformer, SourceFileOrBundle, TransformerBuilder,
};
pub use trivia::MarkerSet;
pub use utils::{GlslMinifyError, Result};
