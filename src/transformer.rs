//! Tree walker and transformer factory.

use crate::config::TransformerConfig;
use crate::literal::{literal_span, rebuild_literal, rebuild_template};
use crate::stats::{LiteralEdit, TransformStats};
use crate::trivia::{MarkerSet, TriviaIndex};
use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, Program, TaggedTemplateExpression};
use oxc_ast::AstBuilder;
use oxc_ast_visit::{walk_mut, VisitMut};
use std::path::PathBuf;
use tracing::debug;

/// One parsed source file.
pub struct CompiledUnit<'a> {
    pub path: Option<PathBuf>,
    pub program: Program<'a>,
    /// Filled in by the last transform applied to this unit.
    pub stats: TransformStats,
}

impl<'a> CompiledUnit<'a> {
    pub fn new(program: Program<'a>) -> Self {
        Self {
            path: None,
            program,
            stats: TransformStats::default(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn display_name(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<anonymous>".to_string())
    }
}

/// An ordered collection of units transformed together.
#[derive(Default)]
pub struct Bundle<'a> {
    pub units: Vec<CompiledUnit<'a>>,
}

impl<'a> Bundle<'a> {
    pub fn new(units: Vec<CompiledUnit<'a>>) -> Self {
        Self { units }
    }

    pub fn stats(&self) -> TransformStats {
        self.units.iter().fold(TransformStats::default(), |mut total, unit| {
            total.merge(&unit.stats);
            total
        })
    }
}

/// What the transformer accepts and hands back.
pub enum SourceFileOrBundle<'a> {
    SourceFile(CompiledUnit<'a>),
    Bundle(Bundle<'a>),
}

/// Holds the marker set for one transformation pass.
#[derive(Debug, Clone, Default)]
pub struct TransformerBuilder {
    markers: MarkerSet,
}

impl TransformerBuilder {
    /// `None` means the default configuration.
    pub fn new(config: Option<TransformerConfig>) -> Self {
        Self {
            markers: config.unwrap_or_default().marker_set(),
        }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Bind the builder to the arena that owns the trees it will rewrite.
    pub fn make_transformer<'a, 'b>(&'b self, allocator: &'a Allocator) -> GlslTransformer<'a, 'b> {
        GlslTransformer {
            markers: &self.markers,
            ast: AstBuilder::new(allocator),
        }
    }
}

/// Shorthand for [`TransformerBuilder::new`].
pub fn transformer(config: Option<TransformerConfig>) -> TransformerBuilder {
    TransformerBuilder::new(config)
}

/// Reusable transform over units and bundles sharing one arena.
pub struct GlslTransformer<'a, 'b> {
    markers: &'b MarkerSet,
    ast: AstBuilder<'a>,
}

impl<'a, 'b> GlslTransformer<'a, 'b> {
    pub fn transform(&self, node: SourceFileOrBundle<'a>) -> SourceFileOrBundle<'a> {
        match node {
            SourceFileOrBundle::SourceFile(unit) => {
                SourceFileOrBundle::SourceFile(self.transform_source_file(unit))
            }
            SourceFileOrBundle::Bundle(bundle) => {
                SourceFileOrBundle::Bundle(self.transform_bundle(bundle))
            }
        }
    }

    /// Per-unit step of the bundle path. Units mapping to `None` are dropped from
    /// the bundle; the GLSL rewrite itself always yields its unit.
    pub fn transform_unit(&self, unit: CompiledUnit<'a>) -> Option<CompiledUnit<'a>> {
        Some(self.transform_source_file(unit))
    }

    pub fn transform_source_file(&self, mut unit: CompiledUnit<'a>) -> CompiledUnit<'a> {
        unit.stats = self.transform_program(&mut unit.program);

        if unit.stats.literals_minified > 0 {
            debug!("🎨 {}: {}", unit.display_name(), unit.stats);
        }

        unit
    }

    pub fn transform_bundle(&self, bundle: Bundle<'a>) -> Bundle<'a> {
        Bundle::new(
            bundle
                .units
                .into_iter()
                .filter_map(|unit| self.transform_unit(unit))
                .collect(),
        )
    }

    /// Rewrite every tagged literal in `program`.
    pub fn transform_program(&self, program: &mut Program<'a>) -> TransformStats {
        if self.markers.is_empty() {
            return TransformStats::default();
        }

        let trivia = TriviaIndex::from_program(program);
        let mut visitor = GlslVisitor {
            markers: self.markers,
            trivia,
            ast: self.ast,
            stats: TransformStats::default(),
        };
        visitor.visit_program(program);
        visitor.stats
    }
}

struct GlslVisitor<'a, 'b> {
    markers: &'b MarkerSet,
    trivia: TriviaIndex<'a>,
    ast: AstBuilder<'a>,
    stats: TransformStats,
}

impl<'a> GlslVisitor<'a, '_> {
    fn is_tagged(&self, expr: &Expression<'a>) -> bool {
        literal_span(expr)
            .is_some_and(|span| self.markers.matches(self.trivia.leading_trivia(span)))
    }

    fn record(&mut self, edit: LiteralEdit) {
        debug!(
            "minified literal: {} segment(s), {} hole(s), {} → {} bytes",
            edit.segments, edit.holes, edit.bytes_before, edit.bytes_after
        );
        self.stats.record(&edit);
    }
}

impl<'a> VisitMut<'a> for GlslVisitor<'a, '_> {
    fn visit_expression(&mut self, expr: &mut Expression<'a>) {
        if self.is_tagged(expr) {
            if let Some(edit) = rebuild_literal(expr, self.ast) {
                self.record(edit);
            }
            // Replaced literals are not walked; holes keep their original code.
            return;
        }

        walk_mut::walk_expression(self, expr);
    }

    // A tagged quasi stays a template literal; only its segments change.
    fn visit_tagged_template_expression(&mut self, it: &mut TaggedTemplateExpression<'a>) {
        if !self.markers.matches(self.trivia.leading_trivia(it.quasi.span)) {
            walk_mut::walk_tagged_template_expression(self, it);
            return;
        }

        let edit = rebuild_template(&mut it.quasi, self.ast);
        self.record(edit);
        self.visit_expression(&mut it.tag);
    }
}
