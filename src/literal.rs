//! Classification and rebuilding of tagged literals.

use crate::minify::minify;
use crate::stats::LiteralEdit;
use oxc_ast::ast::{Expression, TemplateElement, TemplateElementValue, TemplateLiteral};
use oxc_ast::AstBuilder;
use oxc_span::Span;

/// The two literal shapes a tagged expression can take.
pub enum LiteralShape<'b, 'a> {
    /// A quoted string, or a template literal without holes.
    Plain { span: Span, text: &'b str },
    /// A template literal with one or more `${}` holes.
    Interpolated(&'b mut TemplateLiteral<'a>),
}

/// Span of `expr` if it is a literal candidate.
pub fn literal_span(expr: &Expression<'_>) -> Option<Span> {
    match expr {
        Expression::StringLiteral(lit) => Some(lit.span),
        Expression::TemplateLiteral(tpl) => Some(tpl.span),
        _ => None,
    }
}

pub fn classify<'b, 'a>(expr: &'b mut Expression<'a>) -> Option<LiteralShape<'b, 'a>> {
    match expr {
        Expression::StringLiteral(lit) => Some(LiteralShape::Plain {
            span: lit.span,
            text: lit.value.as_str(),
        }),
        Expression::TemplateLiteral(tpl) => Some(template_shape(tpl)),
        _ => None,
    }
}

/// A template literal with no holes is plain text.
fn template_shape<'b, 'a>(tpl: &'b mut TemplateLiteral<'a>) -> LiteralShape<'b, 'a> {
    if tpl.expressions.is_empty() {
        let span = tpl.span;
        let text = tpl.quasis.first().map_or("", segment_text);
        LiteralShape::Plain { span, text }
    } else {
        LiteralShape::Interpolated(tpl)
    }
}

/// Minify a literal expression in place.
///
/// Plain literals are replaced by a fresh string literal. Interpolated literals keep
/// their node and their expressions; only the text of each segment is swapped.
/// Returns `None` when `expr` is not a literal.
pub fn rebuild_literal<'a>(expr: &mut Expression<'a>, ast: AstBuilder<'a>) -> Option<LiteralEdit> {
    let (replacement, edit) = match classify(expr)? {
        LiteralShape::Plain { span, text } => {
            let minified = minify(text);
            let edit = LiteralEdit {
                segments: 1,
                holes: 0,
                bytes_before: text.len(),
                bytes_after: minified.len(),
            };
            let literal = ast.expression_string_literal(span, ast.atom(&minified), None);
            (Some(literal), edit)
        }
        LiteralShape::Interpolated(tpl) => (None, rebuild_template(tpl, ast)),
    };

    if let Some(literal) = replacement {
        *expr = literal;
    }

    Some(edit)
}

/// Minify head, middles and tail independently, leaving every hole in place.
///
/// Also used for templates that must stay templates, such as the quasi of a tagged
/// template expression.
pub fn rebuild_template<'a>(tpl: &mut TemplateLiteral<'a>, ast: AstBuilder<'a>) -> LiteralEdit {
    let mut edit = LiteralEdit {
        segments: tpl.quasis.len(),
        holes: tpl.expressions.len(),
        bytes_before: 0,
        bytes_after: 0,
    };

    for quasi in tpl.quasis.iter_mut() {
        let text = segment_text(quasi);
        let minified = minify(text);
        edit.bytes_before += text.len();
        edit.bytes_after += minified.len();

        quasi.value = TemplateElementValue {
            raw: ast.atom(&escape_template_raw(&minified)),
            cooked: Some(ast.atom(&minified)),
        };
    }

    edit
}

fn segment_text<'b>(quasi: &'b TemplateElement<'_>) -> &'b str {
    quasi
        .value
        .cooked
        .as_ref()
        .map_or(quasi.value.raw.as_str(), |cooked| cooked.as_str())
}

/// Raw template text for a cooked value.
pub fn escape_template_raw(cooked: &str) -> String {
    let mut raw = String::with_capacity(cooked.len());
    let mut chars = cooked.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => raw.push_str("\\\\"),
            '`' => raw.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => raw.push_str("\\$"),
            // A literal CR in template source is read back as LF.
            '\r' => raw.push_str("\\r"),
            _ => raw.push(c),
        }
    }

    raw
}
