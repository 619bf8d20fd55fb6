//! Text-level GLSL minification.
//!
//! The pipeline is a fixed, ordered list of regex rewrites. It knows nothing about
//! GLSL grammar: comment-like or operator-like sequences inside GLSL string literals
//! are rewritten like any other text.

use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled rewrite patterns
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)(//)+.*$").unwrap());
static TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").unwrap());
static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s+").unwrap());
static OPERATOR_SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r" ([*/=+\-><]+) ").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#(.*)").unwrap());
static OPEN_BRACE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\n([^#])").unwrap());
static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:[\t ]*(?:\r?\n|\r))+").unwrap());
static SEMICOLON_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r";\n([^#])").unwrap());

/// One step of the pipeline.
pub type RewriteRule = fn(&str) -> String;

/// Rules in the order they run. The leading-newline rule wraps the whole sequence
/// and is handled by [`minify`] itself.
pub const PIPELINE: [(&str, RewriteRule); 13] = [
    ("strip-bom", strip_bom),
    ("normalize-line-endings", normalize_line_endings),
    ("strip-line-comments", strip_line_comments),
    ("collapse-tabs", collapse_tabs),
    ("strip-leading-whitespace", strip_leading_whitespace),
    ("tighten-operators", tighten_operators),
    ("tighten-commas", tighten_commas),
    ("collapse-spaces", collapse_spaces),
    ("terminate-directives", terminate_directives),
    ("join-open-braces", join_open_braces),
    ("join-close-braces", join_close_braces),
    ("strip-blank-lines", strip_blank_lines),
    ("join-semicolons", join_semicolons),
];

/// Minify GLSL source text.
///
/// Total over all inputs. A leading newline survives so that `/* glsl */` template
/// literals that open with a line break keep their first line intact.
pub fn minify(code: &str) -> String {
    let preserve_newline = code.starts_with('\n');

    let body = PIPELINE
        .iter()
        .fold(code.to_owned(), |text, (_, rule)| rule(&text));

    if preserve_newline {
        format!("\n{}", body)
    } else {
        body
    }
}

fn strip_bom(code: &str) -> String {
    code.strip_prefix('\u{FEFF}').unwrap_or(code).to_owned()
}

fn normalize_line_endings(code: &str) -> String {
    code.replace("\r\n", "\n")
}

fn strip_line_comments(code: &str) -> String {
    LINE_COMMENT.replace_all(code, "").into_owned()
}

fn collapse_tabs(code: &str) -> String {
    TABS.replace_all(code, " ").into_owned()
}

fn strip_leading_whitespace(code: &str) -> String {
    LEADING_WHITESPACE.replace_all(code, "").into_owned()
}

fn tighten_operators(code: &str) -> String {
    OPERATOR_SPACING.replace_all(code, "${1}").into_owned()
}

fn tighten_commas(code: &str) -> String {
    code.replace(", ", ",")
}

fn collapse_spaces(code: &str) -> String {
    MULTI_SPACE.replace_all(code, " ").into_owned()
}

fn terminate_directives(code: &str) -> String {
    DIRECTIVE.replace_all(code, "#${1}\n").into_owned()
}

fn join_open_braces(code: &str) -> String {
    OPEN_BRACE_NEWLINE.replace_all(code, "{${1}").into_owned()
}

fn join_close_braces(code: &str) -> String {
    code.replace("\n}", "}")
}

/// Drops whitespace-only lines, including the empty last line a trailing newline
/// leaves behind. A directive keeps the newline that terminates it.
fn strip_blank_lines(code: &str) -> String {
    let mut out = BLANK_LINES.replace_all(code, "").into_owned();

    while let Some(idx) = out.rfind('\n') {
        let line_start = out[..idx].rfind('\n').map_or(0, |i| i + 1);
        let trailing_blank = out[idx + 1..].bytes().all(|b| b == b' ' || b == b'\t');

        if !trailing_blank || out[line_start..idx].starts_with('#') {
            if trailing_blank {
                out.truncate(idx + 1);
            }
            break;
        }

        out.truncate(idx);
    }

    out
}

fn join_semicolons(code: &str) -> String {
    SEMICOLON_NEWLINE.replace_all(code, ";${1}").into_owned()
}
