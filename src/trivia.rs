use oxc_ast::ast::Program;
use oxc_span::Span;

/// Tag used when no prefixes are configured.
pub const DEFAULT_PREFIX: &str = "glsl";

/// Comment markers that tag a literal for minification.
///
/// Each prefix `p` is matched as the exact text `/* p */`. Matching is plain
/// substring containment over the literal's leading trivia, so a marker sitting
/// inside an unrelated comment still counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<String>,
}

impl MarkerSet {
    pub fn from_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            markers: prefixes
                .into_iter()
                .map(|prefix| format!("/* {} */", prefix.as_ref()))
                .collect(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// True when any marker occurs in `trivia`.
    pub fn matches(&self, trivia: &str) -> bool {
        self.markers.iter().any(|marker| trivia.contains(marker.as_str()))
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::from_prefixes([DEFAULT_PREFIX])
    }
}

/// Leading-trivia lookup for one parsed unit.
///
/// oxc nodes only carry their own span, so the "full start" of a node (the end of
/// the previous token) is recovered by scanning backwards over whitespace and over
/// comments recorded by the parser.
pub struct TriviaIndex<'s> {
    source: &'s str,
    // Sorted by position; comments never overlap, so also sorted by end.
    comments: Vec<Span>,
}

impl<'s> TriviaIndex<'s> {
    pub fn new(source: &'s str, comments: Vec<Span>) -> Self {
        Self { source, comments }
    }

    pub fn from_program(program: &Program<'s>) -> Self {
        let comments = program.comments.iter().map(|comment| comment.span).collect();
        Self::new(program.source_text, comments)
    }

    /// Raw text between the node's full start and its start.
    pub fn leading_trivia(&self, span: Span) -> &'s str {
        let start = (span.start as usize).min(self.source.len());
        let full_start = self.full_start(start);
        self.source.get(full_start..start).unwrap_or("")
    }

    fn full_start(&self, start: usize) -> usize {
        let mut pos = start;

        loop {
            while let Some(c) = self.source.get(..pos).and_then(|s| s.chars().next_back()) {
                if !is_js_whitespace(c) {
                    break;
                }
                pos -= c.len_utf8();
            }

            match self
                .comments
                .binary_search_by_key(&(pos as u32), |comment| comment.end)
            {
                Ok(idx) if (self.comments[idx].start as usize) < pos => {
                    pos = self.comments[idx].start as usize;
                }
                _ => break,
            }
        }

        pos
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
