//! Regex fragments for C# declaration headers
//!
//! This is not a C# parser. Each construct of a declaration header gets its
//! own fragment and its own matcher; `DECLARATION` stitches the fragments
//! together. Anything the fragments cannot express (nested brackets inside
//! attributes, modifiers before the access keyword, preprocessor branches)
//! is simply not matched.

use crate::types::Modifier;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Zero or more `[...]` annotations, each may be followed by a line break
pub const ATTRIBUTE_BLOCK: &str = r"((?:\[[^\]]+\]\s*)*)";

/// Optional access modifier; two-word forms are listed first
pub const ACCESS: &str =
    r"(?:(?:protected\s+internal|private\s+protected|public|internal|private|protected)\s+)?";

/// Optional `new` (member hiding on nested types)
pub const NEW: &str = r"(?:new\s+)?";

/// Run of modifier keywords, captured as one string
pub const MODIFIERS: &str =
    r"((?:(?:abstract|sealed|partial|static|unsafe|readonly|ref|file)\s+)*)";

/// Kind keyword and identifier with an optional generic parameter list
pub const KIND_AND_NAME: &str =
    r"\b(record(?:\s+(?:class|struct))?|class|interface|struct)\s+(\w+(?:<[^>]+>)?)";

/// Optional `: Base, IFoo` clause; continues over following lines until a
/// brace or the `;` of a body-less declaration
pub const BASE_CLAUSE: &str = r"(?:\s*:\s*([^{};\n]+(?:\n\s*[^{};\n]+)*))?";

/// Capture groups of `DECLARATION`
pub mod group {
    pub const ATTRIBUTES: usize = 1;
    pub const MODIFIERS: usize = 2;
    pub const KIND: usize = 3;
    pub const NAME: usize = 4;
    pub const BASES: usize = 5;
}

/// Full declaration header, anchored at a line start with leading whitespace allowed
pub static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?m)^\s*{ATTRIBUTE_BLOCK}{ACCESS}{NEW}{MODIFIERS}{KIND_AND_NAME}{BASE_CLAUSE}"
    );
    Regex::new(&pattern).expect("declaration pattern is valid")
});

static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]+\]").expect("attribute pattern is valid"));

static MODIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(abstract|sealed|partial|static|unsafe|readonly|ref|file)\b")
        .expect("modifier pattern is valid")
});

// String literals come first so that `//` inside quotes is never taken for a comment
static COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:[^"\\]|\\.)*"|(?s:/\*.*?\*/)|//[^\n]*"#).expect("comment pattern is valid")
});

static CONSTRAINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bwhere\b").expect("constraint pattern is valid"));

/// Removes `//` and `/* */` comments from a captured fragment; string
/// literals are kept as written
pub fn strip_comments(text: &str) -> String {
    COMMENT
        .replace_all(text, |caps: &Captures| {
            let m = &caps[0];
            if m.starts_with('"') {
                m.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Whether the non-blank line just before `offset` opens an attribute.
///
/// A declaration matched right after such a line lost its attribute block,
/// typically to nested brackets like `[Route("api/[controller]")]`.
pub fn follows_unmatched_attribute(text: &str, offset: usize) -> bool {
    text.get(..offset)
        .and_then(|before| before.trim_end().lines().last())
        .map_or(false, |line| line.trim_start().starts_with('['))
}

/// Splits an attribute block into its annotations, brackets kept
pub fn split_attributes(block: &str) -> Vec<String> {
    ATTRIBUTE
        .find_iter(block)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reads the modifier keywords of a modifier run in source order
pub fn parse_modifiers(run: &str) -> Vec<Modifier> {
    MODIFIER
        .find_iter(run)
        .filter_map(|m| Modifier::from_keyword(m.as_str()))
        .collect()
}

/// Splits a base clause on top-level commas.
///
/// Commas nested in `<...>` or `(...)` do not split, so `IDictionary<K, V>`
/// stays one entry. A generic constraint clause (`where T : ...`) ends the
/// list.
pub fn split_base_list(clause: &str) -> Vec<String> {
    let clause = match CONSTRAINT.find(clause) {
        Some(m) => &clause[..m.start()],
        None => clause,
    };

    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in clause.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&clause[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&clause[start..]);

    entries
        .into_iter()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}
