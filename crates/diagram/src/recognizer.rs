use crate::statement::{drop_generics, rewrite_generics, DiagramStatement};
use csharp::TypeDeclaration;
use serde::{Deserialize, Serialize};

/// Emission switches for the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizeOptions {
    /// Carried for callers; interfaces are diagrammed regardless
    pub include_interfaces: bool,
    /// Emit `<<abstract>>` markers for abstract types
    pub include_abstracts: bool,
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self {
            include_interfaces: true,
            include_abstracts: true,
        }
    }
}

/// Turns C# source text into diagram statements.
///
/// Per declaration, in source order: node, abstract marker, one edge per base
/// (base -> derived), one note per attribute. Unrecognized text produces
/// nothing; this never fails.
pub fn recognize(text: &str, options: &RecognizeOptions) -> Vec<DiagramStatement> {
    csharp::parse_declarations(text)
        .iter()
        .flat_map(|decl| statements_for(decl, options))
        .collect()
}

/// Statements for a single declaration
pub fn statements_for(decl: &TypeDeclaration, options: &RecognizeOptions) -> Vec<DiagramStatement> {
    let name = rewrite_generics(&decl.name);
    // TODO: gate interface emission on options.include_interfaces once the
    // expected behaviour is settled; today interfaces are always diagrammed.
    if decl.is_interface() && !options.include_interfaces {
        tracing::debug!("Interface {} diagrammed although interfaces are excluded", name);
    }
    let mut statements = vec![DiagramStatement::ClassNode { name: name.clone() }];

    if options.include_abstracts && decl.is_abstract() {
        statements.push(DiagramStatement::AbstractMarker { name: name.clone() });
    }

    for base in decl.bases.iter().filter_map(|b| base_name(b)) {
        statements.push(DiagramStatement::InheritanceEdge {
            base,
            derived: name.clone(),
        });
    }

    for attribute in &decl.attributes {
        statements.push(DiagramStatement::AttributeNote {
            name: name.clone(),
            text: note_text(attribute),
        });
    }

    statements
}

/// Diagram name of a base list entry; `None` for brace fragments and empties
#[doc(hidden)]
pub fn base_name(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.is_empty() || entry.starts_with('{') {
        return None;
    }
    let stripped = drop_generics(entry);
    stripped
        .split_whitespace()
        .last()
        .map(str::to_string)
}

/// Note body for an attribute: brackets and outer whitespace removed, double
/// quotes turned into single quotes, line breaks collapsed
#[doc(hidden)]
pub fn note_text(attribute: &str) -> String {
    let inner = attribute.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "'")
}
