use serde::Serialize;
use std::fmt;

/// One line of a Mermaid `classDiagram`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagramStatement {
    /// `class Name`
    ClassNode { name: String },
    /// `class Name { <<abstract>> }`
    AbstractMarker { name: String },
    /// `Base <|-- Derived`
    InheritanceEdge { base: String, derived: String },
    /// `note for Name "text"`
    AttributeNote { name: String, text: String },
}

impl fmt::Display for DiagramStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassNode { name } => write!(f, "class {}", name),
            Self::AbstractMarker { name } => write!(f, "class {} {{ <<abstract>> }}", name),
            Self::InheritanceEdge { base, derived } => write!(f, "{} <|-- {}", base, derived),
            Self::AttributeNote { name, text } => write!(f, "note for {} \"{}\"", name, text),
        }
    }
}

/// Rewrites generic brackets into Mermaid's tilde form: `Map<K, V>` -> `Map~K, V~`
pub fn rewrite_generics(name: &str) -> String {
    name.replace(['<', '>'], "~")
}

/// Removes generic argument lists, nested ones included: `IEquatable<List<T>>` -> `IEquatable`
pub fn drop_generics(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut depth = 0usize;
    for c in name.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
