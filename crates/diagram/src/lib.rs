//! diagram - Mermaid class diagrams from C# sources
//!
//! Recognizer (text -> statements), renderer and directory traversal

mod config;
pub mod discovery;
mod mermaid;
mod recognizer;
mod statement;
mod traverser;

pub use config::DiagramConfig;
pub use discovery::normalize_path;
pub use mermaid::MermaidGenerator;
pub use recognizer::{recognize, statements_for, RecognizeOptions};
pub use statement::{drop_generics, rewrite_generics, DiagramStatement};
pub use traverser::{
    traverse, BatchResult, BatchTraverser, DiagramItem, DiagramResponse, FileError, FileResult,
    SourceUnit, TraverseError, MAX_FILES_LIMIT,
};
