use crate::statement::DiagramStatement;
use std::path::Path;

/// Mermaid classDiagram renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct MermaidGenerator;

impl MermaidGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders one source file: header, file comment, one line per statement
    pub fn generate_file_diagram(&self, source_path: &str, statements: &[DiagramStatement]) -> String {
        let mut lines = Vec::with_capacity(statements.len() + 2);
        lines.push("classDiagram".to_string());
        lines.push(format!("%% File: {}", Self::file_name(source_path)));
        lines.extend(statements.iter().map(ToString::to_string));
        lines.join("\n")
    }

    /// Wraps a diagram in a Markdown code fence
    pub fn fenced(diagram: &str) -> String {
        format!("```mermaid\n{}\n```\n", diagram)
    }

    #[doc(hidden)]
    pub fn file_name(path: &str) -> String {
        Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string())
    }
}
