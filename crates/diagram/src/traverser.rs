use crate::discovery::{self, eligible_files, relative_path};
use crate::mermaid::MermaidGenerator;
use crate::recognizer::{recognize, RecognizeOptions};
use crate::statement::DiagramStatement;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound accepted for `max_files`
pub const MAX_FILES_LIMIT: usize = 1000;

#[derive(Error, Debug)]
pub enum TraverseError {
    #[error("Folder not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Not an eligible C# source file (generated or not .cs): {}", .0.display())]
    NotEligible(PathBuf),
    #[error("max_files must be between 1 and 1000, got {0}")]
    InvalidMaxFiles(usize),
}

pub type Result<T> = std::result::Result<T, TraverseError>;

/// Why a single file was left out of a batch
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Cannot read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("No type declarations found")]
    NoDeclarations,
}

/// One input file, read once and dropped after recognition
#[derive(Debug)]
pub struct SourceUnit {
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub text: String,
}

impl SourceUnit {
    pub fn read(absolute_path: PathBuf, relative_path: String) -> std::result::Result<Self, FileError> {
        let text = std::fs::read_to_string(&absolute_path)?;
        Ok(Self {
            relative_path,
            absolute_path,
            text,
        })
    }
}

/// Statements recognized in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub relative_path: String,
    pub statements: Vec<DiagramStatement>,
}

impl FileResult {
    pub fn render(&self, generator: &MermaidGenerator) -> String {
        generator.generate_file_diagram(&self.relative_path, &self.statements)
    }
}

/// Outcome of a traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Successful files in walk order
    pub files: Vec<FileResult>,
    pub processed: usize,
    /// Stopped at the cap while eligible files remained
    pub truncated: bool,
    /// Eligible files examined, failures included
    pub total_scanned: usize,
}

impl BatchResult {
    pub fn to_response(&self) -> DiagramResponse {
        let generator = MermaidGenerator::new();
        DiagramResponse {
            content: self
                .files
                .iter()
                .map(|f| DiagramItem {
                    file: f.relative_path.clone(),
                    mermaid: f.render(&generator),
                })
                .collect(),
            processed: self.processed,
            truncated: self.truncated,
            total_scanned: self.total_scanned,
        }
    }
}

/// Rendered diagram of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramItem {
    /// Root-relative path, or the file name for single-file runs
    pub file: String,
    /// Mermaid classDiagram text
    pub mermaid: String,
}

/// Serializable batch outcome handed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramResponse {
    pub content: Vec<DiagramItem>,
    pub processed: usize,
    pub truncated: bool,
    pub total_scanned: usize,
}

/// Walks a source tree and recognizes every eligible file, up to a cap
#[derive(Debug, Clone)]
pub struct BatchTraverser {
    max_files: usize,
    options: RecognizeOptions,
}

impl BatchTraverser {
    pub fn new() -> Self {
        Self {
            max_files: 10,
            options: RecognizeOptions::default(),
        }
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_options(mut self, options: RecognizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Traverses the directory tree under `root`
    pub fn traverse(&self, root: &Path) -> Result<BatchResult> {
        if !(1..=MAX_FILES_LIMIT).contains(&self.max_files) {
            return Err(TraverseError::InvalidMaxFiles(self.max_files));
        }
        if !root.exists() {
            return Err(TraverseError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(TraverseError::NotADirectory(root.to_path_buf()));
        }

        tracing::info!("Traversing {} (max_files={})", root.display(), self.max_files);

        let mut result = BatchResult::default();
        for path in eligible_files(root) {
            result.total_scanned += 1;
            if result.processed == self.max_files {
                // An eligible file exists beyond the cap
                result.truncated = true;
                break;
            }

            let relative = relative_path(root, &path);
            match self.process(path, relative.clone()) {
                Ok(file) => {
                    result.files.push(file);
                    result.processed += 1;
                }
                Err(e) => tracing::warn!("Skipping {}: {}", relative, e),
            }
        }

        tracing::info!(
            "Processed {} of {} scanned files (truncated: {})",
            result.processed,
            result.total_scanned,
            result.truncated
        );
        Ok(result)
    }

    /// Single-file variant: the same pipeline capped at one file
    pub fn traverse_file(&self, path: &Path) -> Result<BatchResult> {
        if !path.exists() {
            return Err(TraverseError::NotFound(path.to_path_buf()));
        }
        if path.is_dir() {
            return Err(TraverseError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !discovery::is_eligible_name(&name) {
            return Err(TraverseError::NotEligible(path.to_path_buf()));
        }

        let mut result = BatchResult {
            total_scanned: 1,
            ..BatchResult::default()
        };
        match self.process(path.to_path_buf(), name.clone()) {
            Ok(file) => {
                result.files.push(file);
                result.processed = 1;
            }
            Err(e) => tracing::warn!("Skipping {}: {}", name, e),
        }
        Ok(result)
    }

    fn process(&self, absolute: PathBuf, relative: String) -> std::result::Result<FileResult, FileError> {
        tracing::debug!("Reading {}", absolute.display());
        let unit = SourceUnit::read(absolute, relative)?;

        let statements = recognize(&unit.text, &self.options);
        if statements.is_empty() {
            return Err(FileError::NoDeclarations);
        }
        tracing::debug!(
            "{} statements from {}",
            statements.len(),
            unit.absolute_path.display()
        );

        Ok(FileResult {
            relative_path: unit.relative_path,
            statements,
        })
    }
}

impl Default for BatchTraverser {
    fn default() -> Self {
        Self::new()
    }
}

/// Traverses `root` with the given cap and switches
pub fn traverse(
    root: &Path,
    max_files: usize,
    include_interfaces: bool,
    include_abstracts: bool,
) -> Result<BatchResult> {
    BatchTraverser::new()
        .with_max_files(max_files)
        .with_options(RecognizeOptions {
            include_interfaces,
            include_abstracts,
        })
        .traverse(root)
}
