//! Diagram configuration

use crate::recognizer::RecognizeOptions;
use crate::traverser::BatchTraverser;

/// Defaults for a traversal, overridable from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramConfig {
    pub root: String,
    pub max_files: usize,
    pub include_interfaces: bool,
    pub include_abstracts: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            root: "/workspace/src".to_string(),
            max_files: 10,
            include_interfaces: true,
            include_abstracts: true,
        }
    }
}

impl DiagramConfig {
    /// Loads configuration from `SHARPMAP_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup; unparsable values are ignored
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("SHARPMAP_ROOT") {
            if !v.trim().is_empty() {
                config.root = v;
            }
        }

        if let Some(v) = lookup("SHARPMAP_MAX_FILES") {
            if let Ok(n) = v.trim().parse() {
                config.max_files = n;
            }
        }

        if let Some(v) = lookup("SHARPMAP_INCLUDE_INTERFACES").and_then(|v| parse_flag(&v)) {
            config.include_interfaces = v;
        }

        if let Some(v) = lookup("SHARPMAP_INCLUDE_ABSTRACTS").and_then(|v| parse_flag(&v)) {
            config.include_abstracts = v;
        }

        config
    }

    pub fn options(&self) -> RecognizeOptions {
        RecognizeOptions {
            include_interfaces: self.include_interfaces,
            include_abstracts: self.include_abstracts,
        }
    }

    /// Traverser configured with these limits and switches
    pub fn traverser(&self) -> BatchTraverser {
        BatchTraverser::new()
            .with_max_files(self.max_files)
            .with_options(self.options())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
