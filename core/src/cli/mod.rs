pub mod report;

use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

/// Command-line arguments for radstruct
#[derive(Parser, Debug)]
#[command(name = "radstruct")]
#[command(about = "Structure chest X-ray captions into per-finding observations")]
#[command(version)]
pub struct Cli {
    /// Caption files, one document per file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Structure this caption text instead of reading files
    #[arg(short, long, conflicts_with = "files")]
    pub text: Option<String>,

    /// JSON file overriding category synonym lists
    #[arg(short, long, value_name = "FILE")]
    pub synonyms: Option<PathBuf>,

    /// Longest accepted caption, in characters
    #[arg(long, default_value_t = crate::analysis::DEFAULT_MAX_CHARS)]
    pub max_chars: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// One caption to structure, with a label naming where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source: String,
    pub text: String,
}

impl Cli {
    /// Collects the documents named on the command line
    ///
    /// Inline `--text` wins; otherwise each file is one document; with
    /// neither, stdin is read as a single document.
    pub fn documents(&self) -> Result<Vec<Document>> {
        if let Some(text) = &self.text {
            return Ok(vec![Document {
                source: "<text>".to_string(),
                text: text.clone(),
            }]);
        }

        if self.files.is_empty() {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(vec![Document {
                source: "<stdin>".to_string(),
                text,
            }]);
        }

        self.files
            .iter()
            .map(|path| -> Result<Document> {
                Ok(Document {
                    source: path.display().to_string(),
                    text: std::fs::read_to_string(path)?,
                })
            })
            .collect()
    }
}
