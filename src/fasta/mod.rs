//! # FASTA
//!
//! Text interchange for collections of sequences:
//!
//! ```text
//! >id description
//! ACGTACGTACGT...
//! ```
//!
//! A record is a header line (`>` + identifier, optionally followed by
//! whitespace and a free-text description) and every following non-header
//! line concatenated into the sequence body. Input accepts arbitrary line
//! lengths; output wraps the body at 60 characters per line. Each record's
//! alphabet is inferred independently via [`Alphabet::infer`](crate::Alphabet::infer).
//!
//! Parsing and serialization satisfy the round-trip law:
//! `parse(&serialize(&records))` reproduces the same
//! (id, description, bytes) triples regardless of the wrapping width of the
//! original input.
//!
//! ```
//! use bioseq::fasta::{self, FastaRecord};
//! use bioseq::Sequence;
//!
//! let records = vec![FastaRecord::new(
//!     "seq1",
//!     Some("First sequence"),
//!     Sequence::dna("ACGTACGT").unwrap(),
//! )];
//! let text = fasta::serialize(&records);
//! let parsed = fasta::parse(&text).unwrap();
//! assert_eq!(parsed[0].id, "seq1");
//! assert_eq!(parsed[0].sequence.to_bytes(), b"ACGTACGT");
//! ```

mod reader;
mod writer;

pub use reader::{parse, read};
pub use writer::{serialize, write};

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{FastaError, Result};
use crate::sequence::Sequence;

/// One FASTA record: an identifier, an optional description, and a sequence.
///
/// A transport grouping for codec operations, not a storage primitive.
#[derive(Debug, Clone)]
pub struct FastaRecord {
    /// Sequence identifier (without the `>`)
    pub id: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// The sequence content
    pub sequence: Sequence,
}

impl FastaRecord {
    /// Create a new FASTA record
    pub fn new(id: &str, description: Option<&str>, sequence: Sequence) -> Self {
        Self {
            id: id.to_string(),
            description: description.map(ToString::to_string),
            sequence,
        }
    }
}

/// A recognized sequence file format.
///
/// FASTA is currently the only recognized format; additional formats are a
/// collaborator concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Fasta,
}

impl Format {
    /// Canonical format name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fasta => "FASTA",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the format of sequence text from its first non-empty line.
pub fn detect_format_str(text: &str) -> Result<Format> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            return Ok(Format::Fasta);
        }
        break;
    }
    Err(FastaError::UnknownFormat.into())
}

/// Detect the format of a sequence file from its first non-empty line.
pub fn detect_format<P: AsRef<Path>>(path: P) -> Result<Format> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('>') {
            return Ok(Format::Fasta);
        }
        break;
    }
    Err(FastaError::UnknownFormat.into())
}

#[cfg(test)]
mod testing {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn detect_fasta_text() -> Result<()> {
        assert_eq!(detect_format_str(">seq1\nACGT\n")?, Format::Fasta);
        assert_eq!(detect_format_str("\n\n>seq1\nACGT\n")?, Format::Fasta);
        Ok(())
    }

    #[test]
    fn detect_unrecognized_text() {
        assert!(detect_format_str("ACGT\n>late header\n").is_err());
        assert!(detect_format_str("").is_err());
    }

    #[test]
    fn detect_fasta_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, ">seq1")?;
        writeln!(file, "ACGT")?;
        file.flush()?;
        let format = detect_format(file.path())?;
        assert_eq!(format.as_str(), "FASTA");
        Ok(())
    }

    #[test]
    fn detect_nonexistent_path() {
        let err = detect_format("/nonexistent/input.fasta").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
