/// Custom Result type for bioseq operations, wrapping the crate [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bioseq library, encompassing all possible error
/// cases that can occur while constructing, transforming, searching, and
/// (de)serializing biological sequences.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors from sequence validation, indexing, and transforms
    Sequence(#[from] SequenceError),
    /// Errors from FASTA parsing and format detection
    Fasta(#[from] FastaError),
    /// Errors from the packed on-disk sequence format
    Packed(#[from] PackedError),
    /// Standard I/O errors from the Rust standard library
    Io(#[from] std::io::Error),
    /// Errors from the bitnuc nucleotide packing library
    Bitnuc(#[from] bitnuc::Error),
}

/// Errors from sequence validation and per-sequence operations
#[derive(thiserror::Error, Debug)]
pub enum SequenceError {
    /// A byte outside the declared alphabet was encountered during validation
    #[error("Invalid {alphabet} symbol '{}' (0x{byte:02X}) at position {position}", *byte as char)]
    InvalidSymbol {
        alphabet: &'static str,
        byte: u8,
        position: usize,
    },

    /// A single-byte access resolved outside `[0, length)` after
    /// negative-index normalization
    #[error("Index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: isize, length: usize },

    /// A slice was requested with a step of zero
    #[error("Slice step cannot be zero")]
    ZeroStep,

    /// A transform was invoked on a sequence whose alphabet does not support it
    #[error("Operation '{operation}' is not supported for the {alphabet} alphabet")]
    UnsupportedTransform {
        operation: &'static str,
        alphabet: &'static str,
    },

    /// An operation requiring non-zero length received a zero-length input
    #[error("Operation '{operation}' requires a non-empty sequence")]
    EmptySequence { operation: &'static str },

    /// An empty pattern was passed to a search operation
    #[error("Search pattern cannot be empty")]
    EmptyPattern,

    /// Two sequences with different alphabets were combined
    #[error("Cannot combine {left} and {right} sequences")]
    AlphabetMismatch {
        left: &'static str,
        right: &'static str,
    },
}

/// Errors from parsing FASTA text and detecting file formats
#[derive(thiserror::Error, Debug)]
pub enum FastaError {
    /// Sequence data appeared before any `>` header line
    #[error("Sequence data at line {line} appears before any header")]
    DataBeforeHeader { line: usize },

    /// The input contained no `>` header at all
    #[error("No FASTA header found in input")]
    MissingHeader,

    /// The input did not match any recognized sequence format
    #[error("Could not determine file format")]
    UnknownFormat,
}

/// Errors from reading and validating packed sequence files
#[derive(thiserror::Error, Debug)]
pub enum PackedError {
    /// The magic number in the header does not match the expected value
    #[error("Invalid magic number: {0}")]
    InvalidMagicNumber(u32),

    /// The format version in the header is not supported
    #[error("Invalid format version: {0}")]
    InvalidFormatVersion(u8),

    /// The alphabet tag in the header does not name a known alphabet
    #[error("Unknown alphabet tag: {0}")]
    UnknownAlphabetTag(u8),

    /// The encoding tag in the header does not name a known encoding
    #[error("Unknown encoding tag: {0}")]
    UnknownEncodingTag(u8),

    /// The file being read is not a regular file
    #[error("File is not regular")]
    IncompatibleFile,

    /// The file size does not match what the header implies
    #[error(
        "Number of bytes in file does not match expectation - possibly truncated at byte pos {0}"
    )]
    Truncated(usize),
}
