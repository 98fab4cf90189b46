//! Convenience re-exports of the crate's commonly used types and functions.

pub use crate::alphabet::Alphabet;
pub use crate::error::{Error, FastaError, PackedError, Result, SequenceError};
pub use crate::fasta::{self, FastaRecord, Format};
pub use crate::packed;
pub use crate::random::random_dna;
pub use crate::sequence::Sequence;
