//! The core sequence type.
//!
//! A [`Sequence`] owns its symbol content, an [`Alphabet`] tag, and optional
//! identifier/description metadata. Content is validated once at construction
//! and immutable afterwards; slices and transforms return new sequences with
//! fresh metadata. Only the metadata fields are settable.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use crate::alphabet::Alphabet;
use crate::error::{Result, SequenceError};
use crate::packed::MappedSeq;

/// Backing storage for sequence content.
///
/// The in-memory variant is the common case; the mapped variant is produced
/// by [`crate::packed::open`] and shares a read-only file mapping.
#[derive(Clone)]
pub(crate) enum Store {
    Inline(Vec<u8>),
    Mapped(MappedSeq),
}

impl Store {
    fn len(&self) -> usize {
        match self {
            Self::Inline(bytes) => bytes.len(),
            Self::Mapped(mapped) => mapped.len(),
        }
    }

    /// Byte at `index`; bounds are checked by the caller.
    fn byte_at(&self, index: usize) -> u8 {
        match self {
            Self::Inline(bytes) => bytes[index],
            Self::Mapped(mapped) => mapped.symbol_at(index),
        }
    }

    /// Materialize `range` into a fresh byte vector.
    fn subrange(&self, range: Range<usize>) -> Vec<u8> {
        match self {
            Self::Inline(bytes) => bytes[range].to_vec(),
            Self::Mapped(mapped) => mapped.decode_range(range),
        }
    }

    /// Borrowed view of the content when the representation allows it.
    fn as_slice(&self) -> Option<&[u8]> {
        match self {
            Self::Inline(bytes) => Some(bytes),
            Self::Mapped(mapped) => mapped.as_raw_slice(),
        }
    }
}

/// An alphabet-validated biological sequence with optional metadata.
#[derive(Clone)]
pub struct Sequence {
    store: Store,
    alphabet: Alphabet,
    id: Option<String>,
    description: Option<String>,
}

impl Sequence {
    /// Create a sequence from raw bytes, validating against `alphabet`.
    ///
    /// Bytes are stored exactly as given (no case normalization).
    /// [`Alphabet::Generic`] skips validation entirely.
    pub fn new(bytes: impl AsRef<[u8]>, alphabet: Alphabet) -> Result<Self> {
        let bytes = bytes.as_ref();
        alphabet.validate(bytes)?;
        Ok(Self::from_validated(bytes.to_vec(), alphabet))
    }

    /// Create a DNA sequence
    pub fn dna(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::new(bytes, Alphabet::Dna)
    }

    /// Create an RNA sequence
    pub fn rna(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::new(bytes, Alphabet::Rna)
    }

    /// Create a protein sequence
    pub fn protein(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::new(bytes, Alphabet::Protein)
    }

    /// Create an unvalidated generic sequence
    pub fn generic(bytes: impl AsRef<[u8]>) -> Self {
        Self::from_validated(bytes.as_ref().to_vec(), Alphabet::Generic)
    }

    /// Create a sequence with the alphabet inferred via [`Alphabet::infer`].
    ///
    /// Cannot fail: bytes rejected by every narrow alphabet are stored as
    /// [`Alphabet::Generic`].
    pub fn detect(bytes: impl AsRef<[u8]>) -> Self {
        let bytes = bytes.as_ref();
        Self::from_validated(bytes.to_vec(), Alphabet::infer(bytes))
    }

    /// Construct from content already known to satisfy `alphabet`.
    pub(crate) fn from_validated(bytes: Vec<u8>, alphabet: Alphabet) -> Self {
        Self {
            store: Store::Inline(bytes),
            alphabet,
            id: None,
            description: None,
        }
    }

    /// Construct over a memory-mapped packed store.
    pub(crate) fn from_mapped(mapped: MappedSeq) -> Self {
        let alphabet = mapped.alphabet();
        Self {
            store: Store::Mapped(mapped),
            alphabet,
            id: None,
            description: None,
        }
    }

    /// Number of symbols, O(1)
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the sequence holds no symbols
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The alphabet this sequence was validated against
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The sequence identifier, if set
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The free-text description, if set
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the sequence identifier
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Set the free-text description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Builder-style identifier assignment
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Builder-style description assignment
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Byte at `index`, with negative indices counted from the end
    /// (`-1` is the last byte).
    pub fn get(&self, index: isize) -> Result<u8> {
        let length = self.len();
        let resolved = if index < 0 {
            index + length as isize
        } else {
            index
        };
        if resolved < 0 || resolved >= length as isize {
            return Err(SequenceError::IndexOutOfRange { index, length }.into());
        }
        Ok(self.store.byte_at(resolved as usize))
    }

    /// Extract a subsequence with Python slice semantics.
    ///
    /// `start`/`stop` default to the appropriate end for the sign of `step`,
    /// count from the end when negative, and clamp to the sequence bounds.
    /// `step` may be any non-zero integer; a step of zero is an error. The
    /// result inherits the alphabet and carries no identifier/description.
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self> {
        if step == 0 {
            return Err(SequenceError::ZeroStep.into());
        }
        let length = self.len() as isize;
        let backward = step < 0;

        let clamp = |value: isize| -> isize {
            let resolved = if value < 0 { value + length } else { value };
            if backward {
                resolved.clamp(-1, length - 1)
            } else {
                resolved.clamp(0, length)
            }
        };
        let start = start.map_or(if backward { length - 1 } else { 0 }, clamp);
        let stop = stop.map_or(if backward { -1 } else { length }, clamp);

        if step == 1 {
            let bytes = self.store.subrange(start as usize..stop.max(start) as usize);
            return Ok(Self::from_validated(bytes, self.alphabet));
        }

        let mut bytes = Vec::new();
        let mut index = start;
        while if backward { index > stop } else { index < stop } {
            bytes.push(self.store.byte_at(index as usize));
            index += step;
        }
        Ok(Self::from_validated(bytes, self.alphabet))
    }

    /// The sequence content.
    ///
    /// Borrowed for in-memory and byte-encoded mapped storage; 2-bit mapped
    /// storage is decoded into an owned buffer.
    pub fn as_bytes(&self) -> Cow<'_, [u8]> {
        match self.store.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(self.store.subrange(0..self.len())),
        }
    }

    /// Exact copy of the stored content
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().into_owned()
    }

    /// A new sequence with the symbol order reversed
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        Self::from_validated(bytes, self.alphabet)
    }

    /// Concatenate with another sequence of the same alphabet.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        if self.alphabet != other.alphabet {
            return Err(SequenceError::AlphabetMismatch {
                left: self.alphabet.name(),
                right: other.alphabet.name(),
            }
            .into());
        }
        let mut bytes = self.to_bytes();
        bytes.extend_from_slice(&other.as_bytes());
        Ok(Self::from_validated(bytes, self.alphabet))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.as_bytes()))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.as_bytes();
        let preview_len = bytes.len().min(20);
        let preview = String::from_utf8_lossy(&bytes[..preview_len]);
        let ellipsis = if bytes.len() > preview_len { "..." } else { "" };
        write!(
            f,
            "Sequence<{}>(\"{preview}{ellipsis}\", {} symbols)",
            self.alphabet,
            bytes.len()
        )
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use anyhow::Result;

    #[test]
    fn construct_and_export() -> Result<()> {
        let seq = Sequence::dna("ACGTACGT")?;
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.alphabet(), Alphabet::Dna);
        assert_eq!(seq.to_bytes(), b"ACGTACGT");
        Ok(())
    }

    #[test]
    fn construct_preserves_bytes_exactly() -> Result<()> {
        // No case normalization: lowercase is only legal under Generic
        let seq = Sequence::generic(b"acgt\xFF");
        assert_eq!(seq.to_bytes(), b"acgt\xFF");
        let seq = Sequence::protein("ACDEFGHIKLMNPQRSTVWYX")?;
        assert_eq!(seq.to_bytes(), b"ACDEFGHIKLMNPQRSTVWYX");
        Ok(())
    }

    #[test]
    fn invalid_construction() {
        assert!(Sequence::dna("ACGUXYZ").is_err());
        assert!(Sequence::rna("ACGUTXYZ").is_err());
        assert!(Sequence::protein("ACDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
        assert!(Sequence::dna("acgt").is_err());
    }

    #[test]
    fn detect_falls_back_to_generic() {
        assert_eq!(Sequence::detect("ACGT").alphabet(), Alphabet::Dna);
        assert_eq!(Sequence::detect("ACGU").alphabet(), Alphabet::Rna);
        assert_eq!(Sequence::detect("MKLV").alphabet(), Alphabet::Protein);
        assert_eq!(Sequence::detect("hello!").alphabet(), Alphabet::Generic);
    }

    #[test]
    fn metadata_setters() -> Result<()> {
        let mut seq = Sequence::dna("ACGT")?.with_id("seq1").with_description("first");
        assert_eq!(seq.id(), Some("seq1"));
        assert_eq!(seq.description(), Some("first"));
        seq.set_id("renamed");
        seq.set_description("second");
        assert_eq!(seq.id(), Some("renamed"));
        assert_eq!(seq.description(), Some("second"));
        Ok(())
    }

    #[test]
    fn indexing() -> Result<()> {
        let seq = Sequence::dna("ACGTACGT")?;
        assert_eq!(seq.get(0)?, b'A');
        assert_eq!(seq.get(3)?, b'T');
        assert_eq!(seq.get(-1)?, b'T');
        assert_eq!(seq.get(-8)?, b'A');
        assert!(seq.get(100).is_err());
        assert!(seq.get(8).is_err());
        assert!(seq.get(-9).is_err());
        Ok(())
    }

    #[test]
    fn slicing_contiguous() -> Result<()> {
        let seq = Sequence::dna("ACGTACGT")?;
        assert_eq!(seq.slice(Some(0), Some(4), 1)?.to_bytes(), b"ACGT");
        assert_eq!(seq.slice(Some(2), Some(6), 1)?.to_bytes(), b"GTAC");
        assert_eq!(seq.slice(Some(-4), None, 1)?.to_bytes(), b"ACGT");
        assert_eq!(seq.slice(None, Some(-4), 1)?.to_bytes(), b"ACGT");
        // Bounds clamp instead of failing
        assert_eq!(seq.slice(Some(4), Some(100), 1)?.to_bytes(), b"ACGT");
        assert_eq!(seq.slice(Some(6), Some(2), 1)?.to_bytes(), b"");
        Ok(())
    }

    #[test]
    fn slicing_stepped() -> Result<()> {
        let seq = Sequence::dna("ACGTACGT")?;
        assert_eq!(seq.slice(None, None, 2)?.to_bytes(), b"AGAG");
        assert_eq!(seq.slice(Some(1), None, 2)?.to_bytes(), b"CTCT");
        assert_eq!(seq.slice(None, None, -1)?.to_bytes(), b"TGCATGCA");
        assert_eq!(seq.slice(Some(6), Some(2), -2)?.to_bytes(), b"GA");
        assert!(seq.slice(None, None, 0).is_err());
        Ok(())
    }

    #[test]
    fn slice_metadata_is_fresh() -> Result<()> {
        let seq = Sequence::dna("ACGTACGT")?.with_id("seq1").with_description("x");
        let sub = seq.slice(Some(0), Some(4), 1)?;
        assert_eq!(sub.alphabet(), Alphabet::Dna);
        assert_eq!(sub.id(), None);
        assert_eq!(sub.description(), None);
        Ok(())
    }

    #[test]
    fn reverse_involution() -> Result<()> {
        let seq = Sequence::dna("AACGT")?;
        assert_eq!(seq.reverse().to_bytes(), b"TGCAA");
        assert_eq!(seq.reverse().reverse().to_bytes(), seq.to_bytes());
        Ok(())
    }

    #[test]
    fn concat_same_alphabet() -> Result<()> {
        let left = Sequence::dna("ACGT")?;
        let right = Sequence::dna("TGCA")?;
        assert_eq!(left.concat(&right)?.to_bytes(), b"ACGTTGCA");
        Ok(())
    }

    #[test]
    fn concat_alphabet_mismatch() -> Result<()> {
        let dna = Sequence::dna("ACGT")?;
        let rna = Sequence::rna("ACGU")?;
        assert!(dna.concat(&rna).is_err());
        Ok(())
    }

    #[test]
    fn empty_sequence() -> Result<()> {
        let seq = Sequence::dna("")?;
        assert!(seq.is_empty());
        assert!(seq.get(0).is_err());
        assert!(seq.get(-1).is_err());
        assert_eq!(seq.slice(None, None, 1)?.len(), 0);
        Ok(())
    }
}
