//! # bioseq
//!
//! Alphabet-validated biological sequences with packed storage and FASTA I/O.
//!
//! Sequences are stored as raw bytes validated once, at construction, against
//! a closed symbol [`Alphabet`] (DNA, RNA, protein, or unvalidated generic
//! content). On top of that invariant the crate provides:
//!
//! - **Transforms** — complement, reverse complement, transcription, reverse
//!   transcription, GC content, and protein molecular weight, each dispatched
//!   on the alphabet tag ([`Sequence::complement`] and friends).
//! - **Search** — exact, case-sensitive substring counting and
//!   position-finding with overlapping occurrences included
//!   ([`Sequence::count`], [`Sequence::find_all`]).
//! - **Slicing** — Python-style `start:stop:step` extraction with negative
//!   indices and clamping ([`Sequence::slice`]), plus single-byte access with
//!   negative indexing ([`Sequence::get`]).
//! - **FASTA** — multi-record parsing and 60-column serialization with
//!   per-record alphabet inference ([`fasta`]).
//! - **Packed storage** — a memory-mapped on-disk backing that packs
//!   nucleotide sequences at 2 bits per symbol so gigabase-scale content
//!   never has to be materialized ([`packed`]).
//!
//! ```
//! use bioseq::Sequence;
//!
//! let dna = Sequence::dna("ACGTACGT").unwrap();
//! assert_eq!(dna.reverse_complement().unwrap().to_bytes(), b"ACGTACGT");
//! assert_eq!(dna.transcribe().unwrap().to_bytes(), b"ACGUACGU");
//! assert_eq!(dna.gc_content().unwrap(), 50.0);
//! assert_eq!(dna.find_all("ACG").unwrap(), vec![0, 4]);
//! ```

mod alphabet;
mod error;
pub mod fasta;
pub mod packed;
mod random;
pub mod search;
mod sequence;
mod transform;

pub mod prelude;

pub use alphabet::Alphabet;
pub use error::{Error, FastaError, PackedError, Result, SequenceError};
pub use fasta::{FastaRecord, Format};
pub use random::random_dna;
pub use sequence::Sequence;

#[cfg(test)]
mod testing {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_construct_roundtrip() -> Result<()> {
        for (bytes, alphabet) in [
            (&b"ACGTACGT"[..], Alphabet::Dna),
            (b"ACGUACGU", Alphabet::Rna),
            (b"ACDEFGHIKLMNPQRSTVWYX", Alphabet::Protein),
        ] {
            let seq = Sequence::new(bytes, alphabet)?;
            assert_eq!(seq.to_bytes(), bytes);
            assert_eq!(seq.alphabet(), alphabet);
        }
        Ok(())
    }

    #[test]
    fn test_fasta_file_roundtrip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.fasta");

        let records = vec![
            FastaRecord::new("seq1", Some("First sequence"), Sequence::dna("ACGTACGT")?),
            FastaRecord::new("seq2", Some("Second sequence"), Sequence::dna("GTACGTAC")?),
        ];
        fasta::write(&records, &path)?;

        let reread = fasta::read(&path)?;
        assert_eq!(reread.len(), 2);
        assert_eq!(reread[0].id, "seq1");
        assert_eq!(reread[0].description.as_deref(), Some("First sequence"));
        assert_eq!(reread[0].sequence.to_bytes(), b"ACGTACGT");
        assert_eq!(reread[1].id, "seq2");
        assert_eq!(reread[1].description.as_deref(), Some("Second sequence"));
        assert_eq!(reread[1].sequence.to_bytes(), b"GTACGTAC");

        assert_eq!(fasta::detect_format(&path)?.as_str(), "FASTA");
        Ok(())
    }

    #[test]
    fn test_fasta_to_packed_pipeline() -> Result<()> {
        let dir = tempdir()?;
        let fasta_path = dir.path().join("input.fasta");
        let packed_path = dir.path().join("seq1.pseq");

        let body = "ACGTTGCAACGTTGCAACGTTGCAACGTTGCAACGTTGCA";
        std::fs::write(&fasta_path, format!(">seq1 pipeline\n{body}\n"))?;

        let records = fasta::read(&fasta_path)?;
        packed::write(&packed_path, &records[0].sequence)?;

        let mapped = packed::open(&packed_path)?;
        assert_eq!(mapped.alphabet(), Alphabet::Dna);
        assert_eq!(mapped.to_bytes(), body.as_bytes());
        assert_eq!(
            mapped.reverse_complement()?.to_bytes(),
            records[0].sequence.reverse_complement()?.to_bytes()
        );
        Ok(())
    }

    #[test]
    fn test_transform_chain() -> Result<()> {
        // DNA -> RNA -> DNA with a reverse complement in between
        let dna = Sequence::dna("ATGGCCTAA")?;
        let rna = dna.transcribe()?;
        assert_eq!(rna.to_bytes(), b"AUGGCCUAA");
        let back = rna.reverse_transcribe()?;
        assert_eq!(back.to_bytes(), dna.to_bytes());
        let rc = back.reverse_complement()?;
        assert_eq!(rc.reverse_complement()?.to_bytes(), dna.to_bytes());
        Ok(())
    }

    #[test]
    fn test_random_dna_properties() -> Result<()> {
        let seq = random_dna(100)?;
        assert_eq!(seq.len(), 100);
        assert!(seq.gc_content()? >= 0.0);
        assert!(random_dna(0).is_err());
        Ok(())
    }
}
