//! Random sequence generation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::alphabet::Alphabet;
use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;

const BASES: [u8; 4] = *b"ACGT";

/// Generate a uniformly random DNA sequence of `length` bases.
///
/// A zero length is rejected with [`SequenceError::EmptySequence`].
pub fn random_dna(length: usize) -> Result<Sequence> {
    if length == 0 {
        return Err(SequenceError::EmptySequence {
            operation: "random_dna",
        }
        .into());
    }
    let mut rng = SmallRng::from_os_rng();
    let bytes: Vec<u8> = (0..length)
        .map(|_| BASES[rng.random_range(0..BASES.len())])
        .collect();
    Sequence::new(bytes, Alphabet::Dna)
}

#[cfg(test)]
mod testing {
    use super::*;
    use anyhow::Result;

    #[test]
    fn generates_requested_length() -> Result<()> {
        let seq = random_dna(100)?;
        assert_eq!(seq.len(), 100);
        assert_eq!(seq.alphabet(), Alphabet::Dna);
        for &base in seq.as_bytes().iter() {
            assert!(matches!(base, b'A' | b'C' | b'G' | b'T'));
        }
        Ok(())
    }

    #[test]
    fn zero_length_rejected() {
        assert!(random_dna(0).is_err());
    }

    #[test]
    fn successive_draws_differ() -> Result<()> {
        // Astronomically unlikely to collide at this length
        let a = random_dna(256)?;
        let b = random_dna(256)?;
        assert_ne!(a.to_bytes(), b.to_bytes());
        Ok(())
    }
}
