//! Biological transforms over [`Sequence`] values.
//!
//! Every operation dispatches on the alphabet tag, is pure with respect to
//! its input, and returns a newly constructed sequence (or scalar). Invoking
//! a transform on an unsupported alphabet fails with
//! [`SequenceError::UnsupportedTransform`].

use crate::alphabet::Alphabet;
use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;

/// Average mass of a water molecule in Daltons, lost per peptide bond
const WATER_MASS: f64 = 18.015;

/// Average mass assigned to the unknown residue `X`: the mean of the 20
/// standard residue masses
const UNKNOWN_RESIDUE_MASS: f64 = 128.16;

/// Average molecular weights (Da) of the free amino acids
fn residue_mass(residue: u8) -> f64 {
    match residue {
        b'A' => 89.09,
        b'R' => 174.20,
        b'N' => 132.12,
        b'D' => 133.10,
        b'C' => 121.16,
        b'E' => 147.13,
        b'Q' => 146.15,
        b'G' => 75.03,
        b'H' => 155.16,
        b'I' | b'L' => 131.17,
        b'K' => 146.19,
        b'M' => 149.21,
        b'F' => 165.19,
        b'P' => 115.13,
        b'S' => 105.09,
        b'T' => 119.12,
        b'W' => 204.23,
        b'Y' => 181.19,
        b'V' => 117.15,
        _ => UNKNOWN_RESIDUE_MASS,
    }
}

impl Sequence {
    fn require(&self, operation: &'static str, expected: &[Alphabet]) -> Result<()> {
        if expected.contains(&self.alphabet()) {
            Ok(())
        } else {
            Err(SequenceError::UnsupportedTransform {
                operation,
                alphabet: self.alphabet().name(),
            }
            .into())
        }
    }

    /// Per-symbol complement (A↔T for DNA, A↔U for RNA, C↔G), order preserved.
    pub fn complement(&self) -> Result<Self> {
        self.require("complement", &[Alphabet::Dna, Alphabet::Rna])?;
        let alphabet = self.alphabet();
        let bytes = self
            .as_bytes()
            .iter()
            .map(|&b| alphabet.complement(b))
            .collect();
        Ok(Self::from_validated(bytes, alphabet))
    }

    /// Complement followed by reversal of symbol order; self-inverse.
    pub fn reverse_complement(&self) -> Result<Self> {
        self.require("reverse_complement", &[Alphabet::Dna, Alphabet::Rna])?;
        let alphabet = self.alphabet();
        let bytes = self
            .as_bytes()
            .iter()
            .rev()
            .map(|&b| alphabet.complement(b))
            .collect();
        Ok(Self::from_validated(bytes, alphabet))
    }

    /// Transcribe DNA to RNA (T→U), order preserved.
    pub fn transcribe(&self) -> Result<Self> {
        self.require("transcribe", &[Alphabet::Dna])?;
        let bytes = self
            .as_bytes()
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        Ok(Self::from_validated(bytes, Alphabet::Rna))
    }

    /// Reverse-transcribe RNA to DNA (U→T), order preserved.
    ///
    /// The name denotes the biological direction; symbol order is unchanged.
    pub fn reverse_transcribe(&self) -> Result<Self> {
        self.require("reverse_transcribe", &[Alphabet::Rna])?;
        let bytes = self
            .as_bytes()
            .iter()
            .map(|&b| if b == b'U' { b'T' } else { b })
            .collect();
        Ok(Self::from_validated(bytes, Alphabet::Dna))
    }

    /// Percentage of G and C symbols among all symbols.
    ///
    /// Fails with [`SequenceError::EmptySequence`] on a zero-length sequence.
    pub fn gc_content(&self) -> Result<f64> {
        self.require("gc_content", &[Alphabet::Dna, Alphabet::Rna])?;
        if self.is_empty() {
            return Err(SequenceError::EmptySequence {
                operation: "gc_content",
            }
            .into());
        }
        let gc = self
            .as_bytes()
            .iter()
            .filter(|&&b| b == b'G' || b == b'C')
            .count();
        Ok(100.0 * gc as f64 / self.len() as f64)
    }

    /// Estimated molecular weight in Daltons.
    ///
    /// Sum of residue average masses minus `(len - 1)` water masses lost to
    /// peptide-bond condensation. An empty sequence weighs 0.0.
    pub fn molecular_weight(&self) -> Result<f64> {
        self.require("molecular_weight", &[Alphabet::Protein])?;
        if self.is_empty() {
            return Ok(0.0);
        }
        let sum: f64 = self.as_bytes().iter().map(|&b| residue_mass(b)).sum();
        Ok(sum - (self.len() - 1) as f64 * WATER_MASS)
    }
}
