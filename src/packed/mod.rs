//! # Packed sequence files
//!
//! An on-disk backing for sequences too large to materialize in memory. A
//! packed file is a fixed 32-byte header (see [`PackedHeader`]) followed by
//! the encoded payload:
//!
//! - **2-bit encoding** for alphabets with at most four symbols (DNA, RNA):
//!   32 symbols per little-endian u64 chunk, A=00 C=01 G=10 T=11, the final
//!   chunk zero-padded. RNA stores `U` as `T`; the alphabet tag in the
//!   header restores it on decode.
//! - **Byte encoding** for everything else (protein, generic): one byte per
//!   symbol, verbatim.
//!
//! [`open`] maps the file read-only and returns an ordinary [`Sequence`]
//! whose storage is the shared mapping. The encoding is transparent: every
//! sequence operation behaves identically regardless of the backing, and
//! single-symbol access and sub-range slicing decode only what they touch.
//! The mapping is released when the last clone of the sequence drops.
//!
//! ```no_run
//! use bioseq::{packed, Sequence};
//!
//! let seq = Sequence::dna("ACGTACGT").unwrap();
//! packed::write("large.pseq", &seq).unwrap();
//!
//! let mapped = packed::open("large.pseq").unwrap();
//! assert_eq!(mapped.to_bytes(), b"ACGTACGT");
//! ```

mod header;
mod store;

pub use header::{Encoding, PackedHeader, SIZE_HEADER};
pub use store::MappedSeq;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::sequence::Sequence;

/// Write `sequence` to `path` in the packed format, selecting the encoding
/// from the alphabet's symbol count.
pub fn write<P: AsRef<Path>>(path: P, sequence: &Sequence) -> Result<()> {
    let header = PackedHeader::new(sequence.alphabet(), sequence.len() as u64);
    let mut writer = BufWriter::new(File::create(path)?);
    header.write_bytes(&mut writer)?;

    match header.encoding {
        Encoding::TwoBit => {
            let bytes = sequence.to_bytes();
            // bitnuc packs ACGT only; RNA stores U as T
            let recoded: Vec<u8> = if sequence.alphabet() == Alphabet::Rna {
                bytes
                    .iter()
                    .map(|&b| if b == b'U' { b'T' } else { b })
                    .collect()
            } else {
                bytes
            };
            let mut chunks = Vec::new();
            bitnuc::twobit::encode(&recoded, &mut chunks)?;
            for chunk in &chunks {
                writer.write_u64::<LittleEndian>(*chunk)?;
            }
        }
        Encoding::Byte => writer.write_all(&sequence.as_bytes())?,
    }

    writer.flush()?;
    Ok(())
}

/// Open a packed sequence file as a memory-mapped [`Sequence`].
pub fn open<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    let store = MappedSeq::open(path)?;
    Ok(Sequence::from_mapped(store))
}
