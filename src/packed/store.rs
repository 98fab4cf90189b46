use std::fs::File;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use bytemuck::cast_slice;
use memmap2::Mmap;

use super::header::{Encoding, PackedHeader, SIZE_HEADER};
use crate::alphabet::Alphabet;
use crate::error::{PackedError, Result};

/// Symbol values of the 2-bit codes, in code order
const TWO_BIT_SYMBOLS: [u8; 4] = *b"ACGT";

/// Memory-mapped packed sequence content.
///
/// Cloning shares the underlying mapping; the file is unmapped when the last
/// clone drops. The mapping is read-only for its whole lifetime.
#[derive(Clone)]
pub struct MappedSeq {
    mmap: Arc<Mmap>,
    header: PackedHeader,
}

impl MappedSeq {
    /// Map a packed sequence file, validating the header and the exact
    /// payload size implied by it.
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Verify input is a regular file before attempting to map
        let file = File::open(path)?;
        if !file.metadata()?.is_file() {
            return Err(PackedError::IncompatibleFile.into());
        }

        // Safety: the mapping is read-only and the file is not modified
        // while mapped
        let mmap = unsafe { Mmap::map(&file)? };

        let header = PackedHeader::from_buffer(&mmap)?;
        let expected = SIZE_HEADER + header.encoding.payload_size(header.slen);
        if mmap.len() != expected {
            return Err(PackedError::Truncated(mmap.len()).into());
        }

        Ok(Self {
            mmap: Arc::new(mmap),
            header,
        })
    }

    /// Number of symbols in the sequence
    pub fn len(&self) -> usize {
        self.header.slen as usize
    }

    /// Whether the sequence holds no symbols
    pub fn is_empty(&self) -> bool {
        self.header.slen == 0
    }

    /// The alphabet recorded in the file header
    pub fn alphabet(&self) -> Alphabet {
        self.header.alphabet
    }

    fn payload(&self) -> &[u8] {
        &self.mmap[SIZE_HEADER..]
    }

    /// The payload viewed as u64 chunks (2-bit encoding only).
    ///
    /// The payload starts 32 bytes into a page-aligned mapping, so the cast
    /// is always aligned.
    fn chunks(&self) -> &[u64] {
        cast_slice(self.payload())
    }

    /// Borrowed byte view of the content, available only under the
    /// one-byte-per-symbol encoding.
    pub(crate) fn as_raw_slice(&self) -> Option<&[u8]> {
        match self.header.encoding {
            Encoding::Byte => Some(self.payload()),
            Encoding::TwoBit => None,
        }
    }

    /// Decode the symbol at `index`. Bounds are checked by the caller.
    ///
    /// Symbol `i` occupies bits `(i % 32) * 2` of chunk `i / 32`
    /// (little-endian, A=00 C=01 G=10 T=11).
    pub(crate) fn symbol_at(&self, index: usize) -> u8 {
        match self.header.encoding {
            Encoding::Byte => self.payload()[index],
            Encoding::TwoBit => {
                let chunk = self.chunks()[index / 32];
                let code = (chunk >> ((index % 32) * 2)) & 0b11;
                self.recode(TWO_BIT_SYMBOLS[code as usize])
            }
        }
    }

    /// Decode `range` into a fresh byte vector.
    pub(crate) fn decode_range(&self, range: Range<usize>) -> Vec<u8> {
        match self.header.encoding {
            Encoding::Byte => self.payload()[range].to_vec(),
            Encoding::TwoBit => {
                let chunks = self.chunks();
                let mut out = Vec::with_capacity(range.len());
                for index in range {
                    let chunk = chunks[index / 32];
                    let code = (chunk >> ((index % 32) * 2)) & 0b11;
                    out.push(self.recode(TWO_BIT_SYMBOLS[code as usize]));
                }
                out
            }
        }
    }

    /// RNA stores `U` as `T` in the packed representation; the alphabet tag
    /// restores it on decode.
    fn recode(&self, symbol: u8) -> u8 {
        if self.header.alphabet == Alphabet::Rna && symbol == b'T' {
            b'U'
        } else {
            symbol
        }
    }
}
