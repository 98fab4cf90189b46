//! Header for packed sequence files.
//!
//! The header records everything needed to interpret the payload without
//! touching it: the alphabet the sequence was validated against, the symbol
//! encoding, and the symbol count. It has a fixed 32-byte little-endian
//! layout so a reader can map the file and cast the remainder directly.

use byteorder::{ByteOrder, LittleEndian};
use std::io::Write;

use crate::alphabet::Alphabet;
use crate::error::{PackedError, Result};

/// Current magic number: "PSEQ" in ASCII (in little-endian byte order)
const MAGIC: u32 = 0x5145_5350;

/// Current format version of the packed sequence file format
const FORMAT: u8 = 1;

/// Size of the header in bytes
pub const SIZE_HEADER: usize = 32;

/// Symbol encoding used by the payload.
///
/// Alphabets with at most four symbols pack four symbols per byte; everything
/// else stores one byte per symbol. The choice is a storage detail only --
/// sequence operations behave identically under either encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// 2 bits per symbol, 32 symbols per u64 chunk (nucleotide alphabets)
    TwoBit,
    /// 1 byte per symbol (protein and generic content)
    Byte,
}

impl Encoding {
    /// The encoding used for sequences of `alphabet`
    pub fn for_alphabet(alphabet: Alphabet) -> Self {
        match alphabet.symbol_count() {
            1..=4 => Self::TwoBit,
            _ => Self::Byte,
        }
    }

    /// Payload size in bytes for a sequence of `slen` symbols
    pub fn payload_size(self, slen: u64) -> usize {
        match self {
            Self::TwoBit => 8 * (slen as usize).div_ceil(32),
            Self::Byte => slen as usize,
        }
    }

    const fn to_tag(self) -> u8 {
        match self {
            Self::TwoBit => 0,
            Self::Byte => 1,
        }
    }

    fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::TwoBit),
            1 => Ok(Self::Byte),
            _ => Err(PackedError::UnknownEncodingTag(tag).into()),
        }
    }
}

const fn alphabet_to_tag(alphabet: Alphabet) -> u8 {
    match alphabet {
        Alphabet::Dna => 0,
        Alphabet::Rna => 1,
        Alphabet::Protein => 2,
        Alphabet::Generic => 3,
    }
}

fn alphabet_from_tag(tag: u8) -> Result<Alphabet> {
    match tag {
        0 => Ok(Alphabet::Dna),
        1 => Ok(Alphabet::Rna),
        2 => Ok(Alphabet::Protein),
        3 => Ok(Alphabet::Generic),
        _ => Err(PackedError::UnknownAlphabetTag(tag).into()),
    }
}

/// Header structure for packed sequence files.
///
/// Fixed 32-byte layout (all integers little-endian):
///
/// | Offset | Size | Name     | Description                      |
/// | ------ | ---- | -------- | -------------------------------- |
/// | 0      | 4    | magic    | Magic number (0x51455350)        |
/// | 4      | 1    | format   | Format version (currently 1)     |
/// | 5      | 1    | alphabet | Alphabet tag                     |
/// | 6      | 1    | encoding | Encoding tag                     |
/// | 7      | 1    | padding  | Unused                           |
/// | 8      | 8    | slen     | Sequence length in symbols       |
/// | 16     | 16   | reserved | Reserved for future use          |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedHeader {
    /// Magic number to identify the file format
    pub magic: u32,
    /// Version of the file format
    pub format: u8,
    /// Alphabet the stored sequence was validated against
    pub alphabet: Alphabet,
    /// Symbol encoding of the payload
    pub encoding: Encoding,
    /// Number of symbols in the sequence
    pub slen: u64,
}

impl PackedHeader {
    /// Create a header for a sequence of `alphabet` with `slen` symbols,
    /// selecting the encoding from the alphabet size.
    pub fn new(alphabet: Alphabet, slen: u64) -> Self {
        Self {
            magic: MAGIC,
            format: FORMAT,
            alphabet,
            encoding: Encoding::for_alphabet(alphabet),
            slen,
        }
    }

    /// Parse a header from a fixed-size byte array, validating the magic
    /// number, format version, and tags.
    pub fn from_bytes(buffer: &[u8; SIZE_HEADER]) -> Result<Self> {
        let magic = LittleEndian::read_u32(&buffer[0..4]);
        if magic != MAGIC {
            return Err(PackedError::InvalidMagicNumber(magic).into());
        }
        let format = buffer[4];
        if format != FORMAT {
            return Err(PackedError::InvalidFormatVersion(format).into());
        }
        let alphabet = alphabet_from_tag(buffer[5])?;
        let encoding = Encoding::from_tag(buffer[6])?;
        let slen = LittleEndian::read_u64(&buffer[8..16]);
        Ok(Self {
            magic,
            format,
            alphabet,
            encoding,
            slen,
        })
    }

    /// Parse a header from the start of an arbitrary buffer.
    pub fn from_buffer(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < SIZE_HEADER {
            return Err(PackedError::Truncated(buffer.len()).into());
        }
        let mut bytes = [0u8; SIZE_HEADER];
        bytes.copy_from_slice(&buffer[..SIZE_HEADER]);
        Self::from_bytes(&bytes)
    }

    /// Serialize the header to its fixed byte layout.
    pub fn to_bytes(self) -> [u8; SIZE_HEADER] {
        let mut buffer = [0u8; SIZE_HEADER];
        LittleEndian::write_u32(&mut buffer[0..4], self.magic);
        buffer[4] = self.format;
        buffer[5] = alphabet_to_tag(self.alphabet);
        buffer[6] = self.encoding.to_tag();
        LittleEndian::write_u64(&mut buffer[8..16], self.slen);
        buffer
    }

    /// Write the header to a writer.
    pub fn write_bytes<W: Write>(self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }
}
