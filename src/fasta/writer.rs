use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::FastaRecord;
use crate::error::Result;

/// Sequence bodies are wrapped at this many characters per line on output
const LINE_WIDTH: usize = 60;

/// Serialize records to FASTA text, wrapping sequence lines at 60 characters.
pub fn serialize(records: &[FastaRecord]) -> String {
    let mut out = String::new();
    for record in records {
        push_header(&mut out, record);
        for chunk in record.sequence.as_bytes().chunks(LINE_WIDTH) {
            out.push_str(&String::from_utf8_lossy(chunk));
            out.push('\n');
        }
    }
    out
}

/// Write records to a FASTA file.
pub fn write<P: AsRef<Path>>(records: &[FastaRecord], path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        let mut header = String::new();
        push_header(&mut header, record);
        writer.write_all(header.as_bytes())?;
        for chunk in record.sequence.as_bytes().chunks(LINE_WIDTH) {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn push_header(out: &mut String, record: &FastaRecord) {
    out.push('>');
    out.push_str(&record.id);
    if let Some(description) = &record.description {
        out.push(' ');
        out.push_str(description);
    }
    out.push('\n');
}
