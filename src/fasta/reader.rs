use std::fs;
use std::path::Path;

use super::FastaRecord;
use crate::error::{FastaError, Result};
use crate::sequence::Sequence;

/// Parse multi-record FASTA text.
///
/// Records are split on lines beginning with `>`; the header is the first
/// whitespace-delimited token (the identifier) and the trimmed remainder (the
/// description, absent if empty). Sequence lines are concatenated with
/// surrounding whitespace stripped, and each record's alphabet is inferred
/// independently. A header followed immediately by the next header yields a
/// valid zero-length record.
///
/// Fails when sequence data precedes the first header, or when the input
/// contains no header at all.
pub fn parse(text: &str) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut current: Option<(String, Option<String>, Vec<u8>)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if let Some(parts) = current.take() {
                records.push(build_record(parts));
            }
            let (id, description) = split_header(header);
            current = Some((id, description, Vec::new()));
        } else {
            match current.as_mut() {
                Some((_, _, body)) => body.extend_from_slice(line.as_bytes()),
                None => return Err(FastaError::DataBeforeHeader { line: index + 1 }.into()),
            }
        }
    }

    match current.take() {
        Some(parts) => records.push(build_record(parts)),
        None => return Err(FastaError::MissingHeader.into()),
    }
    Ok(records)
}

/// Read and parse a FASTA file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

fn split_header(header: &str) -> (String, Option<String>) {
    match header.split_once(char::is_whitespace) {
        Some((id, rest)) => {
            let rest = rest.trim();
            let description = if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            };
            (id.to_string(), description)
        }
        None => (header.to_string(), None),
    }
}

fn build_record((id, description, body): (String, Option<String>, Vec<u8>)) -> FastaRecord {
    let mut sequence = Sequence::detect(&body).with_id(&id);
    if let Some(description) = &description {
        sequence = sequence.with_description(description);
    }
    FastaRecord {
        id,
        description,
        sequence,
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::Alphabet;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_two_records() -> Result<()> {
        let text = ">seq1 First sequence\nACGTACGT\n>seq2 Second sequence\nGTACGTAC\n";
        let records = parse(text)?;
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description.as_deref(), Some("First sequence"));
        assert_eq!(records[0].sequence.to_bytes(), b"ACGTACGT");
        assert_eq!(records[0].sequence.id(), Some("seq1"));

        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].description.as_deref(), Some("Second sequence"));
        assert_eq!(records[1].sequence.to_bytes(), b"GTACGTAC");
        Ok(())
    }

    #[test]
    fn parse_concatenates_wrapped_lines() -> Result<()> {
        let text = ">seq1\nACGT\nACGT\nAC\n";
        let records = parse(text)?;
        assert_eq!(records[0].sequence.to_bytes(), b"ACGTACGTAC");
        Ok(())
    }

    #[test]
    fn parse_header_without_description() -> Result<()> {
        let records = parse(">seq1\nACGT\n")?;
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description, None);
        Ok(())
    }

    #[test]
    fn parse_trailing_whitespace_in_header() -> Result<()> {
        let records = parse(">seq1 \nACGT\n")?;
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description, None);
        Ok(())
    }

    #[test]
    fn parse_infers_alphabet_per_record() -> Result<()> {
        let text = ">dna\nACGT\n>rna\nACGU\n>prot\nMKLV\n>other\nhello!\n";
        let records = parse(text)?;
        assert_eq!(records[0].sequence.alphabet(), Alphabet::Dna);
        assert_eq!(records[1].sequence.alphabet(), Alphabet::Rna);
        assert_eq!(records[2].sequence.alphabet(), Alphabet::Protein);
        assert_eq!(records[3].sequence.alphabet(), Alphabet::Generic);
        Ok(())
    }

    #[test]
    fn parse_empty_body_record() -> Result<()> {
        let records = parse(">empty\n>seq2\nACGT\n")?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "empty");
        assert!(records[0].sequence.is_empty());
        Ok(())
    }

    #[test]
    fn parse_data_before_header_fails() {
        let err = parse("ACGT\n>seq1\nACGT\n").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Fasta(FastaError::DataBeforeHeader { line: 1 })
        ));
    }

    #[test]
    fn parse_no_header_fails() {
        assert!(matches!(
            parse("").unwrap_err(),
            crate::Error::Fasta(FastaError::MissingHeader)
        ));
        assert!(matches!(
            parse("\n \n").unwrap_err(),
            crate::Error::Fasta(FastaError::MissingHeader)
        ));
    }

    #[test]
    fn read_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, ">seq1 First sequence\nACGTACGT\n")?;
        file.flush()?;
        let records = read(file.path())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence.to_bytes(), b"ACGTACGT");
        Ok(())
    }

    #[test]
    fn read_nonexistent_file_fails() {
        let err = read("/nonexistent/input.fasta").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
