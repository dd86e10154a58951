// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use log::{debug, info};

use crate::errors::EdaError;
use crate::seq::record::SequenceRecord;
use crate::seq::table::SeqTable;

/// Line-oriented FastA scanner. Yields one record at a time; a record is only complete once the
/// next header (or EOF) has been seen.
///
/// Blank lines before the first header are skipped, anything else there is a format error. After
/// an error the scanner is exhausted.
pub struct FastaReader<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    current: Option<SequenceRecord>,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> FastaReader<R> {
        FastaReader {
            lines: reader.lines(),
            line_number: 0,
            current: None,
            done: false,
        }
    }

    fn fail(&mut self, err: EdaError) -> Option<Result<SequenceRecord, EdaError>> {
        self.done = true;
        self.current = None;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SequenceRecord, EdaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                None => {
                    self.done = true;
                    return self.current.take().map(Ok);
                }
                Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    let msg = format!("line {}: {}", self.line_number + 1, e);
                    return self.fail(EdaError::InvalidFormat(msg));
                }
                Some(Err(e)) => return self.fail(EdaError::Io(e)),
                Some(Ok(l)) => l,
            };
            self.line_number += 1;

            if let Some(title) = line.strip_prefix('>') {
                let next = SequenceRecord::from_header(title);
                if let Some(finished) = self.current.replace(next) {
                    return Some(Ok(finished));
                }
            } else if let Some(record) = self.current.as_mut() {
                // Trailing whitespace, CRs and spaces are not part of the sequence; other
                // characters (tabs included) are kept as they are.
                record
                    .sequence
                    .extend(line.trim_end().chars().filter(|&c| c != ' ' && c != '\r'));
            } else if line.trim().is_empty() {
                continue;
            } else {
                let msg = format!(
                    "line {}: expected FastA record starting with '>', found {:?}",
                    self.line_number, line
                );
                return self.fail(EdaError::InvalidFormat(msg));
            }
        }
    }
}

/// Opens `path` and returns a fresh scanner over its records. Calling this again restarts from
/// the top of the file.
pub fn records<P: AsRef<Path>>(path: P) -> Result<FastaReader<BufReader<File>>, EdaError> {
    let file = File::open(path)?;
    Ok(FastaReader::new(BufReader::new(file)))
}

pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqTable, EdaError> {
    FastaReader::new(reader).collect()
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqTable, EdaError> {
    let path = path.as_ref();
    debug!("Reading FastA file {}", path.display());
    let table: SeqTable = records(path)?.collect::<Result<_, _>>()?;
    info!("Read {} records from {}", table.len(), path.display());
    Ok(table)
}
