// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// The sequence table: one row per FastA record, in file order, with columns "id", "seq" and
// "desc". Read-only once built.

use std::{fmt, iter::FromIterator, ops::Index, slice};

use crate::seq::record::SequenceRecord;

// Sequences longer than this are abbreviated in table previews.
const SEQ_PREVIEW_LEN: usize = 20;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeqTable {
    rows: Vec<SequenceRecord>,
}

impl SeqTable {
    pub const COLUMNS: [&'static str; 3] = ["id", "seq", "desc"];

    pub fn new() -> SeqTable {
        SeqTable { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, SequenceRecord> {
        self.rows.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.id.as_str())
    }

    pub fn seqs(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.sequence.as_str())
    }

    pub fn descs(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.description.as_str())
    }

    /// Column by name; None if `name` is not one of COLUMNS. Defined even when there are no rows.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        match name {
            "id" => Some(self.ids().collect()),
            "seq" => Some(self.seqs().collect()),
            "desc" => Some(self.descs().collect()),
            _ => None,
        }
    }

    pub fn head(&self, n: usize) -> TableHead<'_> {
        TableHead {
            rows: &self.rows[..n.min(self.rows.len())],
        }
    }
}

impl Index<usize> for SeqTable {
    type Output = SequenceRecord;

    fn index(&self, i: usize) -> &SequenceRecord {
        &self.rows[i]
    }
}

impl FromIterator<SequenceRecord> for SeqTable {
    fn from_iter<I: IntoIterator<Item = SequenceRecord>>(iter: I) -> SeqTable {
        SeqTable {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SeqTable {
    type Item = &'a SequenceRecord;
    type IntoIter = slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn preview(seq: &str) -> String {
    if seq.chars().count() <= SEQ_PREVIEW_LEN {
        String::from(seq)
    } else {
        let keep = SEQ_PREVIEW_LEN - ELLIPSIS.len();
        let mut s: String = seq.chars().take(keep).collect();
        s.push_str(ELLIPSIS);
        s
    }
}

// The first few rows of a table, printable as aligned columns.
pub struct TableHead<'a> {
    rows: &'a [SequenceRecord],
}

impl fmt::Display for TableHead<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seqs: Vec<String> = self.rows.iter().map(|r| preview(&r.sequence)).collect();
        let id_width = self
            .rows
            .iter()
            .map(|r| r.id.chars().count())
            .chain(std::iter::once(SeqTable::COLUMNS[0].len()))
            .max()
            .unwrap_or(0);
        let seq_width = seqs
            .iter()
            .map(|s| s.chars().count())
            .chain(std::iter::once(SeqTable::COLUMNS[1].len()))
            .max()
            .unwrap_or(0);

        let header = format!(
            "{:<iw$}  {:<sw$}  {}",
            SeqTable::COLUMNS[0],
            SeqTable::COLUMNS[1],
            SeqTable::COLUMNS[2],
            iw = id_width,
            sw = seq_width
        );
        writeln!(f, "{}", header.trim_end())?;
        for (rec, seq) in self.rows.iter().zip(seqs.iter()) {
            let line = format!(
                "{:<iw$}  {:<sw$}  {}",
                rec.id,
                seq,
                rec.description,
                iw = id_width,
                sw = seq_width
            );
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
