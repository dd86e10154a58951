// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{self, Write};

use crate::{
    seq::{alphabet::residue_name, table::SeqTable},
    stats::Summary,
    terms::{Aspect, TermTable},
};

#[cfg(test)]
mod tests;

pub struct App {
    pub filename: String,
    pub table: SeqTable,
    pub summary: Summary,
}

impl App {
    pub fn new(filename: &str, table: SeqTable, terms: &TermTable, bins: usize) -> App {
        let summary = Summary::build(&table, terms, bins);
        App {
            filename: String::from(filename),
            table,
            summary,
        }
    }

    pub fn num_records(&self) -> usize {
        self.summary.records
    }

    pub fn num_annotations(&self) -> usize {
        self.summary.annotations
    }

    // Plain-text report, for when there is no terminal to plot into (or it's not wanted).
    pub fn output_info<W: Write>(&self, out: &mut W, head: usize) -> io::Result<()> {
        writeln!(out, "Sequences: {}", self.num_records())?;
        write!(out, "{}", self.table.head(head))?;
        writeln!(out)?;

        let lengths = &self.summary.lengths;
        match (lengths.min, lengths.max, lengths.mean, lengths.median) {
            (Some(min), Some(max), Some(mean), Some(median)) => writeln!(
                out,
                "Sequence length: min {}, max {}, mean {:.1}, median {:.1}",
                min, max, mean, median
            )?,
            _ => writeln!(out, "Sequence length: n/a")?,
        }
        writeln!(out)?;

        writeln!(out, "Amino-acid counts:")?;
        let count_width = self
            .summary
            .residues
            .iter()
            .map(|rc| rc.count.to_string().len())
            .max()
            .unwrap_or(0);
        for rc in &self.summary.residues {
            let line = format!(
                "  {}  {:>w$}  {}",
                rc.residue,
                rc.count,
                residue_name(rc.residue).unwrap_or(""),
                w = count_width
            );
            writeln!(out, "{}", line.trim_end())?;
        }
        if !self.summary.non_standard_residues.is_empty() {
            let odd: String = self
                .summary
                .non_standard_residues
                .iter()
                .map(|rc| rc.residue)
                .collect();
            writeln!(out, "Non-standard residues: {}", odd)?;
        }
        writeln!(out)?;

        writeln!(out, "Aspects ({} annotations):", self.num_annotations())?;
        let code_width = self
            .summary
            .aspects
            .iter()
            .map(|ac| ac.aspect.chars().count())
            .max()
            .unwrap_or(0);
        let count_width = self
            .summary
            .aspects
            .iter()
            .map(|ac| ac.count.to_string().len())
            .max()
            .unwrap_or(0);
        for ac in &self.summary.aspects {
            let line = format!(
                "  {:<cw$}  {:>nw$}  {}",
                ac.aspect,
                ac.count,
                Aspect::from_code(&ac.aspect).map_or("", |a| a.name()),
                cw = code_width,
                nw = count_width
            );
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }

    pub fn output_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.summary)?;
        writeln!(out)
    }
}
