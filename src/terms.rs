// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// GO term annotations: a tab-separated file with a header row. Only the "aspect" column is
// required; the rest (typically EntryID and term) is carried along untouched.

use std::{fmt, fs::File, io::Read, path::Path};

use log::info;

use crate::errors::EdaError;

pub const ASPECT_COLUMN: &str = "aspect";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    BiologicalProcess,
    CellularComponent,
    MolecularFunction,
}

impl Aspect {
    pub fn from_code(code: &str) -> Option<Aspect> {
        match code {
            "BPO" => Some(Aspect::BiologicalProcess),
            "CCO" => Some(Aspect::CellularComponent),
            "MFO" => Some(Aspect::MolecularFunction),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Aspect::BiologicalProcess => "BPO",
            Aspect::CellularComponent => "CCO",
            Aspect::MolecularFunction => "MFO",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Aspect::BiologicalProcess => "Biological Process",
            Aspect::CellularComponent => "Cellular Component",
            Aspect::MolecularFunction => "Molecular Function",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone)]
pub struct TermTable {
    columns: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl TermTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        // Rows all have the header's length (csv rejects ragged rows).
        Some(self.rows.iter().map(|r| r.get(idx).unwrap_or("")).collect())
    }

    // read_terms() rejects files without an aspect column.
    pub fn aspects(&self) -> Vec<&str> {
        self.column(ASPECT_COLUMN).unwrap_or_default()
    }
}

pub fn read_terms<R: Read>(reader: R) -> Result<TermTable, EdaError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    if !columns.iter().any(|c| c == ASPECT_COLUMN) {
        return Err(EdaError::InvalidFormat(format!(
            "no '{}' column (found: {})",
            ASPECT_COLUMN,
            columns.join(", ")
        )));
    }

    let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
    Ok(TermTable { columns, rows })
}

pub fn read_terms_file<P: AsRef<Path>>(path: P) -> Result<TermTable, EdaError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = read_terms(file)?;
    info!("Read {} term annotations from {}", table.len(), path.display());
    Ok(table)
}
