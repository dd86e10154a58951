// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Descriptive statistics over a sequence table and its term annotations.

use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

use crate::{
    seq::{alphabet, table::SeqTable},
    terms::TermTable,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidueCount {
    pub residue: char,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectCount {
    pub aspect: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSummary {
    pub count: usize,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

// Bins are half-open, [start, end), except the last one which also holds the maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Number of occurrences of every residue across all sequences, most frequent first (ties broken
/// by residue code).
pub fn residue_counts(table: &SeqTable) -> Vec<ResidueCount> {
    table
        .seqs()
        .flat_map(|s| s.chars())
        .counts()
        .into_iter()
        .map(|(residue, count)| ResidueCount { residue, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then(a.residue.cmp(&b.residue)))
        .collect()
}

pub fn non_standard_residues(counts: &[ResidueCount]) -> Vec<ResidueCount> {
    counts
        .iter()
        .filter(|rc| !alphabet::is_standard(rc.residue))
        .cloned()
        .collect()
}

impl LengthSummary {
    pub fn from_table(table: &SeqTable) -> LengthSummary {
        let lengths: Vec<usize> = table.seqs().map(|s| s.chars().count()).sorted().collect();
        let count = lengths.len();
        if count == 0 {
            return LengthSummary {
                count,
                min: None,
                max: None,
                mean: None,
                median: None,
            };
        }
        let total: usize = lengths.iter().sum();
        let median = if count % 2 == 1 {
            lengths[count / 2] as f64
        } else {
            (lengths[count / 2 - 1] + lengths[count / 2]) as f64 / 2.0
        };
        LengthSummary {
            count,
            min: lengths.first().copied(),
            max: lengths.last().copied(),
            mean: Some(total as f64 / count as f64),
            median: Some(median),
        }
    }
}

/// Equal-width histogram of sequence lengths over [min, max]. If all lengths are equal there is a
/// single bin.
pub fn length_histogram(table: &SeqTable, bins: usize) -> Vec<HistogramBin> {
    let lengths: Vec<usize> = table.seqs().map(|s| s.chars().count()).collect();
    let (min, max) = match lengths.iter().minmax().into_option() {
        Some((&lo, &hi)) => (lo, hi),
        None => return Vec::new(),
    };
    if bins == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![HistogramBin {
            start: min as f64,
            end: max as f64,
            count: lengths.len(),
        }];
    }

    let width = (max - min) as f64 / bins as f64;
    let mut counts = vec![0usize; bins];
    for len in lengths {
        let idx = (((len - min) as f64) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min as f64 + i as f64 * width,
            end: min as f64 + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Value counts of the aspect column, most frequent first (ties broken by code).
pub fn aspect_counts(terms: &TermTable) -> Vec<AspectCount> {
    terms
        .aspects()
        .into_iter()
        .counts()
        .into_iter()
        .map(|(aspect, count)| AspectCount {
            aspect: String::from(aspect),
            count,
        })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.aspect.cmp(&b.aspect)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub records: usize,
    pub annotations: usize,
    pub residues: Vec<ResidueCount>,
    pub non_standard_residues: Vec<ResidueCount>,
    pub lengths: LengthSummary,
    pub length_histogram: Vec<HistogramBin>,
    pub aspects: Vec<AspectCount>,
}

impl Summary {
    pub fn build(table: &SeqTable, terms: &TermTable, bins: usize) -> Summary {
        let residues = residue_counts(table);
        let non_standard = non_standard_residues(&residues);
        if !non_standard.is_empty() {
            let listed = non_standard
                .iter()
                .map(|rc| format!("{}: {}", rc.residue, rc.count))
                .join(", ");
            warn!("Non-standard residues found: {}", listed);
        }
        let summary = Summary {
            records: table.len(),
            annotations: terms.len(),
            residues,
            non_standard_residues: non_standard,
            lengths: LengthSummary::from_table(table),
            length_histogram: length_histogram(table, bins),
            aspects: aspect_counts(terms),
        };
        debug!("summary: {:?}", summary.lengths);
        summary
    }
}
