// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// One-letter amino-acid codes (see https://www.genome.jp/kegg/catalog/codes1.html). Only used to
// label residues in reports and plots; sequences are never checked against this table.

pub const STANDARD_RESIDUES: &str = "ACDEFGHIKLMNPQRSTVWY";

// X: unknown, U: selenocysteine, O: pyrrolysine, B: N or D, Z: Q or E.
pub const EXTENDED_RESIDUES: &str = "XUOBZ";

pub fn is_standard(residue: char) -> bool {
    STANDARD_RESIDUES.contains(residue)
}

pub fn residue_name(residue: char) -> Option<&'static str> {
    let name = match residue {
        'A' => "Alanine",
        'C' => "Cysteine",
        'D' => "Aspartic acid",
        'E' => "Glutamic acid",
        'F' => "Phenylalanine",
        'G' => "Glycine",
        'H' => "Histidine",
        'I' => "Isoleucine",
        'K' => "Lysine",
        'L' => "Leucine",
        'M' => "Methionine",
        'N' => "Asparagine",
        'P' => "Proline",
        'Q' => "Glutamine",
        'R' => "Arginine",
        'S' => "Serine",
        'T' => "Threonine",
        'V' => "Valine",
        'W' => "Tryptophan",
        'Y' => "Tyrosine",
        'X' => "Unknown",
        'U' => "Selenocysteine",
        'O' => "Pyrrolysine",
        'B' => "Asparagine or aspartic acid",
        'Z' => "Glutamine or glutamic acid",
        _ => return None,
    };
    Some(name)
}
