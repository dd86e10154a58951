// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A single FastA record. The id is the first word of the header, the description is the whole
// header (without the '>'), so the id is always a prefix of the description.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
    pub description: String,
}

impl SequenceRecord {
    pub fn from_header(title: &str) -> SequenceRecord {
        let description = title.trim_end();
        let id = description.split_whitespace().next().unwrap_or("");
        SequenceRecord {
            id: String::from(id),
            sequence: String::new(),
            description: String::from(description),
        }
    }
}
