// Copyright 2025 Mihail Petrov
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Loading the Spanish-to-Bulgarian lexicon from CSV.
//!
//! The expected shape is a header row followed by two-column records:
//! the Spanish word, then its Bulgarian translations separated by `;`.
//! Any malformed row is a fatal load-time error; the quiz never starts
//! with a partially-invalid dataset.
//!
//! Words and per-row translations must be unique. The advance draw
//! terminates by checking history size against dataset size, which only
//! holds if no two entries are equal.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::entry::Entry;

/// The dataset shipped with the binary.
const DEFAULT_DATA: &str = include_str!("es_bg.csv");

pub fn load_path(path: &Path) -> Fallible<Vec<Entry>> {
    log::debug!("Loading lexicon from {path:?}...");
    let start = Instant::now();
    let reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let entries = read_entries(reader)?;
    let duration = start.elapsed().as_millis();
    log::debug!("Lexicon loaded in {duration}ms.");
    Ok(entries)
}

pub fn load_default() -> Fallible<Vec<Entry>> {
    let reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(DEFAULT_DATA.as_bytes());
    read_entries(reader)
}

fn read_entries<R: Read>(mut reader: csv::Reader<R>) -> Fallible<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut seen_words: HashSet<String> = HashSet::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            return Err(ErrorReport::new(format!(
                "the following line does not contain 2 columns: {record:?}"
            )));
        }
        let word = record[0].trim().to_string();
        let translations: Vec<String> = record[1]
            .split(';')
            .map(|t| t.trim().to_string())
            .collect();
        if word.is_empty() || translations.iter().any(|t| t.is_empty()) {
            return Err(ErrorReport::new(format!(
                "the following line has an empty word or translation: {record:?}"
            )));
        }
        if !seen_words.insert(word.clone()) {
            return Err(ErrorReport::new(format!("duplicate word: {word}")));
        }
        let mut seen_translations: HashSet<&str> = HashSet::new();
        for translation in &translations {
            if !seen_translations.insert(translation) {
                return Err(ErrorReport::new(format!(
                    "the following line has a duplicate translation: {record:?}"
                )));
            }
        }
        entries.push(Entry::es_bg(word, translations));
    }
    Ok(entries)
}
