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

use crate::matcher::translation_eq;
use crate::types::entry::Entry;

/// A graded pairing of an entry with what the user actually typed.
#[derive(Clone, Debug)]
pub struct AnsweredRecord {
    entry: Entry,
    user_answer: String,
}

impl AnsweredRecord {
    pub fn new(entry: Entry, user_answer: impl Into<String>) -> Self {
        Self {
            entry,
            user_answer: user_answer.into(),
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn user_answer(&self) -> &str {
        &self.user_answer
    }

    /// Whether the typed answer matches any of the entry's translations.
    /// The known-correct translation is always the reference side.
    pub fn is_correct(&self) -> bool {
        self.entry
            .translations()
            .iter()
            .any(|t| translation_eq(t, &self.user_answer))
    }
}

/// Equality compares only the entry, ignoring the answer. The session tests
/// "has this prompt been shown?" by membership-checking a record with an
/// empty answer against the history.
impl PartialEq for AnsweredRecord {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl Eq for AnsweredRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_answer() {
        let entry = Entry::es_bg("la casa", vec!["къща".to_string()]);
        let a = AnsweredRecord::new(entry.clone(), "къща");
        let b = AnsweredRecord::new(entry.clone(), "дом");
        let c = AnsweredRecord::new(entry, "");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_inequality_on_entry() {
        let a = AnsweredRecord::new(Entry::es_bg("sol", vec!["слънце".to_string()]), "слънце");
        let b = AnsweredRecord::new(Entry::es_bg("luna", vec!["луна".to_string()]), "слънце");
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_correct() {
        let entry = Entry::es_bg("hombre", vec!["мъж".to_string(), "човек".to_string()]);
        assert!(AnsweredRecord::new(entry.clone(), "човек").is_correct());
        assert!(!AnsweredRecord::new(entry, "жена").is_correct());
    }
}
