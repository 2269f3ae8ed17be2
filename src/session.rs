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

use rand::seq::IndexedRandom;

use crate::types::answered::AnsweredRecord;
use crate::types::entry::Entry;

/// What the current prompt shows when no entry is active.
const NO_WORD: &str = "-";

/// The per-direction quiz state.
///
/// A session is in one of two states: ready for the next word (no current
/// entry, or the current one is graded) or awaiting a grade. Submitting
/// while ready advances to a fresh prompt; submitting while awaiting grades
/// the current one. The history is append-only (most recent first) and
/// never holds the same entry twice, so every prompt is shown at most once
/// until the dataset is exhausted.
pub struct Session {
    current: Option<Entry>,
    graded: bool,
    history: Vec<AnsweredRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current: None,
            graded: false,
            history: Vec::new(),
        }
    }

    pub fn ready_for_next(&self) -> bool {
        self.current.is_none() || self.graded
    }

    pub fn is_graded(&self) -> bool {
        self.graded
    }

    pub fn current_word(&self) -> &str {
        match &self.current {
            Some(entry) => entry.word(),
            None => NO_WORD,
        }
    }

    pub fn history(&self) -> &[AnsweredRecord] {
        &self.history
    }

    /// Whether the most recently graded answer was correct. `None` if
    /// nothing has been graded yet.
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.history.first().map(AnsweredRecord::is_correct)
    }

    /// The two-phase submit protocol. While ready for the next word, any
    /// submitted answer text is ignored and a fresh prompt is drawn from
    /// `dataset`. While awaiting a grade, a missing or empty answer is a
    /// no-op; otherwise the answer is recorded and the prompt is graded.
    pub fn submit(&mut self, dataset: &[Entry], answer: Option<&str>) {
        if self.ready_for_next() {
            self.current = self.next_entry(dataset);
            self.graded = false;
            log::info!("next word: {}", self.current_word());
            return;
        }

        let answer = match answer {
            Some(answer) if !answer.is_empty() => answer,
            _ => return,
        };
        if let Some(entry) = self.current.clone() {
            self.history.insert(0, AnsweredRecord::new(entry, answer));
            self.graded = true;
        }
    }

    /// Draws a uniformly random unseen entry, or `None` once every entry
    /// has been shown. Rejection sampling: the size check guarantees an
    /// unseen entry exists, so the loop terminates almost surely.
    fn next_entry(&self, dataset: &[Entry]) -> Option<Entry> {
        if self.history.len() == dataset.len() {
            return None;
        }
        let mut rng = rand::rng();
        loop {
            if let Some(entry) = dataset.choose(&mut rng) {
                if !self.is_answered(entry) {
                    return Some(entry.clone());
                }
            }
        }
    }

    fn is_answered(&self, entry: &Entry) -> bool {
        // Record equality ignores the answer, so an empty one works as a
        // membership probe.
        self.history
            .contains(&AnsweredRecord::new(entry.clone(), ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Entry> {
        vec![
            Entry::es_bg("el perro", vec!["куче".to_string()]),
            Entry::es_bg("la casa", vec!["къща".to_string()]),
            Entry::es_bg("sol", vec!["слънце".to_string()]),
        ]
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert!(session.ready_for_next());
        assert!(!session.is_graded());
        assert_eq!(session.current_word(), "-");
        assert!(session.history().is_empty());
        assert_eq!(session.last_answer_correct(), None);
    }

    #[test]
    fn test_single_entry_scenario() {
        let dataset = vec![Entry::es_bg("perro", vec!["dog".to_string()])];
        let mut session = Session::new();

        session.submit(&dataset, None);
        assert_eq!(session.current_word(), "perro");
        assert!(!session.is_graded());
        assert!(!session.ready_for_next());

        session.submit(&dataset, Some("dog"));
        assert!(session.is_graded());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].user_answer(), "dog");
        assert_eq!(session.last_answer_correct(), Some(true));

        // Exhausted: one entry, one history record.
        session.submit(&dataset, None);
        assert_eq!(session.current_word(), "-");
        assert!(session.ready_for_next());
    }

    #[test]
    fn test_incomplete_submit_is_noop() {
        let dataset = dataset();
        let mut session = Session::new();
        session.submit(&dataset, None);
        let word = session.current_word().to_string();

        session.submit(&dataset, None);
        session.submit(&dataset, Some(""));
        assert_eq!(session.current_word(), word);
        assert!(!session.is_graded());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_answer_text_ignored_while_ready() {
        let dataset = dataset();
        let mut session = Session::new();
        session.submit(&dataset, Some("куче"));
        assert!(!session.is_graded());
        assert!(session.history().is_empty());
        assert_ne!(session.current_word(), "-");
    }

    #[test]
    fn test_no_repeats_and_exhaustion() {
        let dataset = dataset();
        let mut session = Session::new();
        for _ in 0..dataset.len() {
            session.submit(&dataset, None);
            assert!(!session.ready_for_next());
            session.submit(&dataset, Some("x"));
            assert!(session.is_graded());
        }
        assert_eq!(session.history().len(), dataset.len());

        // Every entry was shown exactly once.
        for entry in &dataset {
            let probe = AnsweredRecord::new(entry.clone(), "");
            let count = session.history().iter().filter(|r| **r == probe).count();
            assert_eq!(count, 1);
        }

        // Exhaustion is permanent.
        session.submit(&dataset, None);
        assert_eq!(session.current_word(), "-");
        session.submit(&dataset, None);
        assert_eq!(session.current_word(), "-");
        assert_eq!(session.history().len(), dataset.len());
    }

    #[test]
    fn test_empty_dataset_never_draws() {
        let mut session = Session::new();
        session.submit(&[], None);
        assert_eq!(session.current_word(), "-");
        assert!(session.ready_for_next());
    }

    #[test]
    fn test_wrong_answer_is_recorded() {
        let dataset = vec![Entry::es_bg("rojo", vec!["червен".to_string()])];
        let mut session = Session::new();
        session.submit(&dataset, None);
        session.submit(&dataset, Some("зелен"));
        assert_eq!(session.last_answer_correct(), Some(false));
        assert_eq!(session.history().len(), 1);
    }
}
