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

use crate::types::language::Language;

/// A word with its known correct translations in a fixed direction.
///
/// Two entries are the same prompt iff all four fields are equal. The
/// lexicon loader guarantees `translations` is never empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entry {
    from: Language,
    to: Language,
    word: String,
    translations: Vec<String>,
}

impl Entry {
    pub fn new(
        from: Language,
        to: Language,
        word: impl Into<String>,
        translations: Vec<String>,
    ) -> Self {
        Self {
            from,
            to,
            word: word.into(),
            translations,
        }
    }

    /// A Spanish-to-Bulgarian entry, as found in the lexicon.
    pub fn es_bg(word: impl Into<String>, translations: Vec<String>) -> Self {
        Self::new(Language::Spanish, Language::Bulgarian, word, translations)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn translations(&self) -> &[String] {
        &self.translations
    }

    /// Derives the opposite-direction entries: one per translation, with the
    /// languages swapped and the original word as the sole translation.
    /// Translation order is preserved; entries that end up sharing a word
    /// are not merged.
    pub fn reverse(&self) -> Vec<Entry> {
        self.translations
            .iter()
            .map(|t| Entry::new(self.to, self.from, t.clone(), vec![self.word.clone()]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        let entry = Entry::es_bg("el perro", vec!["куче".to_string(), "пес".to_string()]);
        let reversed = entry.reverse();
        assert_eq!(reversed.len(), 2);
        assert_eq!(reversed[0].word(), "куче");
        assert_eq!(reversed[1].word(), "пес");
        for r in &reversed {
            assert_eq!(r.from, Language::Bulgarian);
            assert_eq!(r.to, Language::Spanish);
            assert_eq!(r.translations(), ["el perro".to_string()]);
        }
    }

    #[test]
    fn test_reverse_preserves_duplicates() {
        let a = Entry::es_bg("hombre", vec!["мъж".to_string()]);
        let b = Entry::es_bg("marido", vec!["мъж".to_string()]);
        let reversed: Vec<Entry> = [&a, &b].iter().flat_map(|e| e.reverse()).collect();
        assert_eq!(reversed.len(), 2);
        assert_eq!(reversed[0].word(), reversed[1].word());
        assert_ne!(reversed[0], reversed[1]);
    }

    #[test]
    fn test_equality_is_all_fields() {
        let a = Entry::es_bg("rojo", vec!["червен".to_string()]);
        let b = Entry::es_bg("rojo", vec!["червен".to_string()]);
        let c = Entry::es_bg("rojo", vec!["ален".to_string()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
