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

//! Locale-aware string equality for grading Spanish answers.
//!
//! A user's answer is accepted if it matches a reference translation
//! exactly, or differs only by a leading definite article, or differs only
//! by accent marks the table below forgives. The check is directional: the
//! table is consulted with the reference-side character only, so
//! `translation_eq(a, b)` and `translation_eq(b, a)` can disagree. Callers
//! must pass the known-correct translation as `reference`.

/// The definite articles a reference translation may carry and an answer
/// may omit.
const ARTICLES: [&str; 2] = ["el ", "la "];

/// The accented forms accepted for a reference-side character. Only the
/// reference being "plainer" than the answer is forgiven, except for `ñ`,
/// where the plain `n` is accepted in the answer.
fn accent_variants(reference: char) -> &'static [char] {
    match reference {
        'ñ' => &['n'],
        'Ñ' => &['N'],
        'a' => &['á'],
        'A' => &['Á'],
        'e' => &['é'],
        'E' => &['É'],
        'i' => &['í'],
        'I' => &['Í'],
        'o' => &['ó'],
        'O' => &['Ó'],
        'u' => &['ú', 'ü'],
        'U' => &['Ú', 'Ü'],
        _ => &[],
    }
}

fn char_eq(reference: char, candidate: char) -> bool {
    reference == candidate || accent_variants(reference).contains(&candidate)
}

/// Whether `candidate` should be accepted as equivalent to the
/// known-correct `reference` translation.
pub fn translation_eq(reference: &str, candidate: &str) -> bool {
    if reference == candidate {
        return true;
    }

    // If the reference carries an article and the candidate carries none,
    // grade as if the candidate had typed it.
    let mut candidate = candidate.to_string();
    for article in ARTICLES {
        if reference.starts_with(article) {
            if !ARTICLES.iter().any(|a| candidate.starts_with(a)) {
                candidate.insert_str(0, article);
            }
            break;
        }
    }

    if reference == candidate {
        return true;
    }

    // No fuzzy alignment across unequal lengths.
    if reference.chars().count() != candidate.chars().count() {
        return false;
    }

    reference
        .chars()
        .zip(candidate.chars())
        .all(|(r, c)| char_eq(r, c))
}
