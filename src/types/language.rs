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

use std::fmt;

use serde::Deserialize;

/// The two languages the drill knows about. A language tag only labels a
/// direction; no behavior is attached to it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    Spanish,
    Bulgarian,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Spanish => write!(f, "Español"),
            Language::Bulgarian => write!(f, "Búlgaro"),
        }
    }
}

/// A quiz direction: which language is the prompt and which is the answer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
pub enum Direction {
    EsBg,
    BgEs,
}

impl Direction {
    pub fn source(self) -> Language {
        match self {
            Direction::EsBg => Language::Spanish,
            Direction::BgEs => Language::Bulgarian,
        }
    }

    pub fn target(self) -> Language {
        match self {
            Direction::EsBg => Language::Bulgarian,
            Direction::BgEs => Language::Spanish,
        }
    }

    /// The value the mode selector posts back. Must round-trip through the
    /// `Deserialize` impl.
    pub fn form_value(self) -> &'static str {
        match self {
            Direction::EsBg => "EsBg",
            Direction::BgEs => "BgEs",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Direction::EsBg.to_string(), "Español -> Búlgaro");
        assert_eq!(Direction::BgEs.to_string(), "Búlgaro -> Español");
    }

    #[test]
    fn test_source_target() {
        assert_eq!(Direction::EsBg.source(), Language::Spanish);
        assert_eq!(Direction::EsBg.target(), Language::Bulgarian);
        assert_eq!(Direction::BgEs.source(), Language::Bulgarian);
        assert_eq!(Direction::BgEs.target(), Language::Spanish);
    }
}
