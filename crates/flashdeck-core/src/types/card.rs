// Copyright 2026 The Flashdeck Authors
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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// A card identifier. Unique within a deck; on the wire it is a plain
/// string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A flashcard. Hidden cards stay in the deck but are excluded from review.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    /// Absent on the wire means visible.
    #[serde(default)]
    pub hidden: bool,
}

impl Card {
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            question: question.into(),
            answer: answer.into(),
            hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_hidden_defaults_to_false() -> Fallible<()> {
        let card: Card =
            serde_json::from_str(r#"{"id": "c1", "question": "q", "answer": "a"}"#)?;
        assert!(!card.hidden);
        Ok(())
    }

    #[test]
    fn test_wire_shape() -> Fallible<()> {
        let card = Card::new("c1", "q", "a");
        let serialized = serde_json::to_string(&card)?;
        assert_eq!(
            serialized,
            r#"{"id":"c1","question":"q","answer":"a","hidden":false}"#
        );
        Ok(())
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId::new("card-1").to_string(), "card-1");
    }
}
