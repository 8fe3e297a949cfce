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

use serde::Deserialize;

use crate::error::Fallible;
use crate::order::initialize_order;
use crate::rng::TinyRng;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::deck::Deck;
use crate::types::timestamp::Timestamp;

/// An imported deck document: a name and a list of cards. This is the
/// boundary shape; it is normalized into a `Deck` by `import_deck`.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeckDocument {
    pub name: String,
    pub cards: Vec<CardEntry>,
}

/// A card in an imported document. `front`/`back` are accepted as aliases
/// for `question`/`answer`; all fields other than the texts are optional.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CardEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "front")]
    pub question: Option<String>,
    #[serde(default, alias = "back")]
    pub answer: Option<String>,
}

/// Parse a deck document from JSON. A structurally malformed document is
/// an error at this boundary; the core never sees it.
pub fn parse_deck_document(json: &str) -> Fallible<DeckDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Normalize a deck document into a deck: generate ids where absent,
/// default missing texts to the empty string, and initialize the priority
/// order with a random permutation of the cards.
pub fn import_deck(document: DeckDocument, imported_at: Timestamp, rng: &mut TinyRng) -> Deck {
    let millis = imported_at.as_millis();
    let mut deck = Deck::new(format!("deck-{millis}"), document.name);
    for (index, entry) in document.cards.into_iter().enumerate() {
        let id = entry
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("card-{millis}-{index}"));
        deck.insert_card(Card {
            id: CardId::new(id),
            question: entry.question.unwrap_or_default(),
            answer: entry.answer.unwrap_or_default(),
            hidden: false,
        });
    }
    let order = initialize_order(deck.cards(), rng);
    deck.card_order = order;
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_aliases() -> Fallible<()> {
        let document = parse_deck_document(
            r#"{
                "name": "Spanish",
                "cards": [
                    {"id": "c1", "question": "hola", "answer": "hello"},
                    {"front": "adios", "back": "goodbye"}
                ]
            }"#,
        )?;
        assert_eq!(document.name, "Spanish");
        assert_eq!(document.cards.len(), 2);
        assert_eq!(document.cards[1].question.as_deref(), Some("adios"));
        assert_eq!(document.cards[1].answer.as_deref(), Some("goodbye"));
        Ok(())
    }

    #[test]
    fn test_parse_rejects_malformed_documents() {
        assert!(parse_deck_document("not json").is_err());
        assert!(parse_deck_document(r#"{"cards": []}"#).is_err());
        assert!(parse_deck_document(r#"{"name": "x", "cards": 5}"#).is_err());
    }

    #[test]
    fn test_import_generates_missing_ids() -> Fallible<()> {
        let document = parse_deck_document(
            r#"{
                "name": "Mixed",
                "cards": [
                    {"id": "keep-me", "question": "q1", "answer": "a1"},
                    {"question": "q2", "answer": "a2"},
                    {"id": "", "question": "q3", "answer": "a3"}
                ]
            }"#,
        )?;
        let mut rng = TinyRng::from_seed(1);
        let deck = import_deck(document, Timestamp::from_millis(1000), &mut rng);
        assert_eq!(deck.id, "deck-1000");
        let ids: Vec<&str> = deck.cards().map(|card| card.id.as_str()).collect();
        assert_eq!(ids, vec!["keep-me", "card-1000-1", "card-1000-2"]);
        Ok(())
    }

    #[test]
    fn test_import_defaults_missing_texts() -> Fallible<()> {
        let document = parse_deck_document(r#"{"name": "Sparse", "cards": [{"id": "c1"}]}"#)?;
        let mut rng = TinyRng::from_seed(1);
        let deck = import_deck(document, Timestamp::from_millis(1), &mut rng);
        let card = deck.card(&CardId::new("c1")).unwrap();
        assert_eq!(card.question, "");
        assert_eq!(card.answer, "");
        assert!(!card.hidden);
        Ok(())
    }

    #[test]
    fn test_import_initializes_order() -> Fallible<()> {
        let cards: Vec<String> = (0..10)
            .map(|i| format!(r#"{{"id": "c{i}", "question": "q", "answer": "a"}}"#))
            .collect();
        let json = format!(r#"{{"name": "Big", "cards": [{}]}}"#, cards.join(","));
        let document = parse_deck_document(&json)?;
        let deck = import_deck(document, Timestamp::from_millis(1), &mut TinyRng::from_seed(3));
        assert_eq!(deck.card_order.len(), 10);
        let mut sorted = deck.card_order.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
        // Same seed, same permutation.
        let document = parse_deck_document(&json)?;
        let again = import_deck(document, Timestamp::from_millis(1), &mut TinyRng::from_seed(3));
        assert_eq!(deck.card_order, again.card_order);
        Ok(())
    }
}
