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

use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::deck::Deck;

/// Yield the next card to review.
///
/// The visible order is `deck.card_order` filtered to ids whose card exists
/// and is not hidden, in stored order. With no current card the first entry
/// is returned; otherwise the entry after the current one, wrapping around
/// at the end (the deck is a review ring). If the current card vanished
/// from the visible order since it was shown (deleted or hidden), the
/// cursor falls back to the first entry. Returns None only when nothing is
/// visible.
pub fn next_card<'a>(deck: &'a Deck, current_card_id: Option<&CardId>) -> Option<&'a Card> {
    let visible: Vec<&Card> = deck
        .card_order
        .iter()
        .filter_map(|id| deck.card(id))
        .filter(|card| !card.hidden)
        .collect();
    if visible.is_empty() {
        return None;
    }
    let index = current_card_id
        .and_then(|current| visible.iter().position(|card| &card.id == current))
        .map(|position| (position + 1) % visible.len())
        .unwrap_or(0);
    Some(visible[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_deck() -> Deck {
        let mut deck = Deck::new("d1", "Cursor Deck");
        deck.insert_card(Card::new("a", "qa", "aa"));
        deck.insert_card(Card::new("b", "qb", "ab"));
        deck.insert_card(Card::new("c", "qc", "ac"));
        deck.card_order = vec![CardId::new("a"), CardId::new("b"), CardId::new("c")];
        deck
    }

    #[test]
    fn test_empty_deck_has_no_card() {
        let deck = Deck::new("d1", "Empty");
        assert!(next_card(&deck, None).is_none());
    }

    #[test]
    fn test_all_hidden_has_no_card() {
        let mut deck = test_deck();
        for id in ["a", "b", "c"] {
            deck.set_hidden(&CardId::new(id), true);
        }
        assert!(next_card(&deck, None).is_none());
    }

    #[test]
    fn test_first_call_returns_first_entry() {
        let deck = test_deck();
        assert_eq!(next_card(&deck, None).unwrap().id.as_str(), "a");
    }

    #[test]
    fn test_wraps_around() {
        let deck = test_deck();
        assert_eq!(
            next_card(&deck, Some(&CardId::new("c"))).unwrap().id.as_str(),
            "a"
        );
    }

    /// Cycling len times from the start visits every visible card exactly
    /// once and returns to the start.
    #[test]
    fn test_full_cycle_visits_each_card_once() {
        let deck = test_deck();
        let mut visited = Vec::new();
        let mut current: Option<CardId> = None;
        for _ in 0..deck.card_order.len() {
            let card = next_card(&deck, current.as_ref()).unwrap();
            visited.push(card.id.clone());
            current = Some(card.id.clone());
        }
        assert_eq!(
            visited,
            vec![CardId::new("a"), CardId::new("b"), CardId::new("c")]
        );
        assert_eq!(
            next_card(&deck, current.as_ref()).unwrap().id,
            CardId::new("a")
        );
    }

    #[test]
    fn test_hidden_cards_are_skipped() {
        let mut deck = test_deck();
        deck.set_hidden(&CardId::new("b"), true);
        // Visible order is [a, c]: after a comes c, after c wraps to a.
        assert_eq!(
            next_card(&deck, Some(&CardId::new("a"))).unwrap().id.as_str(),
            "c"
        );
        assert_eq!(
            next_card(&deck, Some(&CardId::new("c"))).unwrap().id.as_str(),
            "a"
        );
    }

    #[test]
    fn test_stale_order_entries_are_skipped() {
        let mut deck = test_deck();
        deck.card_order.insert(0, CardId::new("ghost"));
        assert_eq!(next_card(&deck, None).unwrap().id.as_str(), "a");
    }

    /// The current card was deleted since it was shown: fall back to the
    /// first visible entry rather than returning nothing.
    #[test]
    fn test_vanished_current_card_falls_back_to_start() {
        let mut deck = test_deck();
        deck.delete_card(&CardId::new("b"));
        assert_eq!(
            next_card(&deck, Some(&CardId::new("b"))).unwrap().id.as_str(),
            "a"
        );
    }

    #[test]
    fn test_hidden_current_card_falls_back_to_start() {
        let mut deck = test_deck();
        deck.set_hidden(&CardId::new("b"), true);
        assert_eq!(
            next_card(&deck, Some(&CardId::new("b"))).unwrap().id.as_str(),
            "a"
        );
    }

    #[test]
    fn test_single_card_cycles_to_itself() {
        let mut deck = Deck::new("d1", "One");
        deck.insert_card(Card::new("only", "q", "a"));
        deck.card_order = vec![CardId::new("only")];
        assert_eq!(
            next_card(&deck, Some(&CardId::new("only"))).unwrap().id.as_str(),
            "only"
        );
    }
}
