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

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::order::recompute_order;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::progress::CardProgress;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// A deck of cards with their rating histories and a review priority order.
///
/// On the wire a deck is ordered sequences of cards and progress records;
/// internally both are keyed maps for O(1) lookup, with id lists preserving
/// the wire order.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "DeckWire", into = "DeckWire")]
pub struct Deck {
    pub id: String,
    pub name: String,
    cards: HashMap<CardId, Card>,
    card_seq: Vec<CardId>,
    progress: HashMap<CardId, CardProgress>,
    progress_seq: Vec<CardId>,
    /// Card ids in review priority order. May contain hidden or stale ids;
    /// readers filter them out rather than erroring.
    pub card_order: Vec<CardId>,
}

impl Deck {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cards: HashMap::new(),
            card_seq: Vec::new(),
            progress: HashMap::new(),
            progress_seq: Vec::new(),
            card_order: Vec::new(),
        }
    }

    /// Insert a card, replacing any card with the same id in place.
    pub fn insert_card(&mut self, card: Card) {
        if self.cards.insert(card.id.clone(), card.clone()).is_none() {
            self.card_seq.push(card.id);
        }
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// The cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.card_seq.iter().filter_map(|id| self.cards.get(id))
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn visible_card_count(&self) -> usize {
        self.cards().filter(|card| !card.hidden).count()
    }

    pub fn progress_for(&self, id: &CardId) -> Option<&CardProgress> {
        self.progress.get(id)
    }

    /// The progress records in first-rating order.
    pub fn progress_records(&self) -> impl Iterator<Item = &CardProgress> {
        self.progress_seq
            .iter()
            .filter_map(|id| self.progress.get(id))
    }

    /// Append a rating to the card's history, stamping the review time, and
    /// recompute the priority order in the same step. Returns false if the
    /// card does not exist.
    pub fn record_rating(
        &mut self,
        card_id: &CardId,
        rating: Rating,
        reviewed_at: Timestamp,
    ) -> bool {
        if !self.cards.contains_key(card_id) {
            return false;
        }
        if !self.progress.contains_key(card_id) {
            self.progress_seq.push(card_id.clone());
            self.progress
                .insert(card_id.clone(), CardProgress::new(card_id.clone()));
        }
        if let Some(progress) = self.progress.get_mut(card_id) {
            progress.record(rating, reviewed_at);
        }
        let order = recompute_order(self);
        self.card_order = order;
        true
    }

    /// Replace the question and answer of an existing card. Returns false
    /// if the card does not exist.
    pub fn update_card(
        &mut self,
        card_id: &CardId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> bool {
        match self.cards.get_mut(card_id) {
            Some(card) => {
                card.question = question.into();
                card.answer = answer.into();
                true
            }
            None => false,
        }
    }

    /// Flip a card's visibility. Does not touch `card_order`: hidden ids
    /// are filtered lazily at read time, and the next rating event
    /// recomputes the order anyway.
    pub fn set_hidden(&mut self, card_id: &CardId, hidden: bool) -> bool {
        match self.cards.get_mut(card_id) {
            Some(card) => {
                card.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Delete a card along with its progress record and its entry in
    /// `card_order`. Returns false if the card does not exist.
    pub fn delete_card(&mut self, card_id: &CardId) -> bool {
        if self.cards.remove(card_id).is_none() {
            return false;
        }
        self.card_seq.retain(|id| id != card_id);
        self.progress.remove(card_id);
        self.progress_seq.retain(|id| id != card_id);
        self.card_order.retain(|id| id != card_id);
        true
    }
}

/// The ordered-sequence wire shape of a deck.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeckWire {
    id: String,
    name: String,
    cards: Vec<Card>,
    progress: Vec<CardProgress>,
    card_order: Vec<CardId>,
}

impl From<DeckWire> for Deck {
    fn from(wire: DeckWire) -> Self {
        let mut deck = Deck::new(wire.id, wire.name);
        for card in wire.cards {
            deck.insert_card(card);
        }
        for progress in wire.progress {
            if !deck.progress.contains_key(&progress.card_id) {
                deck.progress_seq.push(progress.card_id.clone());
            }
            deck.progress.insert(progress.card_id.clone(), progress);
        }
        deck.card_order = wire.card_order;
        deck
    }
}

impl From<Deck> for DeckWire {
    fn from(deck: Deck) -> Self {
        let mut cards = deck.cards;
        let mut progress = deck.progress;
        DeckWire {
            id: deck.id,
            name: deck.name,
            cards: deck
                .card_seq
                .iter()
                .filter_map(|id| cards.remove(id))
                .collect(),
            progress: deck
                .progress_seq
                .iter()
                .filter_map(|id| progress.remove(id))
                .collect(),
            card_order: deck.card_order,
        }
    }
}
