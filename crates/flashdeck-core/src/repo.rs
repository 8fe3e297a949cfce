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

use crate::error::Fallible;
use crate::store::Store;
use crate::types::deck::Deck;

/// The in-memory deck collection, keyed by deck id with insertion-order
/// iteration. Loaded from and flushed to a `Store` as a whole.
pub struct DeckRepository {
    decks: HashMap<String, Deck>,
    seq: Vec<String>,
}

impl DeckRepository {
    pub fn new() -> Self {
        Self {
            decks: HashMap::new(),
            seq: Vec::new(),
        }
    }

    pub fn load_from(store: &dyn Store) -> Fallible<Self> {
        let mut repo = Self::new();
        for deck in store.load()? {
            repo.put(deck);
        }
        Ok(repo)
    }

    pub fn save_to(&self, store: &dyn Store) -> Fallible<()> {
        let decks: Vec<Deck> = self.decks().cloned().collect();
        store.save(&decks)
    }

    pub fn get(&self, deck_id: &str) -> Option<&Deck> {
        self.decks.get(deck_id)
    }

    pub fn get_mut(&mut self, deck_id: &str) -> Option<&mut Deck> {
        self.decks.get_mut(deck_id)
    }

    /// Upsert by id.
    pub fn put(&mut self, deck: Deck) {
        if self.decks.insert(deck.id.clone(), deck.clone()).is_none() {
            self.seq.push(deck.id);
        }
    }

    pub fn remove(&mut self, deck_id: &str) -> bool {
        if self.decks.remove(deck_id).is_none() {
            return false;
        }
        self.seq.retain(|id| id != deck_id);
        true
    }

    /// The decks in insertion order.
    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.seq.iter().filter_map(|id| self.decks.get(id))
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

impl Default for DeckRepository {
    fn default() -> Self {
        Self::new()
    }
}
