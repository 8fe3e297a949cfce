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

//! Persistence for deck collections. The whole state is replaced on every
//! save; store failures are expected to be non-fatal to the in-memory
//! session (callers log and carry on with what they have).

use std::sync::Mutex;

use crate::error::Fallible;
use crate::types::deck::Deck;

pub trait Store {
    /// Load every deck in the store.
    fn load(&self) -> Fallible<Vec<Deck>>;
    /// Replace the store's contents with the given decks.
    fn save(&self, decks: &[Deck]) -> Fallible<()>;
}

/// An in-memory store, for tests and ephemeral sessions.
pub struct MemoryStore {
    decks: Mutex<Vec<Deck>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            decks: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Fallible<Vec<Deck>> {
        Ok(self.decks.lock().unwrap().clone())
    }

    fn save(&self, decks: &[Deck]) -> Fallible<()> {
        *self.decks.lock().unwrap() = decks.to_vec();
        Ok(())
    }
}
