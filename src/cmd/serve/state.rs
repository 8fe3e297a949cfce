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

use std::sync::Arc;
use std::sync::Mutex;

use flashdeck_core::repo::DeckRepository;
use flashdeck_core::types::card::CardId;

use crate::db::SqliteStore;

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<SqliteStore>,
    pub mutable: Arc<Mutex<MutableState>>,
}

/// All deck mutation goes through this one lock, so a deck only ever sees
/// exclusive, sequential access.
pub struct MutableState {
    pub repo: DeckRepository,
    pub review: Option<ReviewSession>,
}

impl MutableState {
    /// Flush the repository to the store. Failures are logged; the
    /// in-memory session carries on with its current state.
    pub fn persist(&self, store: &SqliteStore) {
        if let Err(e) = self.repo.save_to(store) {
            log::warn!("failed to persist decks: {e}");
        }
    }
}

/// Server-side state of the active review session.
pub struct ReviewSession {
    pub deck_id: String,
    pub current: Option<CardId>,
    pub reveal: bool,
    pub reviewed: usize,
}
