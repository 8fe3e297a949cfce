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

//! flashdeck-core: Core library for the flashdeck practice system.
//!
//! This library provides the types and algorithms for:
//! - Scoring a card's rating history
//! - Building and recomputing review priority orders
//! - Cycling through the visible cards of a deck
//! - Importing deck documents and persisting deck collections

pub mod cursor;
pub mod error;
pub mod import;
pub mod order;
pub mod repo;
pub mod rng;
pub mod score;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use cursor::next_card;
pub use error::{ErrorReport, Fallible, fail};
pub use import::{DeckDocument, import_deck, parse_deck_document};
pub use order::{initialize_order, recompute_order};
pub use repo::DeckRepository;
pub use rng::TinyRng;
pub use score::score;
pub use store::{MemoryStore, Store};
pub use types::card::{Card, CardId};
pub use types::deck::Deck;
pub use types::progress::CardProgress;
pub use types::rating::Rating;
pub use types::timestamp::Timestamp;
