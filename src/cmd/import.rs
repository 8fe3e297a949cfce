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

use std::fs::read_to_string;

use flashdeck_core::error::Fallible;
use flashdeck_core::import::import_deck;
use flashdeck_core::import::parse_deck_document;
use flashdeck_core::repo::DeckRepository;
use flashdeck_core::rng::TinyRng;
use flashdeck_core::types::timestamp::Timestamp;

use crate::db::SqliteStore;

/// Import a JSON deck document into the database.
pub fn import_file(file: &str, db_path: &str) -> Fallible<()> {
    let json = read_to_string(file)?;
    let document = parse_deck_document(&json)?;
    let store = SqliteStore::open(db_path)?;
    let mut repo = DeckRepository::load_from(&store)?;
    let mut rng = TinyRng::from_entropy();
    let deck = import_deck(document, Timestamp::now(), &mut rng);
    println!("Imported deck '{}' with {} cards.", deck.name, deck.card_count());
    repo.put(deck);
    repo.save_to(&store)
}
