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

use flashdeck_core::error::Fallible;
use flashdeck_core::repo::DeckRepository;

use crate::db::SqliteStore;

/// Print the decks in the database.
pub fn list_decks(db_path: &str) -> Fallible<()> {
    let store = SqliteStore::open(db_path)?;
    let repo = DeckRepository::load_from(&store)?;
    if repo.is_empty() {
        println!("No decks.");
        return Ok(());
    }
    for deck in repo.decks() {
        println!(
            "{}  {}  ({} of {} cards visible)",
            deck.id,
            deck.name,
            deck.visible_card_count(),
            deck.card_count()
        );
    }
    Ok(())
}
