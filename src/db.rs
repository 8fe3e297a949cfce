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

use std::sync::Mutex;

use flashdeck_core::error::ErrorReport;
use flashdeck_core::error::Fallible;
use flashdeck_core::store::Store;
use flashdeck_core::types::deck::Deck;
use rusqlite::Connection;
use rusqlite::params;

/// SQLite-backed deck store. Decks are kept as JSON blobs in a single
/// key-value table; `save` replaces the whole table inside one
/// transaction, so an order recompute is never persisted without the
/// progress update that triggered it.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &str) -> Fallible<Self> {
        let conn = Connection::open(path).map_err(sqlite_error)?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Fallible<Self> {
        let conn = Connection::open_in_memory().map_err(sqlite_error)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Fallible<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS decks (id TEXT PRIMARY KEY, data TEXT NOT NULL)",
            [],
        )
        .map_err(sqlite_error)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn load_rows(&self) -> rusqlite::Result<Vec<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT data FROM decks ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect()
    }

    fn save_rows(&self, rows: &[(String, String)]) -> rusqlite::Result<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM decks", [])?;
        for (id, data) in rows {
            tx.execute(
                "INSERT INTO decks (id, data) VALUES (?1, ?2)",
                params![id, data],
            )?;
        }
        tx.commit()
    }
}

fn sqlite_error(e: rusqlite::Error) -> ErrorReport {
    ErrorReport::new(format!("SQLite error: {e}"))
}

impl Store for SqliteStore {
    fn load(&self) -> Fallible<Vec<Deck>> {
        let rows = self.load_rows().map_err(sqlite_error)?;
        let mut decks = Vec::with_capacity(rows.len());
        for data in rows {
            decks.push(serde_json::from_str(&data)?);
        }
        Ok(decks)
    }

    fn save(&self, decks: &[Deck]) -> Fallible<()> {
        let mut rows = Vec::with_capacity(decks.len());
        for deck in decks {
            rows.push((deck.id.clone(), serde_json::to_string(deck)?));
        }
        self.save_rows(&rows).map_err(sqlite_error)
    }
}
