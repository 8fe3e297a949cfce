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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use flashdeck_core::store::Store;
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use tempfile::TempDir;
    use tempfile::tempdir;
    use tokio::spawn;

    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::db::SqliteStore;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    async fn spawn_server() -> (u16, String, TempDir) {
        let port = pick_unused_port().unwrap();
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("flashdeck.db").display().to_string();
        let config = ServerConfig {
            host: TEST_HOST.to_string(),
            port,
            db_path: db_path.clone(),
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await.unwrap();
        (port, db_path, dir)
    }

    #[tokio::test]
    async fn test_static_and_not_found() {
        let (port, _db_path, _dir) = spawn_server().await;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/style.css"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the not found endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the dashboard with no decks.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await.unwrap();
        assert!(html.contains("No decks yet"));

        // Review a deck that does not exist.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/deck/nope/review"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_import_rejects_malformed_json() {
        let (port, _db_path, _dir) = spawn_server().await;

        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/import"))
            .form(&[("document", "this is not json")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = response.text().await.unwrap();
        assert!(html.contains("Import failed"));
    }

    #[tokio::test]
    async fn test_walkthrough() {
        let (port, db_path, _dir) = spawn_server().await;
        let client = reqwest::Client::new();

        // Import a deck. The client follows the redirect, so the final URL
        // is the page of the freshly created deck.
        let document = r#"{
            "name": "State Capitals",
            "cards": [
                {"id": "c1", "question": "Capital of France?", "answer": "Paris"},
                {"id": "c2", "question": "Capital of Japan?", "answer": "Tokyo"}
            ]
        }"#;
        let response = client
            .post(format!("http://{TEST_HOST}:{port}/import"))
            .form(&[("document", document)])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let deck_path = response.url().path().to_string();
        assert!(deck_path.starts_with("/deck/"));
        let html = response.text().await.unwrap();
        assert!(html.contains("State Capitals"));
        assert!(html.contains("Capital of France?"));
        assert!(html.contains("2 of 2 cards visible"));

        // The deck was persisted on import.
        let store = SqliteStore::open(&db_path).unwrap();
        let decks = store.load().unwrap();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "State Capitals");

        // Start a review session.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}{deck_path}/review"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("Show Answer"));
        assert!(html.contains("Cards reviewed: 0"));

        // Reveal the answer.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/review"))
            .form(&[("action", "Reveal")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("How did you do?"));
        assert!(html.contains("VERY_GOOD"));

        // An unknown action is rejected.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/review"))
            .form(&[("action", "Bogus")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Rate the card.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/review"))
            .form(&[("action", "GOOD")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("Cards reviewed: 1"));
        assert!(html.contains("Show Answer"));

        // End the session. The client lands back on the deck page.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/review"))
            .form(&[("action", "End")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("Delete deck"));
        assert!(html.contains("1 ratings"));

        // Hide a card.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/hide"))
            .form(&[("card_id", "c1"), ("hidden", "true")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("1 of 2 cards visible"));
        assert!(html.contains("(hidden)"));

        // Edit the other card.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/card"))
            .form(&[
                ("card_id", "c2"),
                ("question", "Capital of Japan?"),
                ("answer", "Tokyo, formerly Edo"),
            ])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("Tokyo, formerly Edo"));

        // Editing a card that does not exist.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/card"))
            .form(&[("card_id", "c3"), ("question", "q"), ("answer", "a")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Delete the hidden card.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/delete-card"))
            .form(&[("card_id", "c1")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("1 of 1 cards visible"));
        assert!(!html.contains("Capital of France?"));

        // Delete the deck. The client lands back on the dashboard.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/delete"))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("No decks yet"));

        // The deletion was persisted too.
        let decks = store.load().unwrap();
        assert!(decks.is_empty());
    }

    #[tokio::test]
    async fn test_review_skips_hidden_cards() {
        let (port, _db_path, _dir) = spawn_server().await;
        let client = reqwest::Client::new();

        let document = r#"{
            "name": "Solo",
            "cards": [{"id": "only", "question": "Q", "answer": "A"}]
        }"#;
        let response = client
            .post(format!("http://{TEST_HOST}:{port}/import"))
            .form(&[("document", document)])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let deck_path = response.url().path().to_string();

        // Hide the only card, then review: nothing is due.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/hide"))
            .form(&[("card_id", "only"), ("hidden", "true")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}{deck_path}/review"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("No cards to review"));

        // Unhide it and the review picks it up again.
        let response = client
            .post(format!("http://{TEST_HOST}:{port}{deck_path}/hide"))
            .form(&[("card_id", "only"), ("hidden", "false")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}{deck_path}/review"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("Show Answer"));
    }
}
