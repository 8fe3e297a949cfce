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

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use flashdeck_core::error::Fallible;
use flashdeck_core::repo::DeckRepository;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cmd::serve::get::dashboard_handler;
use crate::cmd::serve::get::deck_handler;
use crate::cmd::serve::get::edit_handler;
use crate::cmd::serve::get::review_handler;
use crate::cmd::serve::post::delete_card_handler;
use crate::cmd::serve::post::delete_deck_handler;
use crate::cmd::serve::post::edit_card_handler;
use crate::cmd::serve::post::hide_card_handler;
use crate::cmd::serve::post::import_handler;
use crate::cmd::serve::post::review_post_handler;
use crate::cmd::serve::state::MutableState;
use crate::cmd::serve::state::ServerState;
use crate::db::SqliteStore;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let store = SqliteStore::open(&config.db_path)?;
    // A failed load is non-fatal: start with an empty collection rather
    // than refusing to serve.
    let repo = match DeckRepository::load_from(&store) {
        Ok(repo) => repo,
        Err(e) => {
            log::warn!("failed to load decks, starting empty: {e}");
            DeckRepository::new()
        }
    };
    let state = ServerState {
        store: Arc::new(store),
        mutable: Arc::new(Mutex::new(MutableState { repo, review: None })),
    };
    let app = Router::new();
    let app = app.route("/", get(dashboard_handler));
    let app = app.route("/import", post(import_handler));
    let app = app.route("/deck/{deck_id}", get(deck_handler));
    let app = app.route("/deck/{deck_id}/edit", get(edit_handler));
    let app = app.route("/deck/{deck_id}/card", post(edit_card_handler));
    let app = app.route("/deck/{deck_id}/hide", post(hide_card_handler));
    let app = app.route("/deck/{deck_id}/delete-card", post(delete_card_handler));
    let app = app.route("/deck/{deck_id}/delete", post(delete_deck_handler));
    let app = app.route("/deck/{deck_id}/review", get(review_handler));
    let app = app.route("/deck/{deck_id}/review", post(review_post_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn style_handler() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/css")],
        include_str!("style.css"),
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::debug!("Received Ctrl+C, shutting down gracefully");
}
