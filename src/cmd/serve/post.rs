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

use axum::Form;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::Redirect;
use flashdeck_core::cursor::next_card;
use flashdeck_core::import::import_deck;
use flashdeck_core::import::parse_deck_document;
use flashdeck_core::rng::TinyRng;
use flashdeck_core::types::card::CardId;
use flashdeck_core::types::rating::Rating;
use flashdeck_core::types::timestamp::Timestamp;
use maud::html;
use serde::Deserialize;

use crate::cmd::serve::state::MutableState;
use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::template::page_template;

#[derive(Deserialize)]
pub struct ImportForm {
    document: String,
}

pub async fn import_handler(
    State(state): State<ServerState>,
    Form(form): Form<ImportForm>,
) -> Result<Redirect, (StatusCode, Html<String>)> {
    let document = match parse_deck_document(&form.document) {
        Ok(document) => document,
        Err(e) => {
            let body = html! {
                h1 { "Import failed" }
                p { (e) }
                p { a href="/" { "\u{2190} Back" } }
            };
            return Err((
                StatusCode::BAD_REQUEST,
                Html(page_template(body).into_string()),
            ));
        }
    };
    let mut rng = TinyRng::from_entropy();
    let deck = import_deck(document, Timestamp::now(), &mut rng);
    log::info!("imported deck '{}' with {} cards", deck.name, deck.card_count());
    let deck_id = deck.id.clone();
    let mut mutable = state.mutable.lock().unwrap();
    mutable.repo.put(deck);
    mutable.persist(&state.store);
    Ok(Redirect::to(&format!("/deck/{deck_id}")))
}

#[derive(Deserialize)]
pub struct EditCardForm {
    card_id: String,
    question: String,
    answer: String,
}

pub async fn edit_card_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
    Form(form): Form<EditCardForm>,
) -> Result<Redirect, StatusCode> {
    let mut mutable = state.mutable.lock().unwrap();
    let deck = mutable.repo.get_mut(&deck_id).ok_or(StatusCode::NOT_FOUND)?;
    let card_id = CardId::new(form.card_id);
    if !deck.update_card(&card_id, form.question, form.answer) {
        return Err(StatusCode::NOT_FOUND);
    }
    mutable.persist(&state.store);
    Ok(Redirect::to(&format!("/deck/{deck_id}")))
}

#[derive(Deserialize)]
pub struct HideCardForm {
    card_id: String,
    hidden: bool,
}

pub async fn hide_card_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
    Form(form): Form<HideCardForm>,
) -> Result<Redirect, StatusCode> {
    let mut mutable = state.mutable.lock().unwrap();
    let deck = mutable.repo.get_mut(&deck_id).ok_or(StatusCode::NOT_FOUND)?;
    let card_id = CardId::new(form.card_id);
    if !deck.set_hidden(&card_id, form.hidden) {
        return Err(StatusCode::NOT_FOUND);
    }
    mutable.persist(&state.store);
    Ok(Redirect::to(&format!("/deck/{deck_id}")))
}

#[derive(Deserialize)]
pub struct DeleteCardForm {
    card_id: String,
}

pub async fn delete_card_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
    Form(form): Form<DeleteCardForm>,
) -> Result<Redirect, StatusCode> {
    let mut mutable = state.mutable.lock().unwrap();
    let deck = mutable.repo.get_mut(&deck_id).ok_or(StatusCode::NOT_FOUND)?;
    let card_id = CardId::new(form.card_id);
    if !deck.delete_card(&card_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    mutable.persist(&state.store);
    Ok(Redirect::to(&format!("/deck/{deck_id}")))
}

pub async fn delete_deck_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
) -> Result<Redirect, StatusCode> {
    let mut guard = state.mutable.lock().unwrap();
    let mutable = &mut *guard;
    if !mutable.repo.remove(&deck_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    if mutable
        .review
        .as_ref()
        .map(|session| session.deck_id == deck_id)
        .unwrap_or(false)
    {
        mutable.review = None;
    }
    mutable.persist(&state.store);
    Ok(Redirect::to("/"))
}

#[derive(Deserialize)]
pub struct ReviewForm {
    action: String,
}

pub async fn review_post_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Redirect, StatusCode> {
    let mut guard = state.mutable.lock().unwrap();
    let MutableState { repo, review } = &mut *guard;
    let deck = repo.get_mut(&deck_id).ok_or(StatusCode::NOT_FOUND)?;
    if form.action == "End" {
        *review = None;
        return Ok(Redirect::to(&format!("/deck/{deck_id}")));
    }
    let Some(session) = review.as_mut().filter(|session| session.deck_id == deck_id) else {
        // No active session for this deck; the GET will start one.
        return Ok(Redirect::to(&format!("/deck/{deck_id}/review")));
    };
    let mut rated = false;
    if form.action == "Reveal" {
        session.reveal = true;
    } else {
        let rating =
            Rating::try_from(form.action.clone()).map_err(|_| StatusCode::BAD_REQUEST)?;
        if let Some(current) = session.current.clone() {
            // Appending the rating recomputes the priority order in the
            // same step, and both land in the same save below.
            rated = deck.record_rating(&current, rating, Timestamp::now());
            session.current = next_card(deck, Some(&current)).map(|card| card.id.clone());
            session.reveal = false;
            session.reviewed += 1;
        }
    }
    if rated {
        guard.persist(&state.store);
    }
    Ok(Redirect::to(&format!("/deck/{deck_id}/review")))
}
