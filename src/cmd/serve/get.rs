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

use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use flashdeck_core::cursor::next_card;
use flashdeck_core::score::score;
use flashdeck_core::types::card::Card;
use flashdeck_core::types::deck::Deck;
use flashdeck_core::types::rating::Rating;
use maud::Markup;
use maud::html;
use serde::Deserialize;

use crate::cmd::serve::state::MutableState;
use crate::cmd::serve::state::ReviewSession;
use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::template::page_template;

pub async fn dashboard_handler(State(state): State<ServerState>) -> Html<String> {
    let mutable = state.mutable.lock().unwrap();
    let body = html! {
        h1 { "Flashcard Decks" }
        @if mutable.repo.is_empty() {
            p class="empty-state" { "No decks yet. Import a JSON deck to get started!" }
        } @else {
            div class="deck-grid" {
                @for deck in mutable.repo.decks() {
                    div class="deck-card" {
                        h3 { a href={ "/deck/" (deck.id) } { (deck.name) } }
                        p { (deck.visible_card_count()) " cards" }
                    }
                }
            }
        }
        section class="import" {
            h2 { "Import Deck (JSON)" }
            form method="post" action="/import" {
                textarea name="document" rows="8"
                    placeholder="{\"name\": \"My deck\", \"cards\": [{\"question\": \"...\", \"answer\": \"...\"}]}" {}
                button type="submit" { "Import" }
            }
        }
    };
    Html(page_template(body).into_string())
}

pub async fn deck_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let mutable = state.mutable.lock().unwrap();
    let deck = mutable.repo.get(&deck_id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Html(page_template(render_deck(deck)).into_string()))
}

fn render_deck(deck: &Deck) -> Markup {
    html! {
        p { a href="/" { "\u{2190} All decks" } }
        h1 { (deck.name) }
        p class="deck-info" {
            (deck.visible_card_count()) " of " (deck.card_count()) " cards visible. "
            a href={ "/deck/" (deck.id) "/review" } { "Start review" }
        }
        div class="card-list" {
            @for card in deck.cards() {
                (render_card_item(deck, card))
            }
        }
        form method="post" action={ "/deck/" (deck.id) "/delete" } {
            button type="submit" class="danger" { "Delete deck" }
        }
    }
}

fn render_card_item(deck: &Deck, card: &Card) -> Markup {
    let history = deck.progress_for(&card.id);
    let rating_count = history.map(|progress| progress.ratings.len()).unwrap_or(0);
    let card_score = history.map(|progress| score(&progress.ratings)).unwrap_or(0.0);
    html! {
        div class=(if card.hidden { "card-item hidden-card" } else { "card-item" }) {
            p class="card-question" { (card.question) }
            p class="card-answer" { (card.answer) }
            p class="card-stats" {
                (rating_count) " ratings, score " (format!("{card_score:.2}"))
                @if let Some(last) = history.and_then(|progress| progress.last_reviewed) {
                    ", last reviewed " (last)
                }
                @if card.hidden { " (hidden)" }
            }
            div class="card-actions" {
                form method="get" action={ "/deck/" (deck.id) "/edit" } {
                    input type="hidden" name="card" value=(card.id);
                    button type="submit" { "Modify" }
                }
                form method="post" action={ "/deck/" (deck.id) "/hide" } {
                    input type="hidden" name="card_id" value=(card.id);
                    input type="hidden" name="hidden" value=(!card.hidden);
                    button type="submit" { @if card.hidden { "Unhide" } @else { "Hide" } }
                }
                form method="post" action={ "/deck/" (deck.id) "/delete-card" } {
                    input type="hidden" name="card_id" value=(card.id);
                    button type="submit" class="danger" { "Delete" }
                }
            }
        }
    }
}

#[derive(Deserialize)]
pub struct EditQuery {
    card: String,
}

pub async fn edit_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
    Query(query): Query<EditQuery>,
) -> Result<Html<String>, StatusCode> {
    let mutable = state.mutable.lock().unwrap();
    let deck = mutable.repo.get(&deck_id).ok_or(StatusCode::NOT_FOUND)?;
    let card = deck
        .card(&query.card.as_str().into())
        .ok_or(StatusCode::NOT_FOUND)?;
    let body = html! {
        p { a href={ "/deck/" (deck.id) } { "\u{2190} Back to deck" } }
        h1 { "Edit Card" }
        form method="post" action={ "/deck/" (deck.id) "/card" } class="editor" {
            input type="hidden" name="card_id" value=(card.id);
            label for="question" { "Question" }
            textarea id="question" name="question" rows="4" { (card.question) }
            label for="answer" { "Answer" }
            textarea id="answer" name="answer" rows="4" { (card.answer) }
            button type="submit" { "Save" }
        }
    };
    Ok(Html(page_template(body).into_string()))
}

pub async fn review_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let mut guard = state.mutable.lock().unwrap();
    let MutableState { repo, review } = &mut *guard;
    let deck = repo.get(&deck_id).ok_or(StatusCode::NOT_FOUND)?;
    match review {
        Some(session) if session.deck_id == deck_id => {
            // The current card may have been hidden or deleted since it was
            // shown; fall back through the cursor if so.
            let vanished = match &session.current {
                Some(current) => deck.card(current).map(|card| card.hidden).unwrap_or(true),
                None => true,
            };
            if vanished {
                session.current = next_card(deck, session.current.as_ref()).map(|card| card.id.clone());
                session.reveal = false;
            }
        }
        _ => {
            *review = Some(ReviewSession {
                deck_id: deck_id.clone(),
                current: next_card(deck, None).map(|card| card.id.clone()),
                reveal: false,
                reviewed: 0,
            });
        }
    }
    let session = review.as_ref().ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Html(page_template(render_review(deck, session)).into_string()))
}

fn render_review(deck: &Deck, session: &ReviewSession) -> Markup {
    let current = session
        .current
        .as_ref()
        .and_then(|id| deck.card(id))
        .filter(|card| !card.hidden);
    html! {
        div class="review-header" {
            a href={ "/deck/" (deck.id) } { "\u{2190} Exit review" }
            span class="review-progress" {
                "Cards reviewed: " (session.reviewed)
                " | Visible: " (deck.visible_card_count())
            }
        }
        @match current {
            None => {
                div class="empty-state" {
                    h2 { "No cards to review" }
                    p { "All cards are hidden or there are no cards in this deck." }
                }
            }
            Some(card) => {
                div class="review-card" {
                    h3 { "Question" }
                    p class="card-text" { (card.question) }
                    @if session.reveal {
                        h3 { "Answer" }
                        p class="card-text" { (card.answer) }
                    }
                }
                @if session.reveal {
                    p { "How did you do?" }
                    form method="post" action={ "/deck/" (deck.id) "/review" } class="rating-buttons" {
                        @for rating in Rating::all() {
                            button type="submit" name="action" value=(rating.as_str())
                                class={ "rating-button rating-" (rating.as_str()) } {
                                (rating.label())
                            }
                        }
                    }
                } @else {
                    form method="post" action={ "/deck/" (deck.id) "/review" } {
                        button type="submit" name="action" value="Reveal" { "Show Answer" }
                    }
                }
                form method="post" action={ "/deck/" (deck.id) "/review" } {
                    button type="submit" name="action" value="End" { "End session" }
                }
            }
        }
    }
}
