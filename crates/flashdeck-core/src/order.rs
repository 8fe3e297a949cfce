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

use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::score::score;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::deck::Deck;

/// Build the initial priority order for a fresh deck: the ids of the
/// non-hidden cards in a uniform-random permutation.
pub fn initialize_order<'a, I>(cards: I, rng: &mut TinyRng) -> Vec<CardId>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut ids: Vec<CardId> = cards
        .into_iter()
        .filter(|card| !card.hidden)
        .map(|card| card.id.clone())
        .collect();
    shuffle(&mut ids, rng);
    ids
}

/// Recompute the priority order after a rating: the ids of the non-hidden
/// cards sorted ascending by score, worst performers first. Cards without
/// a progress record score 0.0. The sort is stable, so cards with equal
/// scores keep their relative enumeration order and repeated recomputes
/// over unchanged data do not churn.
pub fn recompute_order(deck: &Deck) -> Vec<CardId> {
    let mut scored: Vec<(CardId, f64)> = deck
        .cards()
        .filter(|card| !card.hidden)
        .map(|card| {
            let score = match deck.progress_for(&card.id) {
                Some(progress) => score(&progress.ratings),
                None => 0.0,
            };
            (card.id.clone(), score)
        })
        .collect();
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.into_iter().map(|(id, _)| id).collect()
}
