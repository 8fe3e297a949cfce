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

use serde::Deserialize;
use serde::Serialize;

use crate::types::card::CardId;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// The rating history of a single card. Created on the first rating; at
/// most one record exists per card; deleted only with its card.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProgress {
    pub card_id: CardId,
    /// Append-only, in review order.
    pub ratings: Vec<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<Timestamp>,
}

impl CardProgress {
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            ratings: Vec::new(),
            last_reviewed: None,
        }
    }

    pub fn record(&mut self, rating: Rating, reviewed_at: Timestamp) {
        self.ratings.push(rating);
        self.last_reviewed = Some(reviewed_at);
    }
}
