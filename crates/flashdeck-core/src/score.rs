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

use crate::types::rating::Rating;

/// Reduce a rating history to a single comparable score: the arithmetic
/// mean of the rating weights over the entire history. Lower scores mean
/// the card needs more practice. An empty history scores 0.0, so unrated
/// cards rank as average rather than worst or best.
pub fn score(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let total: i64 = ratings.iter().map(|rating| rating.weight()).sum();
    total as f64 / ratings.len() as f64
}
