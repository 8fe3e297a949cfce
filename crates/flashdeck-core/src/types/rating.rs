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

use crate::error::ErrorReport;
use crate::error::fail;

/// A review rating on a five-point scale. Immutable once recorded.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    VeryBad,
    Bad,
    Neutral,
    Good,
    VeryGood,
}

impl Rating {
    /// The rating's contribution to a card's score. Lower is worse.
    pub fn weight(self) -> i64 {
        match self {
            Rating::VeryBad => -2,
            Rating::Bad => -1,
            Rating::Neutral => 0,
            Rating::Good => 1,
            Rating::VeryGood => 2,
        }
    }

    /// The wire tag of the rating.
    pub fn as_str(&self) -> &str {
        match self {
            Rating::VeryBad => "VERY_BAD",
            Rating::Bad => "BAD",
            Rating::Neutral => "NEUTRAL",
            Rating::Good => "GOOD",
            Rating::VeryGood => "VERY_GOOD",
        }
    }

    /// The label shown on the review buttons.
    pub fn label(&self) -> &str {
        match self {
            Rating::VeryBad => "Very Bad",
            Rating::Bad => "Bad",
            Rating::Neutral => "Neutral",
            Rating::Good => "Good",
            Rating::VeryGood => "Very Good",
        }
    }

    /// All ratings, worst to best.
    pub fn all() -> [Rating; 5] {
        [
            Rating::VeryBad,
            Rating::Bad,
            Rating::Neutral,
            Rating::Good,
            Rating::VeryGood,
        ]
    }
}

impl TryFrom<String> for Rating {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "VERY_BAD" => Ok(Rating::VeryBad),
            "BAD" => Ok(Rating::Bad),
            "NEUTRAL" => Ok(Rating::Neutral),
            "GOOD" => Ok(Rating::Good),
            "VERY_GOOD" => Ok(Rating::VeryGood),
            _ => fail(format!("invalid rating string: {value}")),
        }
    }
}
