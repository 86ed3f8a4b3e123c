//! FACT-F fatigue subscale: 13 items answered 0 ("not at all") to 4 ("very much").

use crate::error::AssessmentError;
use serde::{Deserialize, Serialize};

pub const ITEMS: usize = 13;
const MAX_RESPONSE: u8 = 4;

/// Zero-based indices of the positively worded items ("I have energy",
/// "I am able to do my usual activities"), scored as answered.
const POSITIVE_ITEMS: [usize; 2] = [6, 7];

/// Totals below this indicate clinically relevant fatigue.
pub const FATIGUE_CUTOFF: u8 = 30;

/// FACT-F total, 0 to 52. Higher totals mean less fatigue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FactFScore(u8);

impl FactFScore {
    pub const MAX: u8 = 52;

    /// Scores a full questionnaire. Negatively worded items are reversed (`4 - r`).
    ///
    /// # Errors
    /// Returns [`AssessmentError::OutOfRange`] if any response exceeds 4.
    pub fn from_responses(responses: &[u8; ITEMS]) -> Result<Self, AssessmentError> {
        let total = responses.iter().enumerate().try_fold(0_u8, |total, (index, &response)| {
            if response > MAX_RESPONSE {
                return Err(AssessmentError::out_of_range(
                    "FACT-F response",
                    response.into(),
                    MAX_RESPONSE.into(),
                ));
            }
            let points =
                if POSITIVE_ITEMS.contains(&index) { response } else { MAX_RESPONSE - response };
            Ok(total + points)
        })?;

        Ok(Self(total))
    }

    /// Wraps a total computed elsewhere.
    ///
    /// # Errors
    /// Returns [`AssessmentError::OutOfRange`] for totals above 52.
    pub fn from_total(total: u8) -> Result<Self, AssessmentError> {
        if total > Self::MAX {
            return Err(AssessmentError::out_of_range("FACT-F", total.into(), Self::MAX.into()));
        }
        Ok(Self(total))
    }

    #[must_use]
    pub const fn total(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_fatigued(self) -> bool {
        self.0 < FATIGUE_CUTOFF
    }
}

impl TryFrom<u8> for FactFScore {
    type Error = AssessmentError;

    fn try_from(total: u8) -> Result<Self, Self::Error> {
        Self::from_total(total)
    }
}

impl From<FactFScore> for u8 {
    fn from(score: FactFScore) -> Self {
        score.0
    }
}
