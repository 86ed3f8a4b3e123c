//! IVCF-20 (Índice de Vulnerabilidade Clínico-Funcional): 20 questions, 0 to 40 points.

use crate::error::AssessmentError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Frailty stratum derived from an IVCF-20 total.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FrailtyRisk {
    /// 0 to 6 points.
    Robust,
    /// 7 to 14 points.
    AtRisk,
    /// 15 points or more.
    Frail,
}

impl FrailtyRisk {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Robust => "Robusto",
            Self::AtRisk => "Em risco de fragilização",
            Self::Frail => "Frágil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Ivcf20Score(u8);

impl Ivcf20Score {
    pub const MAX: u8 = 40;

    /// # Errors
    /// Returns [`AssessmentError::OutOfRange`] for totals above 40.
    pub fn new(total: u8) -> Result<Self, AssessmentError> {
        if total > Self::MAX {
            return Err(AssessmentError::out_of_range("IVCF-20", total.into(), Self::MAX.into()));
        }
        Ok(Self(total))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn classify(self) -> FrailtyRisk {
        match self.0 {
            0..=6 => FrailtyRisk::Robust,
            7..=14 => FrailtyRisk::AtRisk,
            _ => FrailtyRisk::Frail,
        }
    }
}

impl TryFrom<u8> for Ivcf20Score {
    type Error = AssessmentError;

    fn try_from(total: u8) -> Result<Self, Self::Error> {
        Self::new(total)
    }
}

impl From<Ivcf20Score> for u8 {
    fn from(score: Ivcf20Score) -> Self {
        score.0
    }
}
