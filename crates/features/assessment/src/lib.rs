//! # Assessment
//!
//! Scoring rules for the screening instruments tracked on the clinical dashboard
//! and the cohort aggregation behind its cards and charts:
//!
//! * [`Ivcf20Score`]: clinical-functional vulnerability, stratified into [`FrailtyRisk`].
//! * [`FactFScore`]: fatigue subscale with reverse-scored items.
//! * [`WeeklyActivity`]: WHO weekly activity target and sedentary time.
//!
//! ```
//! use chub_assessment::{FrailtyRisk, Ivcf20Score};
//!
//! let score = Ivcf20Score::new(9)?;
//! assert_eq!(score.classify(), FrailtyRisk::AtRisk);
//! # Ok::<(), chub_assessment::AssessmentError>(())
//! ```

mod activity;
mod error;
mod fact;
mod ivcf;
mod summary;

pub use crate::activity::{WHO_WEEKLY_MINUTES, WeeklyActivity};
pub use crate::error::{AssessmentError, AssessmentErrorExt};
pub use crate::fact::{FATIGUE_CUTOFF, FactFScore};
pub use crate::ivcf::{FrailtyRisk, Ivcf20Score};
pub use crate::summary::{DashboardSummary, PatientAssessment, summarize};
