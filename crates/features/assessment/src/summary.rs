use crate::activity::WeeklyActivity;
use crate::fact::FactFScore;
use crate::ivcf::{FrailtyRisk, Ivcf20Score};
use serde::{Deserialize, Serialize};

/// One patient's latest screening results as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAssessment {
    pub patient_id: String,
    pub name: String,
    pub age: u8,
    pub ivcf20: Ivcf20Score,
    /// Absent when the questionnaire was not applied.
    #[serde(default)]
    pub fact_f: Option<FactFScore>,
    #[serde(default)]
    pub activity: WeeklyActivity,
}

impl PatientAssessment {
    #[must_use]
    pub const fn risk(&self) -> FrailtyRisk {
        self.ivcf20.classify()
    }
}

/// Dashboard figures over a patient cohort.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_patients: u32,
    pub robust: u32,
    pub at_risk: u32,
    pub frail: u32,
    pub who_compliant: u32,
    /// Fraction in `0.0..=1.0`; zero for an empty cohort.
    pub who_compliance_rate: f64,
    /// Mean over patients with a FACT-F score.
    pub mean_fact_f: Option<f64>,
    pub mean_sedentary_minutes: Option<f64>,
}

impl DashboardSummary {
    #[must_use]
    pub const fn count(&self, risk: FrailtyRisk) -> u32 {
        match risk {
            FrailtyRisk::Robust => self.robust,
            FrailtyRisk::AtRisk => self.at_risk,
            FrailtyRisk::Frail => self.frail,
        }
    }
}

#[derive(Default)]
struct Mean {
    sum: u64,
    n: u32,
}

impl Mean {
    fn push(&mut self, value: u32) {
        self.sum += u64::from(value);
        self.n += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn get(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum as f64 / f64::from(self.n))
    }
}

/// Aggregates a cohort into dashboard figures.
#[must_use]
pub fn summarize(patients: &[PatientAssessment]) -> DashboardSummary {
    let mut summary = DashboardSummary::default();
    let mut fact_f = Mean::default();
    let mut sedentary = Mean::default();

    for patient in patients {
        summary.total_patients += 1;
        match patient.risk() {
            FrailtyRisk::Robust => summary.robust += 1,
            FrailtyRisk::AtRisk => summary.at_risk += 1,
            FrailtyRisk::Frail => summary.frail += 1,
        }
        if patient.activity.is_who_compliant() {
            summary.who_compliant += 1;
        }
        if let Some(score) = patient.fact_f {
            fact_f.push(score.total().into());
        }
        sedentary.push(patient.activity.sedentary_minutes_per_day);
    }

    if summary.total_patients > 0 {
        summary.who_compliance_rate =
            f64::from(summary.who_compliant) / f64::from(summary.total_patients);
    }
    summary.mean_fact_f = fact_f.get();
    summary.mean_sedentary_minutes = sedentary.get();

    tracing::debug!(
        patients = summary.total_patients,
        frail = summary.frail,
        "Dashboard summary computed"
    );
    summary
}
