use serde::{Deserialize, Serialize};

/// Weekly moderate-equivalent minutes recommended for older adults.
pub const WHO_WEEKLY_MINUTES: u32 = 150;

/// Self-reported physical activity and sedentary behaviour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub moderate_minutes: u32,
    pub vigorous_minutes: u32,
    pub sedentary_minutes_per_day: u32,
}

impl WeeklyActivity {
    /// One vigorous minute counts as two moderate minutes.
    #[must_use]
    pub const fn equivalent_minutes(&self) -> u32 {
        self.moderate_minutes.saturating_add(self.vigorous_minutes.saturating_mul(2))
    }

    #[must_use]
    pub const fn is_who_compliant(&self) -> bool {
        self.equivalent_minutes() >= WHO_WEEKLY_MINUTES
    }
}
