use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Declared input type of a form field, rendered as the HTML `type` attribute.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Tel,
    Number,
    Date,
}

impl InputKind {
    /// `number` and `date` inputs bypass masking and never show indicators.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Number | Self::Date)
    }

    /// Inputs whose value is hidden unless the user toggles visibility.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}
