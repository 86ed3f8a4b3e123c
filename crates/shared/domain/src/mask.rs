//! Field-type masks for Brazilian document and contact inputs.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The closed set of masked field types.
///
/// The string form (`"phone"`, `"cpf"`, ...) is the key used by form definitions and
/// by the string-based masking entry points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MaskKind {
    Phone,
    Cpf,
    Cnpj,
    Cep,
    Currency,
}

impl MaskKind {
    /// Human-facing field label used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phone => "Telefone",
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Cep => "CEP",
            Self::Currency => "Valor",
        }
    }
}

/// Formatting and completeness rule for one [`MaskKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaskRule {
    pub kind: MaskKind,
    /// Non-digit characters are stripped before reformatting.
    pub digits_only: bool,
    /// Inclusive lower bound on significant digits for a complete value.
    pub min_digits: usize,
    /// Inclusive upper bound; more digits than this reject the keystroke.
    pub max_digits: usize,
    /// Canonical empty-state display.
    pub placeholder: &'static str,
    /// Cap on the rendered string, used as the input's max length. For currency this
    /// assumes the default `R$` symbol.
    pub max_formatted_length: Option<usize>,
}

impl MaskRule {
    /// Identifiers with a single valid length (everything except currency).
    #[must_use]
    pub const fn is_fixed_length(&self) -> bool {
        self.min_digits == self.max_digits
    }
}
