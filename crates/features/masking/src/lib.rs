//! # Masking
//!
//! Pure, stateless masking for the Brazilian document and contact fields used across
//! the patient registration and assessment forms.
//!
//! ## Architecture
//!
//! 1.  **Registry ([`registry`]):** the static table of [`MaskRule`]s, one per [`MaskKind`].
//! 2.  **Applier ([`applier`]):** raw keystroke value → canonical display format.
//! 3.  **Validator ([`validator`]):** completeness check by significant-digit count.
//! 4.  **Currency ([`currency`]):** locale-aware rendering of cent amounts.
//!
//! The string entry points ([`apply_mask`], [`validate_mask`], [`get_mask_config`]) accept
//! free-form field-type keys and degrade to pass-through for unknown keys. Typed code should
//! go through [`MaskExt`] on [`MaskKind`], or through the [`Masking`] slice when the
//! configured currency locale matters.
//!
//! ```
//! use chub_masking::{MaskExt, MaskKind};
//!
//! assert_eq!(MaskKind::Cep.apply("12345678"), "12345-678");
//! assert!(MaskKind::Cep.validate("12345-678"));
//! assert_eq!(MaskKind::Phone.try_apply("119999988887"), None);
//! ```

pub mod applier;
pub mod currency;
mod error;
pub mod registry;
pub mod validator;

pub use crate::applier::apply_mask;
pub use crate::currency::CurrencyFormat;
pub use crate::error::{MaskError, MaskErrorExt};
pub use crate::registry::{get_mask_config, get_rule, parse_kind};
pub use crate::validator::validate_mask;
pub use chub_domain::mask::{MaskKind, MaskRule};

use chub_domain::config::ClientConfig;
use chub_kernel::domain::registry::InitializedSlice;

/// Typed masking operations on [`MaskKind`] using the default (BRL) currency format.
pub trait MaskExt: Copy {
    /// The registry rule for this kind.
    fn rule(self) -> &'static MaskRule;

    /// Formats `raw`; an over-length keystroke yields the previous formatted value.
    fn apply(self, raw: &str) -> String;

    /// Formats `raw`, or `None` when the keystroke must be rejected.
    fn try_apply(self, raw: &str) -> Option<String>;

    /// Whether the digit count of `value` is within the rule's bounds.
    fn validate(self, value: &str) -> bool;
}

impl MaskExt for MaskKind {
    fn rule(self) -> &'static MaskRule {
        get_rule(self)
    }

    fn apply(self, raw: &str) -> String {
        applier::apply(self, raw, &CurrencyFormat::BRL)
    }

    fn try_apply(self, raw: &str) -> Option<String> {
        applier::try_apply(self, raw, &CurrencyFormat::BRL)
    }

    fn validate(self, value: &str) -> bool {
        validator::validate(self, value)
    }
}

/// Masking feature state: the engine bound to the configured currency locale.
#[chub_derive::chub_slice]
pub struct Masking {
    pub currency: CurrencyFormat,
}

impl Default for Masking {
    fn default() -> Self {
        MaskingInner { currency: CurrencyFormat::BRL }.into()
    }
}

impl Masking {
    /// Builds the slice from the client locale.
    ///
    /// # Errors
    /// Returns [`MaskError::InvalidLocale`] if the configured currency format is ambiguous.
    pub fn from_config(config: &ClientConfig) -> Result<Self, MaskError> {
        let currency = CurrencyFormat::from_locale(&config.locale).context("locale")?;
        Ok(MaskingInner { currency }.into())
    }

    #[must_use]
    pub fn apply(&self, kind: MaskKind, raw: &str) -> String {
        applier::apply(kind, raw, &self.currency)
    }

    #[must_use]
    pub fn try_apply(&self, kind: MaskKind, raw: &str) -> Option<String> {
        applier::try_apply(kind, raw, &self.currency)
    }

    /// Rendered length cap for `kind`, widened for the configured currency symbol.
    #[must_use]
    pub fn max_length(&self, kind: MaskKind) -> Option<usize> {
        let rule = get_rule(kind);
        match kind {
            MaskKind::Currency => Some(self.currency.max_len(rule.max_digits)),
            _ => rule.max_formatted_length,
        }
    }
}

/// Initialize the masking feature slice.
///
/// # Errors
/// Returns [`MaskError::InvalidLocale`] if the configured currency format is ambiguous.
pub fn init(config: &ClientConfig) -> Result<InitializedSlice, MaskError> {
    let masking = Masking::from_config(config)?;
    tracing::info!(currency = masking.currency.symbol(), "Masking slice initialized");
    Ok(InitializedSlice::new(masking))
}
