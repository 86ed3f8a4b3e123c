//! # Mask Validator
//!
//! Completeness only: a value is complete when its digit count falls inside the
//! rule's bounds. Check digits (CPF, CNPJ) are a separate concern handled by the
//! validation feature, with its own messages.

use crate::applier::digit_count;
use crate::registry::{get_mask_config, get_rule};
use chub_domain::mask::{MaskKind, MaskRule};

/// Returns whether `value` (formatted or raw) is complete for `field_type`.
///
/// Unknown field types have nothing to validate and are always complete.
///
/// ```
/// use chub_masking::validate_mask;
///
/// assert!(validate_mask("123.456.789-00", "cpf"));
/// assert!(!validate_mask("123.456.789-0", "cpf"));
/// assert!(validate_mask("anything", "unknown"));
/// ```
#[must_use]
pub fn validate_mask(value: &str, field_type: &str) -> bool {
    get_mask_config(field_type).is_none_or(|rule| is_complete(rule, value))
}

/// Typed form of [`validate_mask`].
#[must_use]
pub fn validate(kind: MaskKind, value: &str) -> bool {
    is_complete(get_rule(kind), value)
}

fn is_complete(rule: &MaskRule, value: &str) -> bool {
    (rule.min_digits..=rule.max_digits).contains(&digit_count(value))
}
