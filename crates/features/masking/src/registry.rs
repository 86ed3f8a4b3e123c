//! # Mask Registry
//!
//! Static, read-only table of formatting rules, one per [`MaskKind`].

use crate::error::MaskError;
use chub_domain::mask::{MaskKind, MaskRule};
use std::str::FromStr;

const PHONE: MaskRule = MaskRule {
    kind: MaskKind::Phone,
    digits_only: true,
    min_digits: 11,
    max_digits: 11,
    placeholder: "(11) 99999-9999",
    max_formatted_length: Some(15),
};

const CPF: MaskRule = MaskRule {
    kind: MaskKind::Cpf,
    digits_only: true,
    min_digits: 11,
    max_digits: 11,
    placeholder: "000.000.000-00",
    max_formatted_length: Some(14),
};

const CNPJ: MaskRule = MaskRule {
    kind: MaskKind::Cnpj,
    digits_only: true,
    min_digits: 14,
    max_digits: 14,
    placeholder: "00.000.000/0000-00",
    max_formatted_length: Some(18),
};

const CEP: MaskRule = MaskRule {
    kind: MaskKind::Cep,
    digits_only: true,
    min_digits: 8,
    max_digits: 8,
    placeholder: "00000-000",
    max_formatted_length: Some(9),
};

// Twelve digits of cents: up to "R$ 9.999.999.999,99". The length cap assumes the BRL
// symbol; `Masking::max_length` gives the cap for the configured locale.
const CURRENCY: MaskRule = MaskRule {
    kind: MaskKind::Currency,
    digits_only: true,
    min_digits: 1,
    max_digits: 12,
    placeholder: "R$ 0,00",
    max_formatted_length: Some(19),
};

/// Every rule, in declaration order of [`MaskKind`].
pub static RULES: [MaskRule; 5] = [PHONE, CPF, CNPJ, CEP, CURRENCY];

/// Returns the rule for a mask kind. Total over the enum.
#[must_use]
pub const fn get_rule(kind: MaskKind) -> &'static MaskRule {
    match kind {
        MaskKind::Phone => &PHONE,
        MaskKind::Cpf => &CPF,
        MaskKind::Cnpj => &CNPJ,
        MaskKind::Cep => &CEP,
        MaskKind::Currency => &CURRENCY,
    }
}

/// Looks up a rule by its exact lower-case key (`"phone"`, `"cpf"`, ...).
///
/// `None` means "no masking": callers pass the value through untouched.
#[must_use]
pub fn get_mask_config(field_type: &str) -> Option<&'static MaskRule> {
    MaskKind::from_str(field_type).ok().map(get_rule)
}

/// Parses a field-type key into a [`MaskKind`].
///
/// # Errors
/// Returns [`MaskError::UnknownKind`] when the key names no mask.
pub fn parse_kind(field_type: &str) -> Result<MaskKind, MaskError> {
    MaskKind::from_str(field_type).map_err(|_| MaskError::UnknownKind {
        key: field_type.to_owned().into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_is_indexed_by_kind() {
        for kind in MaskKind::iter() {
            assert_eq!(get_rule(kind).kind, kind);
        }
    }

    #[test]
    fn only_currency_has_a_digit_range() {
        for rule in &RULES {
            assert_eq!(rule.is_fixed_length(), rule.kind != MaskKind::Currency, "{:?}", rule.kind);
        }
    }

    #[test]
    fn placeholders_fit_their_length_cap() {
        for rule in &RULES {
            let cap = rule.max_formatted_length.unwrap_or(usize::MAX);
            assert!(rule.placeholder.chars().count() <= cap, "{:?}", rule.kind);
        }
    }
}
