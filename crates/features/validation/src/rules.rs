use crate::documents::{is_valid_cnpj, is_valid_cpf};
use crate::error::ValidationError;
use chub_domain::mask::MaskKind;
use chub_masking::MaskExt;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail regex")
});

/// A single validity rule attached to a form field.
///
/// Serialized with a `rule` tag so form definitions can be loaded from JSON:
/// `{"rule": "minLength", "min": 8}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    /// The value must contain something other than whitespace.
    Required,
    Email,
    MinLength { min: usize },
    /// Check digits, on top of mask completeness.
    Cpf,
    Cnpj,
    /// Mask completeness only (`Formato inválido para CEP`).
    Mask { kind: MaskKind },
}

impl Rule {
    /// Checks `value` against this rule.
    ///
    /// Blank values only fail [`Rule::Required`]; an optional field left empty is valid.
    ///
    /// # Errors
    /// Returns the [`ValidationError`] describing the violation.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return match self {
                Self::Required => Err(ValidationError::Required { context: None }),
                _ => Ok(()),
            };
        }

        match self {
            Self::Required => Ok(()),
            Self::Email if !EMAIL_RE.is_match(value.trim()) => {
                Err(ValidationError::InvalidEmail { context: None })
            },
            Self::MinLength { min } if value.chars().count() < *min => {
                Err(ValidationError::TooShort { min: *min, context: None })
            },
            Self::Cpf if !is_valid_cpf(value) => Err(ValidationError::InvalidCpf { context: None }),
            Self::Cnpj if !is_valid_cnpj(value) => {
                Err(ValidationError::InvalidCnpj { context: None })
            },
            Self::Mask { kind } if !kind.validate(value) => {
                Err(ValidationError::InvalidFormat { label: kind.label(), context: None })
            },
            _ => Ok(()),
        }
    }
}

/// Runs `rules` in order and returns the first violation.
///
/// # Errors
/// Returns the first failing rule's [`ValidationError`].
pub fn validate_value(value: &str, rules: &[Rule]) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(Rule::Email.check("maria@clinica.com.br").is_ok());
        assert!(Rule::Email.check(" maria@clinica.com.br ").is_ok());
        assert!(Rule::Email.check("maria@clinica").is_err());
        assert!(Rule::Email.check("maria clinica@x.com").is_err());
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let rule = Rule::MinLength { min: 4 };
        assert!(rule.check("ação").is_ok());
        assert_eq!(
            rule.check("abc").unwrap_err(),
            ValidationError::TooShort { min: 4, context: None }
        );
    }
}
