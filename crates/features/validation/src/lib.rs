//! # Field Validation
//!
//! Domain validity checks that sit next to mask completeness: a CPF can have all
//! eleven digits (mask complete) and still fail its check digits. Each failure is a
//! [`ValidationError`] whose `Display` text is the message rendered under the field.
//!
//! ```
//! use chub_validation::{Rule, validate_value};
//! use chub_domain::mask::MaskKind;
//!
//! let rules = [Rule::Required, Rule::Mask { kind: MaskKind::Cep }];
//! let err = validate_value("12345-67", &rules).unwrap_err();
//! assert_eq!(err.to_string(), "Formato inválido para CEP");
//! ```

pub mod documents;
mod error;
mod rules;

pub use crate::documents::{is_valid_cnpj, is_valid_cpf};
pub use crate::error::{ValidationError, ValidationErrorExt};
pub use crate::rules::{Rule, validate_value};
