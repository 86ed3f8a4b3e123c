#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `CareHub` crates.
//!
//! * [`macro@chub_error`] turns a plain enum into a context-aware error type.
//! * [`macro@chub_slice`] turns a struct into a cheaply clonable feature slice handle.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own
//! macros in doctests; the integration tests under `tests/` exercise them instead.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
/// * **Variant Names**: Generates `kind(&self) -> &'static str` returning the variant name,
///   handy as a structured `tracing` field.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant uses named fields. Tuple and unit variants are rejected; a
///    message-less variant is written as `{ context: Option<Cow<'static, str>> }`.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a `source` field must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[chub_derive::chub_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal config error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     let cfg = builder.build().context("Failed to build config")?;
///     cfg.try_deserialize().map_err(|_| "Malformed settings".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn chub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as an
/// `Arc<<Name>Inner>` wrapper that derefs to the inner state, converts from it with
/// `From`, and implements `chub_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[chub_derive::chub_slice]
/// pub struct Masking {
///     pub currency: CurrencyFormat,
/// }
///
/// let slice = Masking::new(MaskingInner { currency: CurrencyFormat::default() });
/// ```
#[proc_macro_attribute]
pub fn chub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
