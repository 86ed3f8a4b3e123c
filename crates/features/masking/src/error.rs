use std::borrow::Cow;

/// Error types specific to the masking feature.
///
/// The engine itself never fails; these only surface when typed values are built
/// from untrusted strings or configuration.
#[chub_derive::chub_error]
pub enum MaskError {
    /// A field-type key that is not one of the known masks.
    #[error("Unknown mask '{key}'{}", format_context(.context))]
    UnknownKind { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Currency settings that would make formatted values ambiguous.
    #[error("Invalid currency locale{}: {message}", format_context(.context))]
    InvalidLocale { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal masking error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
