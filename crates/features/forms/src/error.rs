use std::borrow::Cow;

/// Error types specific to form state handling.
#[chub_derive::chub_error]
pub enum FormError {
    #[error("Unknown field '{name}'{}", format_context(.context))]
    UnknownField { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Field '{name}' is already declared{}", format_context(.context))]
    DuplicateField { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal form error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl FormError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownField { name: Cow::Owned(name.to_owned()), context: None }
    }
}
