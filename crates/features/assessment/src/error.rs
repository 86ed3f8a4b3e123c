use std::borrow::Cow;

/// Error types specific to assessment scoring.
#[chub_derive::chub_error]
pub enum AssessmentError {
    /// A score or questionnaire response outside the instrument's range.
    #[error("{field} must be between 0 and {max}, got {value}{}", format_context(.context))]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal assessment error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl AssessmentError {
    pub(crate) const fn out_of_range(field: &'static str, value: u32, max: u32) -> Self {
        Self::OutOfRange { field, value, max, context: None }
    }
}
