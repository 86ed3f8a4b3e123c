use std::borrow::Cow;

/// A failed validation rule. The `Display` text is the message shown under the field.
#[chub_derive::chub_error]
#[derive(Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Campo obrigatório{}", format_context(.context))]
    Required { context: Option<Cow<'static, str>> },

    #[error("E-mail inválido{}", format_context(.context))]
    InvalidEmail { context: Option<Cow<'static, str>> },

    #[error("Mínimo de {min} caracteres{}", format_context(.context))]
    TooShort { min: usize, context: Option<Cow<'static, str>> },

    #[error("CPF inválido{}", format_context(.context))]
    InvalidCpf { context: Option<Cow<'static, str>> },

    #[error("CNPJ inválido{}", format_context(.context))]
    InvalidCnpj { context: Option<Cow<'static, str>> },

    /// The value is not a complete masked value (e.g. a CEP with 7 digits).
    #[error("Formato inválido para {label}{}", format_context(.context))]
    InvalidFormat { label: &'static str, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Erro interno de validação{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
