use std::borrow::Cow;

/// Errors surfaced while bootstrapping the client.
#[chub_derive::chub_error]
pub enum ClientError {
    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: chub_kernel::config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Client state error{}: {source}", format_context(.context))]
    State { source: chub_kernel::state::StateError, context: Option<Cow<'static, str>> },

    #[error("Masking setup error{}: {source}", format_context(.context))]
    Masking { source: chub_masking::MaskError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "logger")]
    #[error("Logger setup error{}: {source}", format_context(.context))]
    Logger { source: chub_logger::LoggerError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal client error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
