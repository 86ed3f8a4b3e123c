//! Facade crate for the `CareHub` client core.
//! Re-exports domain/kernel primitives and the feature crates, and wires them together:
//! configuration loading, logger setup and feature slice registration.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`bootstrap`] with a [`ConfigLoader`] at startup and keep the returned [`Client`].
//! - Or call [`init`] with an already-built [`ClientConfig`] when logging is set up elsewhere.

mod error;

pub use crate::error::{ClientError, ClientErrorExt};
pub use chub_domain as domain;
pub use chub_kernel as kernel;
pub use chub_kernel::config::ConfigLoader;
pub use chub_masking as masking;
pub use chub_validation as validation;

use chub_domain::config::ClientConfig;
#[cfg(feature = "logger")]
use chub_domain::config::LoggingConfig;
use chub_kernel::state::ClientState;
use chub_masking::Masking;
use tracing::info;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "assessment")]
    pub use chub_assessment as assessment;
    #[cfg(feature = "forms")]
    pub use chub_forms as forms;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "masking",
        "validation",
        #[cfg(feature = "forms")]
        "forms",
        #[cfg(feature = "assessment")]
        "assessment",
        #[cfg(feature = "logger")]
        "logger",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// A bootstrapped client: shared state plus the logger handle that keeps file output alive.
#[derive(Debug)]
pub struct Client {
    pub state: ClientState,
    #[cfg(feature = "logger")]
    logger: Option<chub_logger::Logger>,
}

impl Client {
    /// Masking slice bound to the configured currency locale.
    ///
    /// # Errors
    /// Returns [`ClientError::State`] if the masking slice was not registered.
    pub fn masking(&self) -> Result<&Masking, ClientError> {
        Ok(self.state.try_get_slice::<Masking>()?)
    }

    /// Starts an empty form whose currency fields use the configured locale.
    ///
    /// # Errors
    /// Returns [`ClientError::State`] if the masking slice was not registered.
    #[cfg(feature = "forms")]
    pub fn form(&self) -> Result<chub_forms::Form, ClientError> {
        Ok(chub_forms::Form::new(self.masking()?.clone()))
    }

    #[cfg(feature = "logger")]
    #[must_use]
    pub const fn logger(&self) -> Option<&chub_logger::Logger> {
        self.logger.as_ref()
    }
}

/// Initialize all feature slices for `config`.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ClientConfig) -> Result<ClientState, ClientError> {
    let slices = vec![chub_masking::init(config)?];

    let state = ClientState::builder().config(config.clone()).register_slices(slices).build()?;
    info!(slices = ?state.slice_names().collect::<Vec<_>>(), "Client initialized");
    Ok(state)
}

/// Installs the global logger described by `config`.
///
/// Returns `None` when both console and file output are disabled.
///
/// # Errors
/// Returns [`ClientError::Logger`] for an unknown level, malformed filter directives,
/// an unusable log directory, or an already installed subscriber.
#[cfg(feature = "logger")]
pub fn init_logging(
    name: &str,
    config: &LoggingConfig,
) -> Result<Option<chub_logger::Logger>, ClientError> {
    use chub_logger::{LogFormat, Logger, parse_level};

    if !config.console && config.directory.is_none() {
        return Ok(None);
    }

    let format = if config.json { LogFormat::Json } else { LogFormat::Compact };
    let mut builder = Logger::builder()
        .name(name)
        .console(config.console)
        .level(parse_level(&config.level)?)
        .format(format);
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter.clone());
    }

    let logger = match &config.directory {
        Some(directory) => builder.path(directory).init()?,
        None => builder.init()?,
    };
    Ok(Some(logger))
}

/// Loads configuration, installs logging and registers every feature slice.
///
/// # Errors
/// Returns an error if configuration loading, logger setup or slice initialization fails.
pub fn bootstrap(loader: ConfigLoader) -> Result<Client, ClientError> {
    let config: ClientConfig = loader.load()?;

    #[cfg(feature = "logger")]
    let logger = init_logging(env!("CARGO_PKG_NAME"), &config.logging)?;

    let state = init(&config)?;
    Ok(Client {
        state,
        #[cfg(feature = "logger")]
        logger,
    })
}
