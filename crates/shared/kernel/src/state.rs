use chub_domain::config::ClientConfig;
use chub_domain::registry::{FeatureSlice, InitializedSlice};
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[chub_derive::chub_error]
pub enum StateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct ClientStateInner {
    pub config: ClientConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared client state: configuration plus every initialized feature slice.
#[derive(Debug, Clone)]
pub struct ClientState {
    inner: Arc<ClientStateInner>,
}

impl ClientState {
    #[must_use]
    pub fn builder() -> ClientStateBuilder {
        ClientStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns [`StateError::MissingSlice`] if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, StateError> {
        self.get_slice::<T>().ok_or_else(|| StateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for ClientState {
    type Target = ClientStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct ClientStateBuilder {
    config: Option<ClientConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl ClientStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        self.slices.extend(slices.into_iter().map(|slice| (slice.id, slice)));
        self
    }

    /// # Errors
    /// Returns [`StateError::Validation`] when no configuration was provided.
    pub fn build(self) -> Result<ClientState, StateError> {
        let config = self.config.ok_or_else(|| StateError::Validation {
            message: "ClientConfig not provided".into(),
            context: None,
        })?;

        Ok(ClientState { inner: Arc::new(ClientStateInner { config, slices: self.slices }) })
    }
}
