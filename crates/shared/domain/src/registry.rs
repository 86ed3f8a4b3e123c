//! Type-erased storage for initialized feature slices.
//!
//! Feature crates build their state once at startup, wrap it in an [`InitializedSlice`]
//! and hand it to the kernel, which looks slices up again by concrete type.

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

/// Feature state that can live in the shared client state.
///
/// Implemented by `#[chub_slice]`; handles are cheap `Arc` clones.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// One registered slice, keyed by the concrete handle type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    /// Unqualified type name (`Masking`), for diagnostics.
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    #[must_use]
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        let path = type_name::<T>();
        let name = path.rsplit("::").next().unwrap_or(path);
        Self { id: TypeId::of::<T>(), name, state: Box::new(state) }
    }

    #[must_use]
    pub fn is<T: FeatureSlice>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// The stored state as `T`, or `None` if a different type was registered.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
