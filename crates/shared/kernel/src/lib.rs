//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and provides config loading
//! and the [`state::ClientState`] container that owns initialized feature slices.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use chub_kernel::config::load_config;
//!     use chub_kernel::domain::config::ClientConfig;
//!     let cfg: ClientConfig = load_config(Some("client")).unwrap_or_default();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod state;

pub use chub_domain as domain;
