//! # Forms
//!
//! Controller logic behind every masked input: keystroke handling, derived field
//! state and the success/error indicators, plus a small owning [`Form`] store.
//!
//! Nothing here renders. A UI layer asks for a [`FieldView`] and draws it.
//!
//! ```
//! use chub_forms::{FieldProps, FieldState, Form, MaskKind};
//!
//! let mut form = Form::default()
//!     .with_field(FieldProps::builder().name("cep").label("CEP").mask(MaskKind::Cep).build())
//!     .unwrap();
//!
//! assert_eq!(form.change("cep", "12345678").unwrap(), "12345-678");
//! assert_eq!(form.view("cep").unwrap().state, FieldState::ValidComplete);
//! ```

mod controller;
mod error;
mod form;
mod props;
mod view;

pub use crate::controller::FieldController;
pub use crate::error::{FormError, FormErrorExt};
pub use crate::form::Form;
pub use crate::props::FieldProps;
pub use crate::view::{FieldState, FieldView, Indicator};
pub use chub_domain::field::InputKind;
pub use chub_domain::mask::MaskKind;
pub use chub_validation::Rule;
