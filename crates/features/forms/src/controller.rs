use crate::props::FieldProps;
use crate::view::{FieldState, FieldView, Indicator};
use chub_domain::field::InputKind;
use chub_domain::mask::MaskKind;
use chub_masking::{MaskExt, Masking};
use tracing::debug;

/// Runtime state of a single field: its props plus focus and password visibility.
///
/// The controller never stores the value. Callers pass the current value in and
/// receive derived state back, so the same controller can be driven by any store.
#[derive(Debug, Clone)]
pub struct FieldController {
    props: FieldProps,
    masking: Masking,
    focused: bool,
    secret_visible: bool,
}

impl FieldController {
    /// Controller using the default pt-BR masking locale.
    #[must_use]
    pub fn new(props: FieldProps) -> Self {
        Self::with_masking(props, Masking::default())
    }

    #[must_use]
    pub const fn with_masking(props: FieldProps, masking: Masking) -> Self {
        Self { props, masking, focused: false, secret_visible: false }
    }

    #[must_use]
    pub const fn props(&self) -> &FieldProps {
        &self.props
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.props.name
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.props.error = error;
    }

    /// Mask applied on change; special inputs (`number`, `date`) are never masked.
    fn active_mask(&self) -> Option<MaskKind> {
        self.props.mask.filter(|_| !self.props.input.is_special())
    }

    /// Computes the value to store after a keystroke.
    ///
    /// A keystroke that would exceed the mask's digit limit is rejected and `previous`
    /// is returned unchanged.
    #[must_use]
    pub fn on_change(&self, previous: &str, raw: &str) -> String {
        let Some(kind) = self.active_mask() else {
            return raw.to_owned();
        };

        self.masking.try_apply(kind, raw).unwrap_or_else(|| {
            debug!(field = %self.props.name, mask = %kind, "Keystroke rejected");
            previous.to_owned()
        })
    }

    #[must_use]
    pub fn is_valid(&self, value: &str) -> bool {
        self.props.mask.is_none_or(|kind| kind.validate(value))
    }

    #[must_use]
    pub fn show_success(&self, value: &str) -> bool {
        (self.props.success || self.is_valid(value))
            && self.props.error.is_none()
            && !value.is_empty()
            && !self.props.input.is_special()
    }

    #[must_use]
    pub fn show_error(&self, value: &str) -> bool {
        let incomplete = !value.is_empty() && !self.is_valid(value) && self.props.mask.is_some();
        (self.props.error.is_some() || incomplete) && !self.props.input.is_special()
    }

    /// When both indicators apply (a forced `success` on an incomplete value), the error wins.
    #[must_use]
    pub fn indicator(&self, value: &str) -> Indicator {
        if self.show_error(value) {
            Indicator::Error
        } else if self.show_success(value) {
            Indicator::Success
        } else {
            Indicator::None
        }
    }

    #[must_use]
    pub fn state(&self, value: &str) -> FieldState {
        match (value.is_empty(), self.props.mask) {
            (true, _) => FieldState::Empty,
            (false, None) => FieldState::Typing,
            (false, Some(_)) if self.is_valid(value) => FieldState::ValidComplete,
            (false, Some(_)) => FieldState::InvalidIncomplete,
        }
    }

    pub const fn toggle_secret_visibility(&mut self) {
        self.secret_visible = !self.secret_visible;
    }

    #[must_use]
    pub const fn rendered_input(&self) -> InputKind {
        if self.props.input.is_secret() && self.secret_visible {
            InputKind::Text
        } else {
            self.props.input
        }
    }

    pub const fn focus(&mut self) {
        self.focused = true;
    }

    pub const fn blur(&mut self) {
        self.focused = false;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Rendered length cap; `None` for unmasked and special inputs.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.active_mask().and_then(|kind| self.masking.max_length(kind))
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<String> {
        self.props
            .placeholder
            .clone()
            .or_else(|| self.props.mask.map(|kind| kind.rule().placeholder.to_owned()))
    }

    #[must_use]
    pub fn view(&self, value: &str) -> FieldView {
        FieldView {
            name: self.props.name.clone(),
            label: self.props.label.clone(),
            value: value.to_owned(),
            input: self.rendered_input(),
            placeholder: self.placeholder(),
            max_length: self.max_length(),
            state: self.state(value),
            indicator: self.indicator(value),
            error: self.props.error.clone(),
            focused: self.focused,
            secret_visible: self.secret_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cep() -> FieldController {
        FieldController::new(
            FieldProps::builder().name("cep").label("CEP").mask(MaskKind::Cep).build(),
        )
    }

    #[test]
    fn state_follows_value() {
        let field = cep();
        assert_eq!(field.state(""), FieldState::Empty);
        assert_eq!(field.state("12345-67"), FieldState::InvalidIncomplete);
        assert_eq!(field.state("12345-678"), FieldState::ValidComplete);

        let plain = FieldController::new(FieldProps::builder().name("nome").label("Nome").build());
        assert_eq!(plain.state("Ana"), FieldState::Typing);
    }

    #[test]
    fn focus_is_cosmetic() {
        let mut field = cep();
        field.focus();
        assert!(field.is_focused());
        assert_eq!(field.indicator("12345"), Indicator::Error);
        field.blur();
        assert!(!field.is_focused());
        assert_eq!(field.indicator("12345"), Indicator::Error);
    }
}
