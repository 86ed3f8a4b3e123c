use chub_domain::field::InputKind;

/// Interaction state of a field, derived from its current value on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    Empty,
    /// Non-empty value on a field without a mask.
    Typing,
    ValidComplete,
    InvalidIncomplete,
}

/// Trailing indicator next to the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    #[default]
    None,
    Success,
    Error,
}

/// Everything a renderer needs to draw a field, computed from props and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub value: String,
    /// The input type to render; a visible password renders as `text`.
    pub input: InputKind,
    pub placeholder: Option<String>,
    pub max_length: Option<usize>,
    pub state: FieldState,
    pub indicator: Indicator,
    pub error: Option<String>,
    pub focused: bool,
    pub secret_visible: bool,
}
