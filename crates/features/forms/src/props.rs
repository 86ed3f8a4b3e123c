use chub_domain::field::InputKind;
use chub_domain::mask::MaskKind;
use chub_validation::Rule;
use typed_builder::TypedBuilder;

/// Declarative description of a form field.
///
/// ```
/// use chub_forms::{FieldProps, InputKind, MaskKind};
///
/// let cpf = FieldProps::builder()
///     .name("cpf")
///     .label("CPF")
///     .input(InputKind::Tel)
///     .mask(MaskKind::Cpf)
///     .build();
/// assert!(cpf.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct FieldProps {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub label: String,
    #[builder(default)]
    pub input: InputKind,
    #[builder(default, setter(strip_option))]
    pub mask: Option<MaskKind>,
    /// Externally supplied error message; forces the error indicator.
    #[builder(default, setter(strip_option, into))]
    pub error: Option<String>,
    /// Forces the success indicator for non-empty values without an error.
    #[builder(default)]
    pub success: bool,
    #[builder(default, setter(strip_option, into))]
    pub placeholder: Option<String>,
    #[builder(default)]
    pub rules: Vec<Rule>,
}
