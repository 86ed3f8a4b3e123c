use crate::controller::FieldController;
use crate::error::FormError;
use crate::props::FieldProps;
use crate::view::FieldView;
use chub_masking::Masking;
use chub_validation::validate_value;
use fxhash::FxHashMap;
use std::borrow::Cow;
use tracing::debug;

/// Owning form state: declared fields in order and their current values.
#[derive(Debug, Clone, Default)]
pub struct Form {
    masking: Masking,
    fields: Vec<FieldController>,
    values: FxHashMap<String, String>,
}

impl Form {
    #[must_use]
    pub fn new(masking: Masking) -> Self {
        Self { masking, fields: Vec::new(), values: FxHashMap::default() }
    }

    /// Declares a field, starting with an empty value.
    ///
    /// # Errors
    /// Returns [`FormError::DuplicateField`] if a field with the same name exists.
    pub fn add_field(&mut self, props: FieldProps) -> Result<&mut Self, FormError> {
        if self.values.contains_key(&props.name) {
            return Err(FormError::DuplicateField {
                name: Cow::Owned(props.name),
                context: None,
            });
        }

        self.values.insert(props.name.clone(), String::new());
        self.fields.push(FieldController::with_masking(props, self.masking.clone()));
        Ok(self)
    }

    /// Builder-style [`Form::add_field`].
    ///
    /// # Errors
    /// Returns [`FormError::DuplicateField`] if a field with the same name exists.
    pub fn with_field(mut self, props: FieldProps) -> Result<Self, FormError> {
        self.add_field(props)?;
        Ok(self)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldController::name)
    }

    /// # Errors
    /// Returns [`FormError::UnknownField`] for undeclared names.
    pub fn field(&self, name: &str) -> Result<&FieldController, FormError> {
        self.fields.iter().find(|f| f.name() == name).ok_or_else(|| FormError::unknown(name))
    }

    /// # Errors
    /// Returns [`FormError::UnknownField`] for undeclared names.
    pub fn field_mut(&mut self, name: &str) -> Result<&mut FieldController, FormError> {
        self.fields.iter_mut().find(|f| f.name() == name).ok_or_else(|| FormError::unknown(name))
    }

    /// # Errors
    /// Returns [`FormError::UnknownField`] for undeclared names.
    pub fn value(&self, name: &str) -> Result<&str, FormError> {
        self.values.get(name).map(String::as_str).ok_or_else(|| FormError::unknown(name))
    }

    /// Applies a keystroke to `name` and returns the stored value.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for undeclared names.
    pub fn change(&mut self, name: &str, raw: &str) -> Result<&str, FormError> {
        let field =
            self.fields.iter().find(|f| f.name() == name).ok_or_else(|| FormError::unknown(name))?;
        let slot = self.values.get_mut(name).ok_or_else(|| FormError::unknown(name))?;

        *slot = field.on_change(slot, raw);
        Ok(slot.as_str())
    }

    /// # Errors
    /// Returns [`FormError::UnknownField`] for undeclared names.
    pub fn view(&self, name: &str) -> Result<FieldView, FormError> {
        Ok(self.field(name)?.view(self.value(name)?))
    }

    /// Views of every field in declaration order.
    #[must_use]
    pub fn views(&self) -> Vec<FieldView> {
        self.fields
            .iter()
            .map(|f| f.view(self.values.get(f.name()).map_or("", String::as_str)))
            .collect()
    }

    /// Runs each field's rules, writing the first failure into the field's error
    /// and clearing it on success. Returns whether every field passed.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            let value = self.values.get(field.name()).map_or("", String::as_str);
            let error = validate_value(value, &field.props().rules).err().map(|e| e.to_string());

            if let Some(message) = &error {
                debug!(field = %field.name(), %message, "Field failed validation");
                valid = false;
            }
            field.set_error(error);
        }
        valid
    }

    /// Masked fields whose current value is not complete, in declaration order.
    pub fn incomplete_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| !f.is_valid(self.values.get(f.name()).map_or("", String::as_str)))
            .map(FieldController::name)
    }
}
