//! Raw form submissions and the per-request form state returned to callers.
//!
//! A [`FormData`] is the untyped `field -> string` view of a submission.
//! Schemas read from it and report problems as [`FieldErrors`], which travel
//! back to the presentation layer inside a [`FormState`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Untyped field values from one form submission.
///
/// Unknown fields are kept but never consulted by the schemas.
///
/// # Examples
/// ```
/// use invoicing::domain::FormData;
///
/// let form = FormData::from_pairs([("customerId", "c1"), ("amount", "50")]);
/// assert_eq!(form.get("customerId"), Some("c1"));
/// assert_eq!(form.get("status"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    /// Build a submission from field/value pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Raw value of `field`, if it was submitted.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// Field-indexed validation messages, in the order the rules produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// An empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the list for `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for `field`.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Whether `field` has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        !self.messages(field).is_empty()
    }

    /// Whether no field has any message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the fields carrying messages, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Result object handed back to the form that was submitted.
///
/// Serialises as `{errors?, message?}`; the empty state is the success marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl FormState {
    /// The empty success marker.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A state carrying field errors and a summary message.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors,
            message: Some(message.into()),
        }
    }

    /// A state carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            errors: FieldErrors::new(),
            message: Some(message.into()),
        }
    }

    /// Field errors, possibly empty.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Summary message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn field_errors_keep_insertion_order_per_field() {
        let mut errors = FieldErrors::new();
        errors.push("password", "first");
        errors.push("password", "second");
        errors.push("email", "bad");

        assert_eq!(errors.messages("password"), ["first", "second"]);
        assert!(errors.contains("email"));
        assert!(!errors.contains("username"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["email", "password"]);
    }

    #[rstest]
    fn empty_state_serialises_to_an_empty_object() {
        let value = serde_json::to_value(FormState::empty()).expect("state serialises");
        assert_eq!(value, json!({}));
    }

    #[rstest]
    fn invalid_state_serialises_errors_and_message() {
        let mut errors = FieldErrors::new();
        errors.push("customerId", "Please select a customer.");
        let state = FormState::invalid(errors, "Missing Fields. Failed to Create Invoice.");

        let value = serde_json::to_value(&state).expect("state serialises");
        assert_eq!(
            value,
            json!({
                "errors": { "customerId": ["Please select a customer."] },
                "message": "Missing Fields. Failed to Create Invoice."
            })
        );
    }

    #[rstest]
    fn form_data_deserialises_from_a_flat_map() {
        let form: FormData = serde_json::from_value(json!({ "amount": "10", "extra": "x" }))
            .expect("flat map deserialises");
        assert_eq!(form.get("amount"), Some("10"));
        assert_eq!(form.get("extra"), Some("x"));
    }
}
