//! Client-side form validation
//!
//! Two rules (`required`, `email`) validated in eager mode: a field is
//! checked when its value is committed (blur/change), and re-checked on
//! every keystroke while it is invalid. Messages come from the catalog
//! under `forms.validation.<rule>` with `{field}` substituted.

use crate::i18n::{Locale, keys, t_with};
use crate::presenter::FormHandle;
use eventos_client::FieldErrors;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// A validation rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank
    Required,
    /// Looks like an email address (blank passes; combine with `Required`)
    Email,
}

impl Rule {
    /// Name used for the message key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
        }
    }

    /// True when `value` satisfies the rule
    #[must_use]
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::Email => {
                value.is_empty() || EMAIL.as_ref().is_some_and(|re| re.is_match(value.trim()))
            },
        }
    }

    /// Localized failure message for `field`
    #[must_use]
    pub fn message(self, field: &str, locale: Locale) -> String {
        t_with(
            locale,
            &format!("{}{}", keys::VALIDATION_PREFIX, self.name()),
            &[("field", field)],
        )
    }
}

/// What caused a field update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Keystroke
    Input,
    /// Value committed (blur, select)
    Change,
}

#[derive(Clone, Debug, Default)]
struct Field {
    rules: Vec<Rule>,
    value: String,
    errors: Vec<String>,
}

/// Client-side state of one form
#[derive(Clone, Debug)]
pub struct FormState {
    locale: Locale,
    fields: BTreeMap<String, Field>,
}

impl FormState {
    /// Empty form
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            fields: BTreeMap::new(),
        }
    }

    /// Declare a field and its rules
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: &[Rule]) -> Self {
        self.fields.insert(
            name.into(),
            Field {
                rules: rules.to_vec(),
                ..Field::default()
            },
        );
        self
    }

    /// Update a field's value, validating in eager mode
    pub fn update(&mut self, name: &str, value: impl Into<String>, trigger: Trigger) {
        let locale = self.locale;
        let field = self.fields.entry(name.to_string()).or_default();
        field.value = value.into();

        let invalid = !field.errors.is_empty();
        if trigger == Trigger::Change || invalid {
            field.errors = check_field(name, field, locale);
        }
    }

    /// Validate every field (on submit); true when all pass
    pub fn validate(&mut self) -> bool {
        let locale = self.locale;
        for (name, field) in &mut self.fields {
            field.errors = check_field(name, field, locale);
        }
        self.is_valid()
    }

    /// Current errors of a field
    #[must_use]
    pub fn errors(&self, name: &str) -> &[String] {
        self.fields
            .get(name)
            .map_or(&[][..], |field| field.errors.as_slice())
    }

    /// Current value of a field
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|field| field.value.as_str())
    }

    /// True when no field shows an error
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|field| field.errors.is_empty())
    }
}

impl FormHandle for FormState {
    fn set_errors(&mut self, fields: &FieldErrors) {
        for (name, messages) in fields {
            self.fields.entry(name.clone()).or_default().errors = messages.clone();
        }
    }
}

fn check_field(name: &str, field: &Field, locale: Locale) -> Vec<String> {
    field
        .rules
        .iter()
        .filter(|rule| !rule.check(&field.value))
        .map(|rule| rule.message(name, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form() -> FormState {
        FormState::new(Locale::En)
            .field("email", &[Rule::Required, Rule::Email])
            .field("password", &[Rule::Required])
    }

    #[test]
    fn rules_check_values() {
        assert!(Rule::Required.check("x"));
        assert!(!Rule::Required.check("   "));
        assert!(Rule::Email.check("ana@example.com"));
        assert!(Rule::Email.check(""));
        assert!(!Rule::Email.check("ana@"));
    }

    #[test]
    fn messages_are_localized() {
        assert_eq!(Rule::Required.message("email", Locale::En), "The email field is required");
        assert_eq!(Rule::Email.message("email", Locale::Pt), "O campo email deve ser um email válido");
    }

    #[test]
    fn eager_mode_waits_for_change_then_follows_input() {
        let mut form = login_form();

        form.update("email", "ana", Trigger::Input);
        assert!(form.errors("email").is_empty());

        form.update("email", "ana", Trigger::Change);
        assert_eq!(form.errors("email"), ["The email field must be a valid email"]);

        form.update("email", "ana@example.com", Trigger::Input);
        assert!(form.errors("email").is_empty());

        form.update("email", "ana@", Trigger::Input);
        assert!(form.errors("email").is_empty());
    }

    #[test]
    fn submit_validates_everything() {
        let mut form = login_form();
        assert!(!form.validate());
        assert_eq!(form.errors("password"), ["The password field is required"]);

        form.update("email", "ana@example.com", Trigger::Change);
        form.update("password", "secret", Trigger::Change);
        assert!(form.validate());
    }

    #[test]
    fn server_errors_replace_field_errors() {
        let mut form = login_form();
        let mut fields = FieldErrors::new();
        fields.insert("email".to_string(), vec!["Already taken.".to_string()]);
        fields.insert("non_field_errors".to_string(), vec!["Try again.".to_string()]);

        form.set_errors(&fields);

        assert_eq!(form.errors("email"), ["Already taken."]);
        assert_eq!(form.errors("non_field_errors"), ["Try again."]);
        assert!(!form.is_valid());
    }
}
