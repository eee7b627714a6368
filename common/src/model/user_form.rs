//! Edit state behind the user form.
//!
//! The form works on a flattened projection of a [`User`]: name, email and
//! company name, plus the id of the record it was seeded from. Seeding is an
//! explicit [`UserForm::load`] that discards whatever was typed before.

use std::str::FromStr;

use thiserror::Error;

use super::user::{Company, User, UserId};

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

/// The editable inputs. `as_str` doubles as the HTML `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Company];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField(FormField),
}

/// What a successful submit hands to the save callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub company: String,
}

impl UserFields {
    /// Writes the edited values over `base`, keeping every field the form
    /// does not know about.
    pub fn apply_to(&self, base: &User) -> User {
        let mut user = base.clone();
        user.name = self.name.clone();
        user.email = self.email.clone();
        user.company.name = self.company.clone();
        user
    }
}

impl From<UserFields> for User {
    fn from(fields: UserFields) -> Self {
        User {
            id: fields.id,
            name: fields.name,
            email: fields.email,
            company: Company {
                name: fields.company,
                ..Company::default()
            },
            ..User::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    id: Option<UserId>,
    name: String,
    email: String,
    company: String,
    error: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        let mut form = Self::default();
        form.load(user);
        form
    }

    /// Re-seeds every field from `user` and clears the validation message.
    /// Unsaved edits are overwritten, not merged.
    pub fn load(&mut self, user: &User) {
        self.id = user.id.clone();
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.company = user.company.name.clone();
        self.error.clear();
    }

    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
        };
        *slot = value.into();
    }

    /// Updates the input called `name`. Returns `false` and changes nothing
    /// when no such input exists.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<FormField>() {
            Ok(field) => {
                self.set_field(field, value);
                true
            }
            Err(err) => {
                log::debug!("ignoring edit: {err}");
                false
            }
        }
    }

    /// Validates the required fields.
    ///
    /// On failure the validation message is set and nothing is returned for
    /// the caller to save. On success the message is cleared and the field set
    /// is returned together with the id the form was seeded from.
    pub fn submit(&mut self) -> Result<UserFields, ValidationError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
        {
            let err = ValidationError::MissingField(field);
            self.error = err.to_string();
            return Err(err);
        }

        self.error.clear();
        Ok(UserFields {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
        })
    }

    /// Current validation message, `None` when there is none.
    pub fn error(&self) -> Option<&str> {
        (!self.error.is_empty()).then_some(self.error.as_str())
    }
}
