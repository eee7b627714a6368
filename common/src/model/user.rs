use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned identifier of a user.
///
/// Opaque to the UI: it is only compared, displayed and put back into URLs.
/// json-server hands out integers or strings depending on its version, so
/// both decode and each serializes back in the shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Num(u64),
    Str(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Num(id) => write!(f, "{id}"),
            UserId::Str(id) => f.write_str(id),
        }
    }
}

/// The organisation a user belongs to. Only `name` is edited by the UI; the
/// remaining fields the API sends (`catchPhrase`, `bs`, ...) ride along in
/// `extra` so an update writes them back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user record as exchanged with the API.
///
/// A record without `id` has not been created on the server yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Company,
    /// Fields the UI does not edit (`username`, `phone`, `address`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            company: Company {
                name: company_name.into(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}
