//! Client configuration for talking to the remote users API.

use crate::model::pagination::Pagination;
use crate::model::user::UserId;

/// Base URL of the public API the UI targets by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Total number of records the UI assumes the API holds.
///
/// The API reports no total count, so page math runs against this fixed
/// figure. Replace it once the count comes from a response header or a
/// dedicated endpoint.
pub const ASSUMED_TOTAL_USERS: u32 = 10;

const USERS_PATH: &str = "/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u32,
    pub assumed_total: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            assumed_total: ASSUMED_TOTAL_USERS,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Collection endpoint, e.g. `https://host/users`.
    pub fn users_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), USERS_PATH)
    }

    /// Item endpoint, e.g. `https://host/users/3`.
    pub fn user_url(&self, id: &UserId) -> String {
        format!("{}/{}", self.users_url(), id)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page_size, self.assumed_total)
    }
}
