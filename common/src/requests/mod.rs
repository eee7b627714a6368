/// Query string for the paginated `GET /users` endpoint.
///
/// The API uses json-server conventions: `_page` is 1-based and `_limit` is
/// the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersQuery {
    pub page: u32,
    pub limit: u32,
}

impl ListUsersQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn pairs(&self) -> [(&'static str, String); 2] {
        [("_page", self.page.to_string()), ("_limit", self.limit.to_string())]
    }
}
