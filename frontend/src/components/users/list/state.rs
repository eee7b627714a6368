use common::config::ClientConfig;
use common::model::user_list::UserListState;

pub struct UserListComponent {
    /// Rows, page cursor, fetch status, error message and edit session.
    pub list: UserListState,

    /// Guard so the first page is fetched once, on first render.
    pub loaded: bool,
}

impl UserListComponent {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            list: UserListState::new(config),
            loaded: false,
        }
    }
}
