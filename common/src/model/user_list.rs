//! State machine behind the users table.
//!
//! The list owns the records of the current page, the page cursor, the fetch
//! status, the single visible error message and the edit session the form is
//! bound to. It never performs I/O: every request starts with a method that
//! says what to send and ends with an `apply_*` method fed the outcome.
//!
//! Fetches carry a sequence token. Only the response to the most recently
//! issued fetch is applied, so rapid page changes resolve to the last page
//! asked for regardless of the order responses arrive in.

use log::{debug, info, warn};

use crate::api::{ApiError, RequestKind};
use crate::config::ClientConfig;

use super::pagination::Pagination;
use super::user::{User, UserId};
use super::user_form::UserFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Identifies one issued page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
}

/// The record the form is currently bound to.
///
/// `token` changes on every open, which is what tells the form to re-seed.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub token: u64,
    pub user: User,
}

/// Request to send once the form has been submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(User),
    Update(UserId, User),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserListState {
    users: Vec<User>,
    page: u32,
    pagination: Pagination,
    has_loaded: bool,
    status: FetchStatus,
    error: Option<RequestKind>,
    editing: Option<EditSession>,
    last_fetch: u64,
    last_session: u64,
}

impl UserListState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            users: Vec::new(),
            page: 1,
            pagination: config.pagination(),
            has_loaded: false,
            status: FetchStatus::Idle,
            error: None,
            editing: None,
            last_fetch: 0,
            last_session: 0,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page count from the pagination, reported as 1 until a fetch lands.
    pub fn total_pages(&self) -> u32 {
        if self.has_loaded {
            self.pagination.total_pages()
        } else {
            1
        }
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Idle | FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(RequestKind::failure_message)
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn can_go_previous(&self) -> bool {
        self.pagination.has_previous(self.page)
    }

    pub fn can_go_next(&self) -> bool {
        self.has_loaded && self.pagination.has_next(self.page)
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }

    /// Starts a fetch of the current page.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_fetch += 1;
        self.status = FetchStatus::Loading;
        let ticket = FetchTicket {
            seq: self.last_fetch,
            page: self.page,
        };
        debug!("fetching page {} (seq {})", ticket.page, ticket.seq);
        ticket
    }

    /// Moves one page back and starts its fetch, unless already on page 1.
    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        if !self.can_go_previous() {
            return None;
        }
        self.page -= 1;
        Some(self.begin_fetch())
    }

    /// Moves one page forward and starts its fetch, unless on the last page.
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if !self.can_go_next() {
            return None;
        }
        self.page += 1;
        Some(self.begin_fetch())
    }

    /// Applies the outcome of a page fetch. Returns `false` when the ticket
    /// is stale and the outcome was dropped.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<User>, ApiError>) -> bool {
        if ticket.seq != self.last_fetch {
            debug!(
                "dropping stale response for page {} (seq {}, latest {})",
                ticket.page, ticket.seq, self.last_fetch
            );
            return false;
        }

        match result {
            Ok(users) => {
                info!("loaded {} users for page {}", users.len(), ticket.page);
                self.users = users;
                self.has_loaded = true;
                self.status = FetchStatus::Loaded;
                self.clear_error(RequestKind::Fetch);
            }
            Err(err) => {
                self.status = FetchStatus::Failed;
                self.fail(RequestKind::Fetch, &err);
            }
        }
        true
    }

    /// Opens the form on an empty record.
    pub fn open_add(&mut self) -> &EditSession {
        self.open(User::default())
    }

    /// Opens the form on the listed record with `id`.
    pub fn open_edit(&mut self, id: UserId) -> Option<&EditSession> {
        let user = self.users.iter().find(|user| user.id.as_ref() == Some(&id))?.clone();
        Some(self.open(user))
    }

    fn open(&mut self, user: User) -> &EditSession {
        self.last_session += 1;
        self.editing.insert(EditSession {
            token: self.last_session,
            user,
        })
    }

    /// Closes the form. The collection is left alone.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Turns submitted form fields into the request to send.
    ///
    /// An open session on a record with an id becomes an update of that
    /// record with only the edited fields changed; anything else is a
    /// create. Returns `None` when no form is open.
    pub fn prepare_save(&self, fields: &UserFields) -> Option<SaveRequest> {
        let session = self.editing.as_ref()?;
        let request = match &session.user.id {
            Some(id) => SaveRequest::Update(id.clone(), fields.apply_to(&session.user)),
            None => SaveRequest::Create(User::from(UserFields {
                id: None,
                ..fields.clone()
            })),
        };
        Some(request)
    }

    /// Appends the record the server created and closes the form. On
    /// failure the form stays open.
    pub fn apply_create(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                info!("created user {:?}", user.id);
                self.users.push(user);
                self.editing = None;
                self.clear_error(RequestKind::Create);
            }
            Err(err) => self.fail(RequestKind::Create, &err),
        }
    }

    /// Replaces the record with the same id in place and closes the form.
    /// On failure the row and the form are left as they were.
    pub fn apply_update(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                info!("updated user {:?}", user.id);
                if let Some(slot) = self.users.iter_mut().find(|row| row.id == user.id) {
                    *slot = user;
                }
                self.editing = None;
                self.clear_error(RequestKind::Update);
            }
            Err(err) => self.fail(RequestKind::Update, &err),
        }
    }

    /// Removes the deleted record, keeping the order of the rest.
    pub fn apply_delete(&mut self, result: Result<UserId, ApiError>) {
        match result {
            Ok(id) => {
                info!("deleted user {id}");
                self.users.retain(|user| user.id.as_ref() != Some(&id));
                self.clear_error(RequestKind::Delete);
            }
            Err(err) => self.fail(RequestKind::Delete, &err),
        }
    }

    fn fail(&mut self, kind: RequestKind, err: &ApiError) {
        warn!("{}: {err}", kind.failure_message());
        self.error = Some(kind);
    }

    fn clear_error(&mut self, kind: RequestKind) {
        if self.error == Some(kind) {
            self.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> User {
        User::new(name, format!("user{id}@x.com"), "Acme").with_id(UserId::Num(id))
    }

    fn first_page() -> Vec<User> {
        vec![
            user(1, "Leanne Graham"),
            user(2, "Ervin Howell"),
            user(3, "Clementine Bauch"),
            user(4, "Patricia Lebsack"),
            user(5, "Chelsey Dietrich"),
        ]
    }

    fn loaded() -> UserListState {
        let mut state = UserListState::new(&ClientConfig::default());
        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, Ok(first_page())));
        state
    }

    fn ids(state: &UserListState) -> Vec<u64> {
        state
            .users()
            .iter()
            .filter_map(|u| match u.id {
                Some(UserId::Num(id)) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn offline() -> ApiError {
        ApiError::Transport("offline".to_string())
    }

    #[test]
    fn starts_loading_on_page_one() {
        let state = UserListState::new(&ClientConfig::default());
        assert!(state.is_loading());
        assert_eq!(state.page(), 1);
        assert!(state.users().is_empty());
        assert!(state.editing().is_none());
    }

    #[test]
    fn first_page_shows_five_rows_of_two_pages() {
        let state = loaded();
        assert_eq!(state.users().len(), 5);
        assert_eq!(state.page_label(), "Page 1 of 2");
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());
        assert_eq!(state.status(), FetchStatus::Loaded);
    }

    #[test]
    fn next_is_disabled_until_a_page_lands() {
        let mut state = UserListState::new(&ClientConfig::default());
        assert_eq!(state.page_label(), "Page 1 of 1");
        assert!(!state.can_go_next());
        assert_eq!(state.next_page(), None);

        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, Err(offline())));
        assert_eq!(state.page_label(), "Page 1 of 1");
        assert!(!state.can_go_next());

        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, Ok(first_page())));
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page_label(), "Page 1 of 2");
        assert!(state.can_go_next());
    }

    #[test]
    fn navigation_stops_at_both_ends() {
        let mut state = loaded();
        assert_eq!(state.previous_page(), None);

        let ticket = state.next_page().unwrap();
        assert_eq!(ticket.page, 2);
        assert!(state.apply_fetch(ticket, Ok(vec![user(6, "Mrs. Dennis Schulist")])));
        assert!(!state.can_go_next());
        assert_eq!(state.next_page(), None);
        assert!(state.can_go_previous());
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut state = loaded();
        let ticket = state.next_page().unwrap();
        assert!(state.apply_fetch(ticket, Err(offline())));

        assert_eq!(state.error_message(), Some("Failed to fetch users"));
        assert_eq!(state.status(), FetchStatus::Failed);
        assert!(!state.is_loading());
        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn stale_fetch_is_dropped() {
        let mut state = loaded();
        let to_two = state.next_page().unwrap();
        let back_to_one = state.previous_page().unwrap();

        assert!(state.apply_fetch(back_to_one, Ok(first_page())));
        assert!(!state.apply_fetch(to_two, Ok(vec![user(6, "Mrs. Dennis Schulist")])));

        assert_eq!(state.page(), 1);
        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn stale_fetch_does_not_end_loading() {
        let mut state = loaded();
        let to_two = state.next_page().unwrap();
        let _back_to_one = state.previous_page().unwrap();

        state.apply_fetch(to_two, Err(offline()));
        assert!(state.is_loading());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn open_then_cancel_leaves_rows_alone() {
        let mut state = loaded();
        let before = state.users().to_vec();

        state.open_edit(UserId::Num(2)).unwrap();
        state.cancel_edit();
        state.open_add();
        state.cancel_edit();

        assert_eq!(state.users(), before.as_slice());
        assert!(state.editing().is_none());
    }

    #[test]
    fn every_open_gets_a_new_session() {
        let mut state = loaded();
        let first = state.open_edit(UserId::Num(1)).unwrap().token;
        let second = state.open_edit(UserId::Num(1)).unwrap().token;
        assert_ne!(first, second);
    }

    #[test]
    fn edit_of_unknown_id_opens_nothing() {
        let mut state = loaded();
        assert!(state.open_edit(UserId::Num(42)).is_none());
        assert!(state.editing().is_none());
    }

    #[test]
    fn save_from_add_session_is_a_create() {
        let mut state = loaded();
        state.open_add();
        let fields = UserFields {
            id: None,
            name: "Ada Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            company: "Engines".to_string(),
        };
        assert_eq!(
            state.prepare_save(&fields),
            Some(SaveRequest::Create(User::new("Ada Lovelace", "ada@x.com", "Engines")))
        );
    }

    #[test]
    fn save_from_edit_session_is_an_update() {
        let mut state = loaded();
        state.open_edit(UserId::Num(3)).unwrap();
        let fields = UserFields {
            id: Some(UserId::Num(3)),
            name: "Clementine Bauch".to_string(),
            email: "clem@x.com".to_string(),
            company: "Acme".to_string(),
        };
        match state.prepare_save(&fields) {
            Some(SaveRequest::Update(id, user)) => {
                assert_eq!(id, UserId::Num(3));
                assert_eq!(user.email, "clem@x.com");
                assert_eq!(user.id, Some(UserId::Num(3)));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn save_without_open_form_is_ignored() {
        let state = loaded();
        assert_eq!(state.prepare_save(&UserFields::default()), None);
    }

    #[test]
    fn created_user_is_appended_and_form_closes() {
        let mut state = loaded();
        state.open_add();
        state.apply_create(Ok(User::new("Ada Lovelace", "ada@x.com", "Engines").with_id(UserId::Num(11))));

        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5, 11]);
        assert!(state.editing().is_none());
    }

    #[test]
    fn failed_create_keeps_form_open() {
        let mut state = loaded();
        state.open_add();
        state.apply_create(Err(offline()));

        assert_eq!(state.error_message(), Some("Failed to add user"));
        assert!(state.editing().is_some());
        assert_eq!(state.users().len(), 5);
    }

    #[test]
    fn update_replaces_row_in_place() {
        let mut state = loaded();
        state.open_edit(UserId::Num(2)).unwrap();
        state.apply_update(Ok(user(2, "Ervin Howell Jr")));

        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
        assert_eq!(state.users()[1].name, "Ervin Howell Jr");
        assert!(state.editing().is_none());
    }

    #[test]
    fn failed_update_keeps_original_row() {
        let mut state = loaded();
        state.open_edit(UserId::Num(2)).unwrap();
        state.apply_update(Err(ApiError::Status {
            status: 500,
            body: String::new(),
        }));

        assert_eq!(state.error_message(), Some("Failed to update user"));
        assert_eq!(state.users()[1].name, "Ervin Howell");
        assert!(state.editing().is_some());
    }

    #[test]
    fn delete_removes_only_that_row() {
        let mut state = loaded();
        state.apply_delete(Ok(UserId::Num(3)));
        assert_eq!(ids(&state), vec![1, 2, 4, 5]);
    }

    #[test]
    fn failed_delete_keeps_rows() {
        let mut state = loaded();
        state.apply_delete(Err(offline()));
        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
        assert_eq!(state.error_message(), Some("Failed to delete user"));
    }

    #[test]
    fn success_clears_only_its_own_error() {
        let mut state = loaded();
        state.apply_delete(Err(offline()));

        state.apply_create(Ok(user(11, "Ada Lovelace")));
        assert_eq!(state.error_message(), Some("Failed to delete user"));

        state.apply_delete(Ok(UserId::Num(1)));
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn later_failure_overwrites_message() {
        let mut state = loaded();
        state.apply_delete(Err(offline()));
        state.apply_update(Err(offline()));
        assert_eq!(state.error_message(), Some("Failed to update user"));
    }
}
