//! Client seam for the remote users API.
//!
//! The UI never talks HTTP directly: it holds a `UsersApi` and spawns the
//! futures it returns. The browser build plugs in a `gloo-net` client, tests
//! plug in an in-memory double.

mod error;

use futures_util::future::LocalBoxFuture;

use crate::model::user::{User, UserId};

pub use error::{ApiError, RequestKind};

/// Future returned by every `UsersApi` call.
///
/// `'static` so the frontend can hand it to `spawn_local` without borrowing
/// the component; `Local` because browser futures are not `Send`.
pub type ApiFuture<T> = LocalBoxFuture<'static, Result<T, ApiError>>;

pub trait UsersApi {
    /// Fetches one 1-based page of users, in server order.
    fn list(&self, page: u32) -> ApiFuture<Vec<User>>;

    /// Creates a user and returns the record as the server echoed it back,
    /// usually with a freshly assigned id.
    fn create(&self, user: &User) -> ApiFuture<User>;

    /// Replaces the user stored under `id`. The response body is ignored.
    fn update(&self, id: UserId, user: &User) -> ApiFuture<()>;

    fn delete(&self, id: UserId) -> ApiFuture<()>;
}
