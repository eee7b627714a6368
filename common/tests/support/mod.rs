//! In-memory stand-in for the remote users API.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use common::api::{ApiError, ApiFuture, RequestKind, UsersApi};
use common::model::user::{User, UserId};
use futures_util::FutureExt;
use futures_util::future::ready;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(u32),
    Create(User),
    Update(UserId, User),
    Delete(UserId),
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
    page_size: usize,
    failing: HashSet<RequestKind>,
    calls: Vec<Call>,
}

/// Behaves like json-server: pages are slices of a backing vector and
/// created records get the next free id.
#[derive(Clone, Default)]
pub struct FakeUsersApi {
    inner: Rc<RefCell<Inner>>,
}

impl FakeUsersApi {
    pub fn with_users(count: u64) -> Self {
        let users = (1..=count)
            .map(|id| {
                User::new(format!("First{id} Last{id}"), format!("user{id}@x.com"), "Acme")
                    .with_id(UserId::Num(id))
            })
            .collect();
        Self {
            inner: Rc::new(RefCell::new(Inner {
                users,
                next_id: count + 1,
                page_size: 5,
                ..Inner::default()
            })),
        }
    }

    pub fn fail(&self, kind: RequestKind) {
        self.inner.borrow_mut().failing.insert(kind);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: Call, kind: RequestKind) -> Result<(), ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(call);
        if inner.failing.contains(&kind) {
            return Err(ApiError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

impl UsersApi for FakeUsersApi {
    fn list(&self, page: u32) -> ApiFuture<Vec<User>> {
        let result = self.record(Call::List(page), RequestKind::Fetch).map(|()| {
            let inner = self.inner.borrow();
            inner
                .users
                .iter()
                .skip((page as usize).saturating_sub(1) * inner.page_size)
                .take(inner.page_size)
                .cloned()
                .collect()
        });
        ready(result).boxed_local()
    }

    fn create(&self, user: &User) -> ApiFuture<User> {
        let result = self
            .record(Call::Create(user.clone()), RequestKind::Create)
            .map(|()| {
                let mut inner = self.inner.borrow_mut();
                let created = user.clone().with_id(UserId::Num(inner.next_id));
                inner.next_id += 1;
                created
            });
        ready(result).boxed_local()
    }

    fn update(&self, id: UserId, user: &User) -> ApiFuture<()> {
        let result = self.record(Call::Update(id, user.clone()), RequestKind::Update);
        ready(result).boxed_local()
    }

    fn delete(&self, id: UserId) -> ApiFuture<()> {
        let result = self.record(Call::Delete(id), RequestKind::Delete);
        ready(result).boxed_local()
    }
}
