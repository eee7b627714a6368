mod http;

use std::ops::Deref;
use std::rc::Rc;

use common::api::UsersApi;

pub use http::HttpUsersApi;

/// Shared handle to the `UsersApi` implementation passed down as a prop.
///
/// Two handles are equal when they point at the same client, which is all
/// Yew needs to decide whether props changed.
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn UsersApi>);

impl ApiHandle {
    pub fn new(api: impl UsersApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Deref for ApiHandle {
    type Target = dyn UsersApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
