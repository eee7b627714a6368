//! Properties for `UserListComponent`.

use common::config::ClientConfig;
use yew::prelude::*;

use crate::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct UserListProps {
    /// Client every request goes through.
    pub api: ApiHandle,

    /// Page size and the assumed record total used for page math. Must match
    /// the configuration `api` was built with.
    #[prop_or_default]
    pub config: ClientConfig,
}
