//! Properties for `UserFormComponent`.

use common::model::user::User;
use common::model::user_form::UserFields;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserFormProps {
    /// Record the form is seeded from. Empty for a new user.
    pub user: User,

    /// Edit session this form belongs to. The owning list bumps it on every
    /// open; a new value re-seeds the inputs from `user`, dropping any
    /// unsaved edits.
    pub session: u64,

    /// Receives the validated fields plus the id of the seeded record.
    pub on_save: Callback<UserFields>,

    pub on_cancel: Callback<()>,
}
