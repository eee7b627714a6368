use common::api::ApiError;
use common::model::user::{User, UserId};
use common::model::user_form::UserFields;
use common::model::user_list::FetchTicket;

pub enum Msg {
    FetchPage,
    PreviousPage,
    NextPage,
    PageLoaded(FetchTicket, Result<Vec<User>, ApiError>),
    OpenAdd,
    OpenEdit(UserId),
    CancelEdit,
    Save(UserFields),
    Created(Result<User, ApiError>),
    Updated(Result<User, ApiError>),
    Delete(UserId),
    Deleted(Result<UserId, ApiError>),
}
