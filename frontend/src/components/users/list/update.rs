//! Update function for the users table.
//!
//! Request messages (`FetchPage`, `Save`, `Delete`, ...) ask the state what to
//! send, spawn the call and return. Outcome messages (`PageLoaded`,
//! `Created`, ...) hand the result to the state. Nothing here retries, times
//! out or cancels; stale page responses are dropped by the state itself.

use common::model::user::UserId;
use common::model::user_list::{FetchTicket, SaveRequest};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UserListComponent;

pub fn update(component: &mut UserListComponent, ctx: &Context<UserListComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FetchPage => {
            let ticket = component.list.begin_fetch();
            spawn_fetch(ctx, ticket);
            true
        }
        Msg::PreviousPage => match component.list.previous_page() {
            Some(ticket) => {
                spawn_fetch(ctx, ticket);
                true
            }
            None => false,
        },
        Msg::NextPage => match component.list.next_page() {
            Some(ticket) => {
                spawn_fetch(ctx, ticket);
                true
            }
            None => false,
        },
        Msg::PageLoaded(ticket, result) => component.list.apply_fetch(ticket, result),
        Msg::OpenAdd => {
            component.list.open_add();
            true
        }
        Msg::OpenEdit(id) => component.list.open_edit(id).is_some(),
        Msg::CancelEdit => {
            component.list.cancel_edit();
            true
        }
        Msg::Save(fields) => {
            let Some(request) = component.list.prepare_save(&fields) else {
                return false;
            };
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match request {
                    SaveRequest::Create(user) => {
                        let result = api.create(&user).await;
                        link.send_message(Msg::Created(result));
                    }
                    SaveRequest::Update(id, user) => {
                        let result = api.update(id, &user).await.map(|()| user);
                        link.send_message(Msg::Updated(result));
                    }
                }
            });
            false
        }
        Msg::Created(result) => {
            component.list.apply_create(result);
            true
        }
        Msg::Updated(result) => {
            component.list.apply_update(result);
            true
        }
        Msg::Delete(id) => {
            spawn_delete(ctx, id);
            false
        }
        Msg::Deleted(result) => {
            component.list.apply_delete(result);
            true
        }
    }
}

fn spawn_fetch(ctx: &Context<UserListComponent>, ticket: FetchTicket) {
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.list(ticket.page).await;
        link.send_message(Msg::PageLoaded(ticket, result));
    });
}

fn spawn_delete(ctx: &Context<UserListComponent>, id: UserId) {
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.delete(id.clone()).await.map(|()| id);
        link.send_message(Msg::Deleted(result));
    });
}
