//! View for the users table.
//!
//! Layout, top to bottom: the error line (if any), then either the loading
//! notice or the Add button, the inline form, the table and the pagination
//! bar. The form receives the edit session token and re-seeds itself when
//! the token changes.

use common::format::split_name;
use common::model::user::User;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UserListComponent;
use crate::components::users::form::UserFormComponent;

pub fn view(component: &UserListComponent, ctx: &Context<UserListComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="user-list">
            {
                if let Some(message) = component.list.error_message() {
                    html! { <p class="error">{ message }</p> }
                } else {
                    html! {}
                }
            }
            {
                if component.list.is_loading() {
                    html! { <p>{ "Loading users..." }</p> }
                } else {
                    html! {
                        <>
                            <button class="add-button" onclick={link.callback(|_| Msg::OpenAdd)}>
                                { "Add User" }
                            </button>
                            { build_editor(component, link) }
                            { build_table(component, link) }
                            { build_pagination(component, link) }
                        </>
                    }
                }
            }
        </div>
    }
}

/// Inline form for the open edit session, nothing when no session is open.
fn build_editor(component: &UserListComponent, link: &Scope<UserListComponent>) -> Html {
    match component.list.editing() {
        Some(session) => html! {
            <UserFormComponent
                user={session.user.clone()}
                session={session.token}
                on_save={link.callback(Msg::Save)}
                on_cancel={link.callback(|_| Msg::CancelEdit)}
            />
        },
        None => html! {},
    }
}

fn build_table(component: &UserListComponent, link: &Scope<UserListComponent>) -> Html {
    html! {
        <table>
            <thead>
                <tr>
                    <th>{ "ID" }</th>
                    <th>{ "First Name" }</th>
                    <th>{ "Last Name" }</th>
                    <th>{ "Email" }</th>
                    <th>{ "Department" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for component.list.users().iter().map(|user| build_row(user, link)) }
            </tbody>
        </table>
    }
}

/// One table row. Records without an id cannot be edited or deleted.
fn build_row(user: &User, link: &Scope<UserListComponent>) -> Html {
    let (first, last) = split_name(&user.name);
    let id_text = user.id.as_ref().map(ToString::to_string).unwrap_or_default();

    let (on_edit, on_delete) = match &user.id {
        Some(id) => {
            let edit_id = id.clone();
            let delete_id = id.clone();
            (
                link.callback(move |_| Msg::OpenEdit(edit_id.clone())),
                link.callback(move |_| Msg::Delete(delete_id.clone())),
            )
        }
        None => (Callback::noop(), Callback::noop()),
    };

    html! {
        <tr>
            <td>{ id_text }</td>
            <td>{ first.to_string() }</td>
            <td>{ last.to_string() }</td>
            <td>{ user.email.clone() }</td>
            <td>{ user.company.name.clone() }</td>
            <td>
                <button class="edit-button" disabled={user.id.is_none()} onclick={on_edit}>
                    { "Edit" }
                </button>
                <button class="delete-button" disabled={user.id.is_none()} onclick={on_delete}>
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn build_pagination(component: &UserListComponent, link: &Scope<UserListComponent>) -> Html {
    html! {
        <div class="pagination">
            <button
                disabled={!component.list.can_go_previous()}
                onclick={link.callback(|_| Msg::PreviousPage)}
            >
                { "Previous" }
            </button>
            <span>{ component.list.page_label() }</span>
            <button
                disabled={!component.list.can_go_next()}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                { "Next" }
            </button>
        </div>
    }
}
