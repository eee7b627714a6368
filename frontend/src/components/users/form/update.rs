//! Update function for the user form.
//!
//! Exactly one callback fires per user action: `Submit` emits `on_save` only
//! when validation passes, `Cancel` always emits `on_cancel`.

use log::debug;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UserFormComponent;

pub fn update(component: &mut UserFormComponent, ctx: &Context<UserFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Edit { name, value } => component.form.set_field_by_name(&name, value),
        Msg::Submit => {
            match component.form.submit() {
                Ok(fields) => ctx.props().on_save.emit(fields),
                Err(err) => debug!("form not submitted: {err:?}"),
            }
            true
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}
