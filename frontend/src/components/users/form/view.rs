//! View for the user form: three labelled inputs, the validation message and
//! the Save / Cancel buttons.
//!
//! Inputs report edits by their `name` attribute, so one callback serves all
//! three; the form state ignores names it does not know.

use common::model::user_form::FormField;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UserFormComponent;

pub fn view(component: &UserFormComponent, ctx: &Context<UserFormComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="user-form" {onsubmit}>
            { build_input(component, link, FormField::Name, "Name:", "text") }
            { build_input(component, link, FormField::Email, "Email:", "email") }
            { build_input(component, link, FormField::Company, "Department:", "text") }
            {
                if let Some(error) = component.form.error() {
                    html! { <div class="form-error">{ error }</div> }
                } else {
                    html! {}
                }
            }
            <button type="submit">{ "Save" }</button>
            <button type="button" onclick={link.callback(|_| Msg::Cancel)}>{ "Cancel" }</button>
        </form>
    }
}

fn build_input(
    component: &UserFormComponent,
    link: &Scope<UserFormComponent>,
    field: FormField,
    label: &'static str,
    input_type: &'static str,
) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit {
            name: input.name(),
            value: input.value(),
        }
    });

    html! {
        <div>
            <label>{ label }</label>
            <input
                type={input_type}
                name={field.as_str()}
                value={component.form.value(field).to_string()}
                {oninput}
            />
        </div>
    }
}
