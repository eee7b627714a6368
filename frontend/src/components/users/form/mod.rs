//! Inline form for adding or editing one user.
//!
//! Holds its own edit state, seeded from the `user` prop and re-seeded each
//! time the owning list opens a new edit session.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UserFormProps;
pub use state::UserFormComponent;

impl Component for UserFormComponent {
    type Message = Msg;
    type Properties = UserFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        UserFormComponent::new(&props.user, props.session)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.sync(&props.user, props.session)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
