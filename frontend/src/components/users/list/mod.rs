//! Users table: paginated listing with inline add / edit and delete.
//!
//! The component is a thin shell around `UserListState`. `update` turns
//! messages into state transitions and spawns the matching `UsersApi` call;
//! the call's outcome comes back as another message.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UserListProps;
pub use state::UserListComponent;

impl Component for UserListComponent {
    type Message = Msg;
    type Properties = UserListProps;

    fn create(ctx: &Context<Self>) -> Self {
        UserListComponent::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::FetchPage);
        }
    }
}
