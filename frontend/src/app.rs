use common::config::ClientConfig;
use yew::{html, Component, Context, Html};

use crate::api::{ApiHandle, HttpUsersApi};
use crate::components::users::list::UserListComponent;

pub struct App {
    config: ClientConfig,
    api: ApiHandle,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ClientConfig::default();
        log::info!("users API at {}", config.users_url());
        Self {
            api: ApiHandle::new(HttpUsersApi::new(config.clone())),
            config,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <UserListComponent api={self.api.clone()} config={self.config.clone()} />
            </div>
        }
    }
}
