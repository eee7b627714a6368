//! `UsersApi` over `fetch`, via `gloo-net`.
//!
//! Every call clones what it needs out of `self` up front so the returned
//! future is `'static` and can be handed straight to `spawn_local`.
//! Non-2xx answers are turned into `ApiError::Status` with the body text
//! attached for the console log.

use std::rc::Rc;

use common::api::{ApiError, ApiFuture, UsersApi};
use common::config::ClientConfig;
use common::model::user::{User, UserId};
use common::requests::ListUsersQuery;
use futures_util::FutureExt;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

pub struct HttpUsersApi {
    config: Rc<ClientConfig>,
}

impl HttpUsersApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl UsersApi for HttpUsersApi {
    fn list(&self, page: u32) -> ApiFuture<Vec<User>> {
        let url = self.config.users_url();
        let query = ListUsersQuery::new(page, self.config.page_size);
        async move {
            let response = Request::get(&url)
                .query(query.pairs())
                .send()
                .await
                .map_err(transport)?;
            decode(ensure_success(response).await?).await
        }
        .boxed_local()
    }

    fn create(&self, user: &User) -> ApiFuture<User> {
        let url = self.config.users_url();
        let body = user.clone();
        async move {
            let request = Request::post(&url)
                .json(&body)
                .map_err(|err| ApiError::Encode(err.to_string()))?;
            let response = request.send().await.map_err(transport)?;
            decode(ensure_success(response).await?).await
        }
        .boxed_local()
    }

    fn update(&self, id: UserId, user: &User) -> ApiFuture<()> {
        let url = self.config.user_url(&id);
        let body = user.clone();
        async move {
            let request = Request::put(&url)
                .json(&body)
                .map_err(|err| ApiError::Encode(err.to_string()))?;
            let response = request.send().await.map_err(transport)?;
            ensure_success(response).await.map(|_| ())
        }
        .boxed_local()
    }

    fn delete(&self, id: UserId) -> ApiFuture<()> {
        let url = self.config.user_url(&id);
        async move {
            let response = Request::delete(&url).send().await.map_err(transport)?;
            ensure_success(response).await.map(|_| ())
        }
        .boxed_local()
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    Err(ApiError::Status {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
