//! The backing-store transport.
//!
//! [`RecordSource`] is the seam between the query layer and the network:
//! given a [`Filter`], return the matching cars in store order.
//! [`PostgrestStore`] is the production implementation against a Supabase /
//! PostgREST table endpoint.

use std::future::Future;

use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::car::Car;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::query::Filter;

pub trait RecordSource: Send + Sync {
    fn fetch(&self, filter: &Filter) -> impl Future<Output = Result<Vec<Car>>> + Send;
}

/// Read-only client for one PostgREST table.
///
/// Every request carries the anon key twice, as `apikey` and as a bearer
/// token, which is what Supabase's API gateway expects. There is no timeout
/// and no retry: a failed fetch fails the inbound request.
#[derive(Clone, Debug)]
pub struct PostgrestStore {
    client: Client,
    url: String,
    api_key: String,
}

impl PostgrestStore {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.store_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl RecordSource for PostgrestStore {
    async fn fetch(&self, filter: &Filter) -> Result<Vec<Car>> {
        debug!(%filter, "querying backing store");

        let response = self
            .client
            .get(&self.url)
            .query(&[(filter.key, filter.value.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(Error::Transport)?;
        let cars: Vec<Car> = serde_json::from_slice(&body)?;

        debug!(count = cars.len(), "backing store answered");
        Ok(cars)
    }
}
