use crate::api::client::{ApiError, HttpStudioClient, StudioApi};
use crate::storage::config::Config;
use crate::studio::{Client, ClientPortal, NewClient, Shoot};

#[derive(Debug, Clone, PartialEq)]
pub enum CreateClientOutcome {
    /// Nothing was sent because the name was blank.
    Skipped,
    Created(Option<Client>),
}

/// Page-level access to the studio API.
///
/// Listings fall back to an empty list and the portal to `None` when the API
/// fails; only client creation reports errors to the caller.
pub struct StudioService<A> {
    api: A,
}

impl StudioService<HttpStudioClient> {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::new(HttpStudioClient::from_config(&config.api)?))
    }
}

impl<A: StudioApi> StudioService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn clients(&self) -> Vec<Client> {
        match self.api.list_clients().await {
            Ok(clients) => clients,
            Err(e) => {
                tracing::warn!("Failed to load clients: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn shoots(&self) -> Vec<Shoot> {
        match self.api.list_shoots().await {
            Ok(shoots) => shoots,
            Err(e) => {
                tracing::warn!("Failed to load shoots: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn create_client(
        &self,
        name: &str,
        email: Option<&str>,
    ) -> Result<CreateClientOutcome, ApiError> {
        let Some(new_client) = NewClient::from_input(name, email) else {
            tracing::debug!("Skipping client creation: blank name");
            return Ok(CreateClientOutcome::Skipped);
        };

        let created = self.api.create_client(&new_client).await?;
        Ok(CreateClientOutcome::Created(created))
    }

    pub async fn portal(&self, token: &str) -> Option<ClientPortal> {
        match self.api.fetch_portal(token).await {
            Ok(portal) => Some(portal),
            Err(e) => {
                tracing::warn!("Portal lookup failed: {}", e);
                None
            }
        }
    }
}
