use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument};

use super::dto::{RemoteUser, RemoteWriteAck};
use crate::domain::UserFields;
use crate::error::RemoteError;

/// The four operations the dashboard performs against the remote collection.
///
/// Kept behind a trait so controller tests can script the collaborator
/// instead of standing up HTTP.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list(&self) -> Result<Vec<RemoteUser>, RemoteError>;
    async fn create(&self, fields: &UserFields) -> Result<RemoteWriteAck, RemoteError>;
    async fn update(&self, id: u64, fields: &UserFields) -> Result<RemoteWriteAck, RemoteError>;
    async fn delete(&self, id: u64) -> Result<(), RemoteError>;
}

/// reqwest-backed client for the remote user collection.
#[derive(Debug, Clone)]
pub struct RemoteUserClient {
    client: Client,
    base_url: String,
}

impl RemoteUserClient {
    /// Creates a client for the given collection URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }

    fn checked(response: Response) -> Result<Response, RemoteError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(RemoteError::Status(response.status()))
        }
    }
}

#[async_trait]
impl UserApi for RemoteUserClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<RemoteUser>, RemoteError> {
        debug!("Sending request");
        let response = Self::checked(self.client.get(&self.base_url).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, fields))]
    async fn create(&self, fields: &UserFields) -> Result<RemoteWriteAck, RemoteError> {
        debug!("Sending request");
        let response =
            Self::checked(self.client.post(&self.base_url).json(fields).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: u64, fields: &UserFields) -> Result<RemoteWriteAck, RemoteError> {
        debug!("Sending request");
        let response =
            Self::checked(self.client.put(self.item_url(id)).json(fields).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> Result<(), RemoteError> {
        debug!("Sending request");
        Self::checked(self.client.delete(self.item_url(id)).send().await?)?;
        Ok(())
    }
}
