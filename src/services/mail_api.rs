//! Backend API client.
//!
//! [`MailApi`] is the seam between the controller and the network. The
//! production implementation, [`HttpMailApi`], speaks JSON over HTTP to the
//! `/emails` endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::domain::{Email, EmailId, EmailUpdate, Mailbox, OutgoingEmail, ServerNotice};
use crate::error::{ClientError, Result};

/// Operations the client needs from the mail backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailApi: Send + Sync {
    /// `GET /emails/{mailbox}`.
    async fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>>;

    /// `GET /emails/{id}`.
    async fn get_email(&self, id: EmailId) -> Result<Email>;

    /// `PUT /emails/{id}` with a single-flag update.
    async fn update_email(&self, id: EmailId, update: EmailUpdate) -> Result<()>;

    /// `POST /emails`.
    ///
    /// Validation failures come back as `Ok(ServerNotice::Error(..))`; only
    /// transport problems and unreadable responses are `Err`.
    async fn send_email(&self, email: OutgoingEmail) -> Result<ServerNotice>;
}

/// [`MailApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpMailApi {
    client: Client,
    base_url: Url,
}

impl HttpMailApi {
    /// Create a client rooted at `base_url`.
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self> {
        // Url::join drops the last segment of a base without a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            Url::parse(&config.base_url)?,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// The root every request path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let response = ensure_success("GET", response)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MailApi for HttpMailApi {
    async fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>> {
        self.get_json(&format!("emails/{}", mailbox.as_str())).await
    }

    async fn get_email(&self, id: EmailId) -> Result<Email> {
        self.get_json(&format!("emails/{id}")).await
    }

    async fn update_email(&self, id: EmailId, update: EmailUpdate) -> Result<()> {
        let url = self.endpoint(&format!("emails/{id}"))?;
        tracing::debug!(%url, ?update, "PUT");

        let response = self.client.put(url).json(&update).send().await?;
        ensure_success("PUT", response)?;
        Ok(())
    }

    async fn send_email(&self, email: OutgoingEmail) -> Result<ServerNotice> {
        let url = self.endpoint("emails")?;
        tracing::debug!(%url, recipients = %email.recipients, "POST");

        let response = self.client.post(url).json(&email).send().await?;
        let status = response.status();
        let request_url = response.url().to_string();
        let body = response.text().await?;

        // The backend reports validation failures as `{"error": ..}` with a 4xx status.
        match serde_json::from_str::<ServerNotice>(&body) {
            Ok(notice) => Ok(notice),
            Err(_) if !status.is_success() => Err(ClientError::Status {
                method: "POST",
                url: request_url,
                status: status.as_u16(),
            }),
            Err(err) => Err(err.into()),
        }
    }
}

fn ensure_success(method: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status {
            method,
            url: response.url().to_string(),
            status: status.as_u16(),
        })
    }
}
