use crate::domain::model::RepositoryRecord;
use crate::domain::ports::RepositorySource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::{header, Client};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Results requested in the single listing page.
pub const PAGE_SIZE: u32 = 100;

const USER_AGENT: &str = concat!("pages-portfolio/", env!("CARGO_PKG_VERSION"));

/// Client shared by the listing request and remote icon downloads. GitHub
/// rejects API requests that carry no user agent.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Public repository listing of one account, unauthenticated.
pub struct GithubSource {
    client: Client,
    api_base: String,
    owner: String,
}

impl GithubSource {
    pub fn new(api_base: &str, owner: &str) -> Result<Self> {
        Ok(Self::with_client(http_client()?, api_base, owner))
    }

    pub fn with_client(client: Client, api_base: &str, owner: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
        }
    }

    pub fn listing_url(&self) -> String {
        format!("{}/users/{}/repos", self.api_base, self.owner)
    }
}

#[async_trait]
impl RepositorySource for GithubSource {
    async fn fetch_repositories(&self) -> Result<Vec<RepositoryRecord>> {
        let url = self.listing_url();
        tracing::debug!("Making API request to: {}?per_page={}", url, PAGE_SIZE);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .query(&[("per_page", PAGE_SIZE)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(PortfolioError::StatusError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<RepositoryRecord> = serde_json::from_slice(&body)?;
        tracing::debug!("Received {} repositories", records.len());
        Ok(records)
    }
}
