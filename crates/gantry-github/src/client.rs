//! GitHub REST client

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::error::{GitHubError, Result};
use crate::types::{Card, Column, CommitRange, CommitRecord, Membership, PullRequestDetail};

/// Project boards are still behind the inertia preview media type
const ACCEPT_PREVIEW: &str = "application/vnd.github.inertia-preview+json";

/// Largest page size the commits endpoint allows
const PER_PAGE: usize = 100;

/// Operations the changelog pipeline needs from GitHub
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// List the columns of a project board
    async fn project_columns(&self, project_id: u64) -> Result<Vec<Column>>;

    /// List the cards in a column, in board order
    async fn column_cards(&self, column_id: u64) -> Result<Vec<Card>>;

    /// Fetch the issue or pull request a card points at
    async fn issue_detail(&self, content_url: &str) -> Result<PullRequestDetail>;

    /// Commit history of `repo` (`owner/name`) within `range`
    async fn commits(&self, repo: &str, range: &CommitRange) -> Result<Vec<CommitRecord>>;

    /// Whether `username` belongs to `org`. 404 is `NotMember`, not an error.
    async fn org_membership(&self, org: &str, username: &str) -> Result<Membership>;
}

/// reqwest-backed GitHub client
pub struct GitHubClient {
    /// HTTP client with auth and media-type headers preset
    client: Client,

    /// API base URL, without trailing slash
    api_url: String,
}

impl GitHubClient {
    /// Create a new client for `api_url` authenticating with `token`
    pub fn new(api_url: impl Into<String>, token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| GitHubError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_PREVIEW));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gantry/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// GET `url` and decode the JSON body, failing on non-success status
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::ApiError {
                status: status.as_u16(),
                message: api_message(status, &message),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| GitHubError::Malformed {
            url: url.to_string(),
            source,
        })
    }
}

/// Prefer GitHub's `message` field over the raw body
fn api_message(status: StatusCode, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

/// A page shorter than `per_page` ends the history
fn is_last_page(len: usize) -> bool {
    len < PER_PAGE
}

/// 204 and 404 are answers; every other status is a failed check
fn membership_from_status(status: StatusCode) -> Option<Membership> {
    match status {
        StatusCode::NO_CONTENT => Some(Membership::Member),
        StatusCode::NOT_FOUND => Some(Membership::NotMember),
        _ => None,
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    #[instrument(skip(self))]
    async fn project_columns(&self, project_id: u64) -> Result<Vec<Column>> {
        let url = self.endpoint(&format!("/projects/{}/columns", project_id));
        let columns: Vec<Column> = self.get_json(&url, &[]).await?;
        info!(count = columns.len(), "fetched project columns");
        Ok(columns)
    }

    #[instrument(skip(self))]
    async fn column_cards(&self, column_id: u64) -> Result<Vec<Card>> {
        let url = self.endpoint(&format!("/projects/columns/{}/cards", column_id));
        let cards: Vec<Card> = self.get_json(&url, &[]).await?;
        info!(count = cards.len(), "fetched column cards");
        Ok(cards)
    }

    #[instrument(skip(self))]
    async fn issue_detail(&self, content_url: &str) -> Result<PullRequestDetail> {
        self.get_json(content_url, &[]).await
    }

    #[instrument(skip(self, range), fields(since = %range.since, until = ?range.until))]
    async fn commits(&self, repo: &str, range: &CommitRange) -> Result<Vec<CommitRecord>> {
        let url = self.endpoint(&format!("/repos/{}/commits", repo));
        let since = range.since.to_rfc3339();

        if let Some(until) = range.until {
            let query = [("since", since), ("until", until.to_rfc3339())];
            let commits: Vec<CommitRecord> = self.get_json(&url, &query).await?;
            info!(count = commits.len(), "fetched commits");
            return Ok(commits);
        }

        let mut commits = Vec::new();
        let mut page = 1usize;
        loop {
            let query = [
                ("since", since.clone()),
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ];
            let batch: Vec<CommitRecord> = self.get_json(&url, &query).await?;
            let last = is_last_page(batch.len());
            debug!(page, count = batch.len(), "fetched commit page");
            commits.extend(batch);

            if last {
                break;
            }
            page += 1;
        }

        info!(count = commits.len(), pages = page, "fetched paginated commits");
        Ok(commits)
    }

    #[instrument(skip(self))]
    async fn org_membership(&self, org: &str, username: &str) -> Result<Membership> {
        let url = self.endpoint(&format!("/orgs/{}/members/{}", org, username));
        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if let Some(membership) = membership_from_status(status) {
            return Ok(membership);
        }

        let message = response.text().await.unwrap_or_default();
        Err(GitHubError::ApiError {
            status: status.as_u16(),
            message: api_message(status, &message),
        })
    }
}
