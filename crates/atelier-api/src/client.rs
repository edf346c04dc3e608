//! Project store HTTP client
//!
//! Provides a typed HTTP client for the Atelier project store API. Handles
//! request signing (bearer token), endpoint construction, JSON
//! deserialization, and the mapping of every failure into
//! [`TransportError`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use atelier_api::client::StoreClient;
//! use atelier_core::domain::ProjectId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StoreClient::new("https://api.atelier.dev/v2", "access-token");
//! let project = ProjectId::new("proj-42")?;
//! let tree = client.project_tree(&project).await?;
//! println!("{} entries", tree.len());
//! # Ok(())
//! # }
//! ```

use atelier_core::domain::newtypes::{ProjectId, ProjectPath};
use atelier_core::domain::node::RemoteNode;
use atelier_core::ports::project_store::{ProjectStore, TransportError};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// Store API response types
// ============================================================================

/// Response from `GET /projects/{id}/tree`
#[derive(Debug, Deserialize)]
struct TreeResponse {
    /// Flat list of every entry in the project
    nodes: Vec<TreeNode>,
}

/// A single entry of the tree listing
#[derive(Debug, Deserialize)]
struct TreeNode {
    /// Project-relative path with `/` separators
    path: String,
    /// `"file"` or `"directory"`
    #[serde(rename = "type")]
    node_type: String,
    /// Store-assigned version counter; absent for directories
    version: Option<u64>,
}

// ============================================================================
// StoreClient
// ============================================================================

/// HTTP client for the Atelier project store
///
/// Wraps `reqwest::Client` with bearer-token signing and base URL
/// construction. A client built without a token cannot sign requests and
/// reports [`TransportError::UnableToSign`] for every call.
pub struct StoreClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// Bearer token used to sign requests
    access_token: Option<String>,
}

impl StoreClient {
    /// Creates a new client signing requests with `access_token`
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: Some(access_token.into()),
        }
    }

    /// Creates a client without credentials
    ///
    /// Every request will fail with [`TransportError::UnableToSign`] until
    /// [`set_access_token`](StoreClient::set_access_token) is called.
    pub fn unauthenticated(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: None,
        }
    }

    /// Updates the access token (e.g., after a token refresh)
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
        debug!("Updated StoreClient access token");
    }

    /// Builds the URL for the given path segments under the base URL
    ///
    /// Segments are percent-encoded individually, so project paths with
    /// spaces or unicode survive the trip.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| TransportError::Client {
            message: format!("Invalid store base URL: {e}"),
        })?;
        {
            let mut parts = url.path_segments_mut().map_err(|_| TransportError::Client {
                message: "Store base URL cannot carry path segments".to_string(),
            })?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    /// Creates a signed request builder for the given method and segments
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, TransportError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(TransportError::UnableToSign)?;
        let url = self.endpoint(segments)?;
        Ok(self.client.request(method, url).bearer_auth(token))
    }

    /// Sends a request and classifies connectivity and HTTP-status failures
    async fn send(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        let response = builder.send().await.map_err(map_send_error)?;
        check_status(response).await
    }

    /// Fetches the full tree listing of a project
    pub async fn project_tree(
        &self,
        project: &ProjectId,
    ) -> Result<Vec<RemoteNode>, TransportError> {
        debug!(project = %project, "Fetching project tree");

        let request = self.request(Method::GET, &["projects", project.as_str(), "tree"])?;
        let tree: TreeResponse =
            self.send(request)
                .await?
                .json()
                .await
                .map_err(|e| TransportError::Client {
                    message: format!("Failed to parse tree response: {e}"),
                })?;

        let mut nodes = Vec::with_capacity(tree.nodes.len());
        for entry in tree.nodes {
            match parse_tree_node(entry) {
                Some(node) => nodes.push(node),
                None => warn!("Skipping malformed tree entry"),
            }
        }

        debug!(count = nodes.len(), "Project tree fetched");
        Ok(nodes)
    }

    /// Fetches the raw bytes of one project file
    pub async fn project_file(
        &self,
        project: &ProjectId,
        path: &ProjectPath,
    ) -> Result<Vec<u8>, TransportError> {
        debug!(project = %project, path = %path, "Fetching project file");

        let mut segments = vec!["projects", project.as_str(), "files"];
        segments.extend(path.components());

        let request = self.request(Method::GET, &segments)?;
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(map_send_error)?;

        debug!(bytes = bytes.len(), path = %path, "Project file fetched");
        Ok(bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl ProjectStore for StoreClient {
    async fn fetch_project_tree(
        &self,
        project: &ProjectId,
    ) -> Result<Vec<RemoteNode>, TransportError> {
        self.project_tree(project).await
    }

    async fn fetch_project_file(
        &self,
        project: &ProjectId,
        path: &ProjectPath,
    ) -> Result<Vec<u8>, TransportError> {
        self.project_file(project, path).await
    }
}

/// Maps a `reqwest` transport failure into the closed error set
fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() {
        TransportError::NoNetwork
    } else {
        TransportError::Client {
            message: err.to_string(),
        }
    }
}

/// Turns non-success HTTP statuses into classified errors
///
/// Uses the response body as the message when the store provides one.
async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        status.to_string()
    } else {
        body
    };

    if status.is_server_error() {
        Err(TransportError::Server { message })
    } else {
        Err(TransportError::Client { message })
    }
}

/// Maps one tree entry into a domain node, or `None` when malformed
fn parse_tree_node(entry: TreeNode) -> Option<RemoteNode> {
    let path = ProjectPath::new(entry.path).ok()?;
    match entry.node_type.as_str() {
        "file" => Some(RemoteNode::file(path, entry.version?)),
        // Directories carry no version; the store omits the field.
        "directory" => Some(RemoteNode::directory(path, entry.version.unwrap_or(0))),
        _ => None,
    }
}
