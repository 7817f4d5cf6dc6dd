//! Request construction against a configured base URL.

use url::Url;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest};
use crate::query::Query;

/// Route serving question lists.
pub const QUESTION_ROUTE: &str = "api.php";

/// Route serving token commands.
pub const TOKEN_ROUTE: &str = "api_token.php";

/// Resolves routes against a base URL and produces GET requests.
///
/// Holds no mutable state; cloning it is how sub-services share the request
/// configuration.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
    question_route: String,
    token_route: String,
}

impl RequestBuilder {
    /// Builder for the default routes under `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_routes(base_url, QUESTION_ROUTE, TOKEN_ROUTE)
    }

    /// A trailing slash is appended to `base_url` when missing so that
    /// resolving a relative route keeps the base path.
    pub fn with_routes(base_url: &str, question_route: &str, token_route: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::MalformedRoute(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }
        Ok(Self {
            base_url,
            question_route: question_route.to_string(),
            token_route: token_route.to_string(),
        })
    }

    pub fn question_request(&self, query: &Query) -> Result<HttpRequest> {
        self.build(&self.question_route, query)
    }

    pub fn token_request(&self, query: &Query) -> Result<HttpRequest> {
        self.build(&self.token_route, query)
    }

    /// Resolve `route` against the base URL and replace its query with
    /// `query`, percent-encoded.
    pub fn build(&self, route: &str, query: &Query) -> Result<HttpRequest> {
        let mut url = self
            .base_url
            .join(route)
            .map_err(|e| ApiError::MalformedRoute(format!("{route}: {e}")))?;
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
        })
    }
}
