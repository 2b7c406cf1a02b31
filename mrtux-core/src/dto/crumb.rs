//! Crumb issuer DTOs

use serde::Deserialize;

/// Header the crumb is sent in
pub const CRUMB_HEADER: &str = "Jenkins-Crumb";

/// Body of `GET /crumbIssuer/api/json`
///
/// Jenkins returns more fields (`_class`, `crumbRequestField`); only the
/// crumb itself is read.
#[derive(Debug, Clone, Deserialize)]
pub struct CrumbResponse {
    #[serde(default)]
    pub crumb: Option<String>,
}

/// Anti-forgery token for a single state-changing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub header_name: String,
    pub value: String,
}

impl CsrfToken {
    /// Decode a crumb issuer body
    ///
    /// Malformed JSON, a missing crumb and an empty crumb all mean the same
    /// thing: no token.
    pub fn from_json(body: &str) -> Option<Self> {
        let response: CrumbResponse = serde_json::from_str(body).ok()?;
        response.into_token()
    }
}

impl CrumbResponse {
    /// A crumb that cannot travel as a header value is no token at all
    pub fn into_token(self) -> Option<CsrfToken> {
        let value = self
            .crumb
            .filter(|c| !c.is_empty() && is_header_value(c))?;

        Some(CsrfToken {
            header_name: CRUMB_HEADER.to_string(),
            value,
        })
    }
}

/// Visible ASCII, spaces and tabs only
fn is_header_value(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b == b'\t' || (b' '..=b'~').contains(&b))
}
