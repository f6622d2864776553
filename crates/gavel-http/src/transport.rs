//! HTTP transport implementation.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, instrument, trace};

use gavel_core::error::{Error, StatusCode, StatusError, TransportError};
use gavel_core::messages::StatusBody;
use gavel_core::traits::Transport;
use gavel_core::types::ServerUrl;

/// HTTP-backed [`Transport`].
///
/// Each call POSTs the opaque payload to `{base}/{service}/{method}` and
/// returns the response bytes. Non-2xx responses are turned into a
/// [`StatusError`], parsed from the JSON status body the manager emits or
/// derived from the HTTP status when the body is unparseable.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    server: ServerUrl,
}

impl HttpTransport {
    /// Create a new transport for the given server.
    pub fn new(server: ServerUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gavel/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, server }
    }

    /// Returns the server URL this transport is configured for.
    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    fn headers(&self, token: Option<&str>) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        );
        if let Some(token) = token {
            let value = format!("Bearer {}", token);
            let value = HeaderValue::from_str(&value).map_err(|_| {
                Error::Construction("bearer token contains invalid header characters".into())
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn parse_failure(response: reqwest::Response) -> StatusError {
        let http_status = response.status().as_u16();

        match response.json::<StatusBody>().await {
            Ok(body) => StatusError::new(body.code, body.message),
            Err(_) => StatusError::new(StatusCode::from_http(http_status), None),
        }
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, payload, token), fields(server = %self.server))]
    async fn request(
        &self,
        service: &str,
        method: &str,
        payload: &[u8],
        token: Option<&str>,
    ) -> Result<Vec<u8>, Error> {
        let url = self.server.endpoint_url(service, method);
        debug!(method, authed = token.is_some(), "remote call");

        let response = self
            .client
            .post(&url)
            .headers(self.headers(token)?)
            .body(payload.to_vec())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "remote response");

        if status.is_success() {
            let bytes = response.bytes().await.map_err(transport_error)?;
            Ok(bytes.to_vec())
        } else {
            Err(Error::Status(Self::parse_failure(response).await))
        }
    }
}
