use std::error::Error as _;
use std::time::Duration;

use classifier_core::JobRecord;
use classifier_logging::{classifier_debug, classifier_info, classifier_warn};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::{RawResponse, TransportError, TransportErrorKind};

/// Local development address of the classification service.
pub const DEFAULT_ENDPOINT_BASE_URL: &str = "http://localhost:5000";

const PREDICT_PATH: &str = "predict";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint_base_url: String,
    /// `None` keeps the transport's default. Tunable, not a guarantee.
    pub connect_timeout: Option<Duration>,
    /// `None` keeps the transport's default. Tunable, not a guarantee.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint_base_url: DEFAULT_ENDPOINT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_response_bytes: 1024 * 1024,
        }
    }
}

impl ClientSettings {
    pub fn with_endpoint(endpoint_base_url: impl Into<String>) -> Self {
        Self {
            endpoint_base_url: endpoint_base_url.into(),
            ..Self::default()
        }
    }

    /// `<base>/predict`, with any trailing slash on the base path collapsed.
    /// A query string on the base is kept after the path.
    pub fn predict_url(&self) -> Result<Url, TransportError> {
        let base = self.endpoint_base_url.trim();
        let mut url = Url::parse(base).map_err(|err| {
            TransportError::new(
                TransportErrorKind::InvalidEndpoint,
                format!("{base:?}: {err}"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TransportError::new(
                TransportErrorKind::InvalidEndpoint,
                format!("unsupported scheme {:?}", url.scheme()),
            ));
        }
        url.path_segments_mut()
            .map_err(|()| {
                TransportError::new(
                    TransportErrorKind::InvalidEndpoint,
                    format!("{base:?} cannot carry a path"),
                )
            })?
            .pop_if_empty()
            .push(PREDICT_PATH);
        Ok(url)
    }
}

/// One classification attempt per call; implementations must not retry.
#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, record: &JobRecord) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClassifier {
    settings: ClientSettings,
}

impl ReqwestClassifier {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| TransportError::new(TransportErrorKind::NetworkFailure, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Classifier for ReqwestClassifier {
    async fn classify(&self, record: &JobRecord) -> Result<RawResponse, TransportError> {
        let url = self.settings.predict_url()?;
        let client = self.build_client()?;
        let payload = serde_json::to_vec(record).map_err(|err| {
            TransportError::new(
                TransportErrorKind::NetworkFailure,
                format!("failed to encode request: {err}"),
            )
        })?;

        classifier_info!("POST {} payload_len={}", url, payload.len());
        let response = client
            .post(url.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            classifier_warn!("Classification service answered {} for {}", status, url);
            return Err(TransportError::new(
                TransportErrorKind::HttpError {
                    status: status.as_u16(),
                },
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        classifier_debug!("Received {} bytes from {}", bytes.len(), url);

        let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(|err| {
            TransportError::new(
                TransportErrorKind::MalformedResponse,
                format!("response is not valid JSON: {err}"),
            )
        })?;
        if !body.is_object() {
            return Err(TransportError::new(
                TransportErrorKind::MalformedResponse,
                "response is not a JSON object",
            ));
        }

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

fn too_large(max_bytes: u64, actual: u64) -> TransportError {
    TransportError::new(
        TransportErrorKind::MalformedResponse,
        format!("response too large (max {max_bytes}, actual {actual})"),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    let mut message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        err.to_string()
    };
    // reqwest keeps the useful part ("Connection refused", DNS errors) in the source chain.
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TransportError::new(TransportErrorKind::NetworkFailure, message)
}
