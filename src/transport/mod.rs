use std::time::Duration;

/// Response from a single GET: status code plus raw body bytes.
///
/// Decoding is the fetch cycle's concern, not the transport's.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the response carries a usable payload (HTTP 200).
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{message}")]
    Request { message: String },
}

impl TransportError {
    pub fn request(msg: impl std::fmt::Display) -> Self {
        Self::Request {
            message: msg.to_string(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::request(e)
    }
}

/// The GET capability the fetch cycle runs against.
///
/// The trait seam exists so tests can substitute a scripted transport for
/// the live HTTP client.
pub trait Transport: Send + Sync + 'static {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// reqwest-backed transport holding one pooled client.
///
/// Pool connections are released when the last clone is dropped; the
/// supervisor joins both cycles before returning so that happens prior to
/// process exit.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
