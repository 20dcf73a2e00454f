//! HTTP/1.1 transport over plain TCP or rustls.
//!
//! Each request opens a fresh connection, sends one request and buffers
//! the complete response body before returning.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, HOST, USER_AGENT};
use http::{Method, Request, StatusCode, Uri};
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::debug;

use crate::error::TransportError;

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Connection settings shared by every request of a client.
#[derive(Clone)]
pub struct Transport {
    tls: Arc<rustls::ClientConfig>,
    timeout: Duration,
}

impl Transport {
    /// Create a transport trusting the Mozilla root certificate store.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let mut root_store = rustls::RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let config = rustls::ClientConfig::builder_with_provider(
            rustls::crypto::ring::default_provider().into(),
        )
        .with_safe_default_protocol_versions()
        .map_err(|e| TransportError::Tls(format!("tls protocol version error: {e}")))?
        .with_root_certificates(root_store)
        .with_no_client_auth();

        Ok(Self {
            tls: Arc::new(config),
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one request and wait for the whole response, bounded by the
    /// transport timeout.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<Response, TransportError> {
        let uri: Uri = url.parse().map_err(|e: http::uri::InvalidUri| {
            TransportError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        tokio::time::timeout(self.timeout, self.send_uri(method, &uri, body))
            .await
            .map_err(|_| TransportError::Timeout(self.timeout))?
    }

    async fn send_uri(
        &self,
        method: Method,
        uri: &Uri,
        body: Option<Bytes>,
    ) -> Result<Response, TransportError> {
        let https = match uri.scheme_str() {
            Some("https") => true,
            Some("http") => false,
            other => {
                return Err(TransportError::UnsupportedScheme(
                    other.unwrap_or_default().to_string(),
                ));
            }
        };
        let host = uri.host().ok_or_else(|| TransportError::InvalidUrl {
            url: uri.to_string(),
            reason: "missing host".to_string(),
        })?;
        let host = host.trim_start_matches('[').trim_end_matches(']');
        let port = uri.port_u16().unwrap_or(if https { 443 } else { 80 });
        let authority = uri.authority().map(|a| a.as_str()).unwrap_or(host);
        let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(HOST, authority)
            .header(USER_AGENT, concat!("megaverse/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(Full::new(body.unwrap_or_default()))?;

        let stream = TcpStream::connect((host, port))
            .await
            .map_err(TransportError::Connect)?;

        if https {
            let server_name = ServerName::try_from(host)
                .map_err(|e| TransportError::Tls(format!("invalid server name {host}: {e}")))?
                .to_owned();
            let stream = tokio_rustls::TlsConnector::from(self.tls.clone())
                .connect(server_name, stream)
                .await
                .map_err(|e| TransportError::Tls(e.to_string()))?;
            exchange(stream, req).await
        } else {
            exchange(stream, req).await
        }
    }
}

/// Run one request/response exchange on an established stream.
async fn exchange<S>(io: S, req: Request<Full<Bytes>>) -> Result<Response, TransportError>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(io)).await?;

    // Drive the connection in the background.
    tokio::spawn(async move {
        if let Err(e) = conn.await {
            debug!(error = %e, "connection closed with error");
        }
    });

    let resp = sender.send_request(req).await?;
    let status = resp.status();
    // The body may arrive in several frames; collect them all.
    let body = resp.into_body().collect().await?.to_bytes();

    Ok(Response { status, body })
}
