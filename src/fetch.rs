use std::io::Read;

use flate2::read::GzDecoder;
use hyper::client::HttpConnector;
use hyper::{body, Body, Client, Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use tracing::debug;

use crate::constants::USER_AGENT;
use crate::error::FetchError;

pub(crate) type HttpsClient = Client<HttpsConnector<HttpConnector>, Body>;

pub(crate) fn build_client() -> HttpsClient {
    Client::builder().build::<HttpsConnector<HttpConnector>, Body>(HttpsConnector::new())
}

/// GET the page body as text. Anything other than a clean 200 is an error;
/// callers treat every error as fatal.
pub(crate) async fn fetch_page(client: &HttpsClient, url: &str) -> Result<String, FetchError> {
    let request = Request::builder()
        .uri(url)
        .method(Method::GET)
        .header("User-Agent", USER_AGENT)
        .header("Accept-Encoding", "gzip")
        .body(Body::empty())?;

    let response = client.request(request).await?;
    if response.status() != StatusCode::OK {
        return Err(FetchError::Status(response.status()));
    }

    let gzipped = response
        .headers()
        .get("Content-Encoding")
        .is_some_and(|v| v.as_bytes() == b"gzip");
    let bytes = body::to_bytes(response.into_body()).await?;
    debug!(url = url, bytes = bytes.len(), gzipped = gzipped, "page fetched");

    decode_body(&bytes, gzipped)
}

fn decode_body(bytes: &[u8], gzipped: bool) -> Result<String, FetchError> {
    if !gzipped {
        return Ok(String::from_utf8_lossy(bytes).into_owned());
    }

    let mut decoder = GzDecoder::new(bytes);
    let mut inflated = Vec::new();
    decoder.read_to_end(&mut inflated)?;
    Ok(String::from_utf8_lossy(&inflated).into_owned())
}
