// Results feed client
//
// Fetches the draw-results JSON with cache-busting, since upstream sits
// behind an aggressive CDN. Bodies are decoded separately from the transfer
// so a malformed payload is distinguishable from a network failure.

pub mod model;

pub use model::{DrawRecord, Envelope, ResultMap, Token};

use reqwest::StatusCode;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("no se pudo contactar el servidor: {0}")]
    Network(#[from] reqwest::Error),

    #[error("el servidor respondió {0}")]
    BadStatus(StatusCode),

    #[error("respuesta no válida: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and decode one snapshot of the results feed.
///
/// The `t` query parameter and the no-cache headers defeat intermediary
/// caching; the value just has to differ between cycles.
pub async fn fetch_results(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Envelope, FeedError> {
    let bust = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let response = client
        .get(endpoint)
        .query(&[("t", bust.to_string())])
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::BadStatus(status));
    }

    let body = response.text().await?;
    let envelope = serde_json::from_str(&body)?;
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_facing_spanish() {
        let err = FeedError::BadStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "el servidor respondió 503 Service Unavailable");

        let parse = serde_json::from_str::<Envelope>("{{").unwrap_err();
        let err = FeedError::from(parse);
        assert!(err.to_string().starts_with("respuesta no válida"));
    }
}
