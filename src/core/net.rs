use crate::core::RadarError;

/// Read the response body as text, mapping non-success statuses to errors first.
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, RadarError> {
    let status = resp.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint, status = status.as_u16(), "non-success response");
        #[cfg(not(feature = "tracing"))]
        let _ = endpoint;
        return Err(RadarError::from_status(status.as_u16(), resp.url().as_str()));
    }
    Ok(resp.text().await?)
}
