//! Status handling for zones responses.

use crate::error::FetchError;

/// Longest slice of an error body kept in [`FetchError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Pass a successful response through; turn anything else into
/// [`FetchError::Status`] carrying the start of the body.
///
/// Every non-success status is treated the same way, rate limiting included.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(FetchError::Status {
        status: status.as_u16(),
        message: truncate_body(body),
    })
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let cut = (0..=MAX_ERROR_BODY)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        body.truncate(cut);
    }
    body
}
