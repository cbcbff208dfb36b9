//! Blocking HTTP GET into memory via the curl crate (libcurl).

use crate::retry::FetchError;
use std::time::Duration;

/// Fetch the full response body of `url` with a GET request.
///
/// Follows redirects. When `token` is present, sends
/// `Authorization: Bearer <token>`. Returns the body only for 2xx responses;
/// any other status is `FetchError::Http`.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async
/// code.
pub fn get(url: &str, token: Option<&str>) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.timeout(Duration::from_secs(600))?;

    if let Some(token) = token {
        let mut list = curl::easy::List::new();
        list.append(&format!("Authorization: Bearer {}", token.trim()))?;
        easy.http_headers(list)?;
    }

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}
