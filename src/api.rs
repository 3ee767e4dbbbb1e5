//! HTTP client for the policy backend.

use gloo_net::http::Request;
use thiserror::Error;

use crate::model::Resource;

/// Endpoint serving the full resource list. The backend runs alongside the
/// app during development; there is no other configuration surface.
pub const RESOURCES_URL: &str = "http://localhost:8000/resources";

/// Why a resource fetch did not produce data. The `Display` form is what the
/// error panel shows.
#[derive(Debug, Error)]
pub enum FetchError {
	/// Network failure or a payload that did not decode as a resource list.
	#[error("request failed: {0}")]
	Request(#[from] gloo_net::Error),
	/// The server answered with a non-success status.
	#[error("server responded with {status} {status_text}")]
	Status { status: u16, status_text: String },
}

/// Fetch the resource list. One shot, no retries, no timeout; the caller
/// decides when to try again.
pub async fn fetch_resources(url: &str) -> Result<Vec<Resource>, FetchError> {
	let response = Request::get(url).send().await?;
	if !response.ok() {
		return Err(FetchError::Status {
			status: response.status(),
			status_text: response.status_text(),
		});
	}
	Ok(response.json::<Vec<Resource>>().await?)
}
