//! Order submission

use thiserror::Error;

use storefront_core::order::OrderPayload;

/// Errors from posting an order to the submission endpoint.
#[derive(Debug, Error)]
pub(crate) enum SubmitError {
    /// The page origin could not be determined.
    #[error("could not determine the page origin")]
    MissingOrigin,

    /// The endpoint answered with a non-success status.
    #[error("the order endpoint answered {0}")]
    Status(reqwest::StatusCode),

    /// The request could not be sent.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Resolve a submission path against the page origin.
///
/// The request client only accepts absolute URLs, so the relative path the
/// page is configured with is joined with the origin it was served from.
fn resolve_endpoint(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');

    if path.starts_with('/') {
        format!("{origin}{path}")
    } else {
        format!("{origin}/{path}")
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// POST the order as an URL-encoded form body to `path` on the page origin.
///
/// Any 2xx response counts as success; any other status, and any transport
/// failure, counts as failure. No timeout, no retry: the caller surfaces the
/// failure and leaves retrying to the user.
///
/// # Errors
///
/// - [`SubmitError::MissingOrigin`]: the page origin is unavailable.
/// - [`SubmitError::Status`]: the endpoint answered outside the 2xx range.
/// - [`SubmitError::Transport`]: the request never completed.
pub(crate) async fn post_order(path: &str, payload: &OrderPayload) -> Result<(), SubmitError> {
    let origin = page_origin().ok_or(SubmitError::MissingOrigin)?;
    let endpoint = resolve_endpoint(&origin, path);

    let response = reqwest::Client::new()
        .post(endpoint)
        .form(payload)
        .send()
        .await?;

    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_endpoint_joins_origin_and_root_path() {
        let endpoint = resolve_endpoint("https://shop.example", "/");

        assert_eq!(endpoint, "https://shop.example/");
    }

    #[test]
    fn resolve_endpoint_drops_a_trailing_origin_slash() {
        let endpoint = resolve_endpoint("https://shop.example/", "/orders");

        assert_eq!(endpoint, "https://shop.example/orders");
    }

    #[test]
    fn resolve_endpoint_inserts_a_missing_path_slash() {
        let endpoint = resolve_endpoint("https://shop.example", "orders");

        assert_eq!(endpoint, "https://shop.example/orders");
    }

    #[test]
    fn resolved_endpoints_are_absolute_urls() {
        // A bare relative path cannot even be built into a request; the
        // resolved form must parse as an absolute URL.
        let endpoint = resolve_endpoint("http://127.0.0.1:8080", "/");

        let request = reqwest::Client::new().post(&endpoint).build();

        assert!(request.is_ok(), "expected {endpoint} to build a request");
    }

    #[test]
    fn bare_relative_paths_are_rejected_by_the_client() {
        let request = reqwest::Client::new().post("/").build();

        assert!(request.is_err(), "a relative URL must not build");
    }
}
