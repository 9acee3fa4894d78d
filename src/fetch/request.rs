//! HTTP request building.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL};

use crate::config::ACCEPT_HTML;

/// Headers sent with every page request.
///
/// The user agent is set on the client itself (see
/// [`init_client`](crate::initialization::init_client)).
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(ACCEPT, ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(CACHE_CONTROL, "no-cache")
    }
}
