//! Ready-made option bundles for common request shapes.
//!
//! Presets are plain factories over [`HeaderOpts`]: they carry no state of
//! their own and can be freely combined with the fluent setters or stacked
//! with [`HeaderOpts::with_opts`].

use crate::options::HeaderOpts;
use crate::values::statics;

impl HeaderOpts {
    /// Headers for JSON request and response bodies.
    pub fn json() -> HeaderOpts {
        HeaderOpts::new()
            .with_content_type(statics::CONTENT_TYPE_JSON)
            .with_accept(statics::ACCEPT_JSON)
    }

    /// Like [`json`](Self::json), with an explicit UTF-8 charset.
    pub fn json_utf8() -> HeaderOpts {
        HeaderOpts::new()
            .with_content_type(statics::CONTENT_TYPE_JSON_UTF8)
            .with_accept(statics::ACCEPT_JSON)
    }

    /// Headers for a url-encoded form submission.
    pub fn form() -> HeaderOpts {
        HeaderOpts::new().with_content_type(statics::CONTENT_TYPE_FORM)
    }

    /// Like [`form`](Self::form), with an explicit UTF-8 charset.
    pub fn form_utf8() -> HeaderOpts {
        HeaderOpts::new().with_content_type(statics::CONTENT_TYPE_FORM_UTF8)
    }

    /// Headers for a multipart form submission. The boundary parameter is
    /// the caller's job; see `CONTENT_TYPE_MULTIPART_PREFIX`.
    pub fn multipart() -> HeaderOpts {
        HeaderOpts::new().with_content_type(statics::CONTENT_TYPE_MULTIPART)
    }

    /// Headers for XML request and response bodies.
    pub fn xml() -> HeaderOpts {
        HeaderOpts::new()
            .with_content_type(statics::CONTENT_TYPE_XML)
            .with_accept(statics::ACCEPT_XML)
    }

    /// Like [`xml`](Self::xml), with an explicit UTF-8 charset.
    pub fn xml_utf8() -> HeaderOpts {
        HeaderOpts::new()
            .with_content_type(statics::CONTENT_TYPE_XML_UTF8)
            .with_accept(statics::ACCEPT_XML)
    }

    /// Headers a browser sends on a same-origin AJAX call.
    pub fn ajax() -> HeaderOpts {
        HeaderOpts::new().with_xml_http_request().with_sec_fetch(
            statics::SEC_FETCH_DEST_EMPTY,
            statics::SEC_FETCH_MODE_CORS,
            statics::SEC_FETCH_SITE_SAME_ORIGIN,
        )
    }

    /// Headers for talking to a JSON API over a kept-alive connection.
    pub fn api() -> HeaderOpts {
        HeaderOpts::json()
            .with_connection(statics::CONNECTION_KEEP_ALIVE)
            .with_cache_control(statics::CACHE_CONTROL_NO_CACHE)
    }

    /// Headers mimicking a desktop Chrome page navigation, client hints
    /// included.
    pub fn browser() -> HeaderOpts {
        HeaderOpts::new()
            .with_user_agent(statics::USER_AGENT_CHROME)
            .with_accept(statics::ACCEPT_HTML_XHTML)
            .with_accept_language(statics::ACCEPT_LANGUAGE_ENGLISH)
            .with_accept_encoding(statics::ACCEPT_ENCODING_ALL)
            .with_dnt(statics::DNT_DISABLE)
            .with_client_hints()
            .with_sec_fetch(
                statics::SEC_FETCH_DEST_DOCUMENT,
                statics::SEC_FETCH_MODE_NAVIGATE,
                statics::SEC_FETCH_SITE_NONE,
            )
    }

    /// Headers mimicking a mobile Safari page navigation.
    pub fn mobile() -> HeaderOpts {
        HeaderOpts::new()
            .with_user_agent(statics::USER_AGENT_MOBILE)
            .with_accept(statics::ACCEPT_HTML_XHTML)
            .with_accept_language(statics::ACCEPT_LANGUAGE_ENGLISH)
            .with_accept_encoding(statics::ACCEPT_ENCODING_ALL)
    }

    /// Headers mimicking a well-behaved crawler.
    pub fn bot() -> HeaderOpts {
        HeaderOpts::new()
            .with_user_agent(statics::USER_AGENT_BOT)
            .with_accept(statics::ACCEPT_HTML)
            .with_connection(statics::CONNECTION_CLOSE)
    }

    /// Headers asking intermediaries not to serve a cached response.
    pub fn no_cache() -> HeaderOpts {
        HeaderOpts::new()
            .with_cache_control(statics::CACHE_CONTROL_NO_CACHE)
            .with_pragma(statics::PRAGMA_NO_CACHE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_preset_sets_both_sides_of_negotiation() {
        let opts = HeaderOpts::json();
        assert_eq!(opts.content_type.as_str(), "application/json");
        assert_eq!(opts.accept.as_str(), "application/json");
    }

    #[test]
    fn api_preset_extends_json() {
        let opts = HeaderOpts::api();
        assert_eq!(opts.content_type.as_str(), "application/json");
        assert_eq!(opts.connection.as_str(), "keep-alive");
        assert_eq!(opts.cache_control.as_str(), "no-cache");
    }

    #[test]
    fn browser_preset_navigates_with_client_hints() {
        let opts = HeaderOpts::browser();
        assert!(opts.user_agent.as_str().contains("Chrome"));
        assert_eq!(opts.sec_fetch_dest.as_str(), "document");
        assert_eq!(opts.sec_fetch_mode.as_str(), "navigate");
        assert_eq!(opts.sec_fetch_site.as_str(), "none");
        assert_eq!(opts.dnt.as_str(), "0");
        assert!(opts.include_client_hints);
    }

    #[test]
    fn ajax_preset_marks_fetch_metadata() {
        let opts = HeaderOpts::ajax();
        assert_eq!(opts.x_requested_with.as_str(), "XMLHttpRequest");
        assert_eq!(opts.sec_fetch_dest.as_str(), "empty");
        assert_eq!(opts.sec_fetch_mode.as_str(), "cors");
        assert_eq!(opts.sec_fetch_site.as_str(), "same-origin");
    }

    #[test]
    fn bot_preset_closes_the_connection() {
        let opts = HeaderOpts::bot();
        assert!(opts.user_agent.as_str().contains("Googlebot"));
        assert_eq!(opts.connection.as_str(), "close");
    }

    #[test]
    fn no_cache_preset_sets_both_cache_headers() {
        let opts = HeaderOpts::no_cache();
        assert_eq!(opts.cache_control.as_str(), "no-cache");
        assert_eq!(opts.pragma.as_str(), "no-cache");
    }

    #[test]
    fn presets_stack_via_overlay() {
        let opts = HeaderOpts::browser().with_opts(HeaderOpts::no_cache());
        assert!(opts.user_agent.as_str().contains("Chrome"));
        assert_eq!(opts.cache_control.as_str(), "no-cache");
        assert_eq!(opts.pragma.as_str(), "no-cache");
    }
}
