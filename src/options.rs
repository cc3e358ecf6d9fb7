use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use indexmap::IndexMap;

use crate::values::statics;
use crate::values::{
    Accept, AcceptEncoding, AcceptLanguage, AccessControlAllowHeaders, AccessControlAllowMethods,
    AccessControlAllowOrigin, Authorization, CacheControl, Connection, ContentDisposition,
    ContentSecurityPolicy, ContentType, Dnt, HeaderField, IfModifiedSince, IfNoneMatch, Origin,
    Pragma, Range, Referer, SecFetchDest, SecFetchMode, SecFetchSite, SecFetchUser,
    StrictTransportSecurity, UserAgent, XContentTypeOptions, XCsrfToken, XFrameOptions,
    XRequestedWith,
};

/// Header options for a single request.
///
/// Unlike the basic headers owned by a
/// [`HeaderBuilder`](crate::builder::HeaderBuilder), these options describe
/// one specific request and are consumed per build.
///
/// A field left at its default (empty) value is treated as not provided and
/// is skipped during the build; an explicit empty string behaves the same
/// way and never clears a basic header. To override a basic header for one
/// call, set the field to a non-empty value or use [`custom`](Self::custom),
/// which always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeaderOpts {
    pub content_type: ContentType,
    pub accept: Accept,
    pub accept_language: AcceptLanguage,
    pub accept_encoding: AcceptEncoding,
    pub connection: Connection,
    pub user_agent: UserAgent,
    pub referer: Referer,
    pub origin: Origin,
    pub authorization: Authorization,
    pub cache_control: CacheControl,
    pub pragma: Pragma,
    pub dnt: Dnt,
    pub sec_fetch_dest: SecFetchDest,
    pub sec_fetch_mode: SecFetchMode,
    pub sec_fetch_site: SecFetchSite,
    pub sec_fetch_user: SecFetchUser,
    pub x_requested_with: XRequestedWith,
    pub x_frame_options: XFrameOptions,
    pub x_content_type_options: XContentTypeOptions,
    pub x_csrf_token: XCsrfToken,
    pub strict_transport_security: StrictTransportSecurity,
    pub content_security_policy: ContentSecurityPolicy,
    pub access_control_allow_origin: AccessControlAllowOrigin,
    pub access_control_allow_methods: AccessControlAllowMethods,
    pub access_control_allow_headers: AccessControlAllowHeaders,
    pub range: Range,
    pub if_modified_since: IfModifiedSince,
    pub if_none_match: IfNoneMatch,
    pub content_disposition: ContentDisposition,
    /// Arbitrary headers applied last, overwriting anything else.
    pub custom: HashMap<String, String>,
    /// Emit the default `Sec-CH-*` client-hint bundle.
    pub include_client_hints: bool,
}

impl HeaderOpts {
    pub fn new() -> HeaderOpts {
        HeaderOpts::default()
    }

    pub fn with_content_type(mut self, value: impl Into<ContentType>) -> Self {
        self.content_type = value.into();
        self
    }

    pub fn with_accept(mut self, value: impl Into<Accept>) -> Self {
        self.accept = value.into();
        self
    }

    pub fn with_accept_language(mut self, value: impl Into<AcceptLanguage>) -> Self {
        self.accept_language = value.into();
        self
    }

    pub fn with_accept_encoding(mut self, value: impl Into<AcceptEncoding>) -> Self {
        self.accept_encoding = value.into();
        self
    }

    pub fn with_connection(mut self, value: impl Into<Connection>) -> Self {
        self.connection = value.into();
        self
    }

    pub fn with_user_agent(mut self, value: impl Into<UserAgent>) -> Self {
        self.user_agent = value.into();
        self
    }

    pub fn with_referer(mut self, value: impl Into<Referer>) -> Self {
        self.referer = value.into();
        self
    }

    pub fn with_origin(mut self, value: impl Into<Origin>) -> Self {
        self.origin = value.into();
        self
    }

    pub fn with_authorization(mut self, value: impl Into<Authorization>) -> Self {
        self.authorization = value.into();
        self
    }

    /// Sets `Authorization` to a `Bearer` token.
    pub fn with_bearer_token(mut self, token: &str) -> Self {
        self.authorization =
            format!("{}{}", statics::AUTHORIZATION_BEARER_PREFIX, token).into();
        self
    }

    /// Sets `Authorization` to Basic credentials, base64-encoded per RFC 7617.
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        let credentials = BASE64.encode(format!("{}:{}", username, password));
        self.authorization =
            format!("{}{}", statics::AUTHORIZATION_BASIC_PREFIX, credentials).into();
        self
    }

    /// Sets `Authorization` to an `ApiKey` credential.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.authorization =
            format!("{}{}", statics::AUTHORIZATION_API_KEY_PREFIX, api_key).into();
        self
    }

    pub fn with_cache_control(mut self, value: impl Into<CacheControl>) -> Self {
        self.cache_control = value.into();
        self
    }

    pub fn with_pragma(mut self, value: impl Into<Pragma>) -> Self {
        self.pragma = value.into();
        self
    }

    pub fn with_dnt(mut self, value: impl Into<Dnt>) -> Self {
        self.dnt = value.into();
        self
    }

    /// Sets the three fetch-metadata headers describing how a request is made.
    pub fn with_sec_fetch(
        mut self,
        dest: impl Into<SecFetchDest>,
        mode: impl Into<SecFetchMode>,
        site: impl Into<SecFetchSite>,
    ) -> Self {
        self.sec_fetch_dest = dest.into();
        self.sec_fetch_mode = mode.into();
        self.sec_fetch_site = site.into();
        self
    }

    pub fn with_sec_fetch_user(mut self, value: impl Into<SecFetchUser>) -> Self {
        self.sec_fetch_user = value.into();
        self
    }

    pub fn with_x_requested_with(mut self, value: impl Into<XRequestedWith>) -> Self {
        self.x_requested_with = value.into();
        self
    }

    /// Marks the request as AJAX via `X-Requested-With: XMLHttpRequest`.
    pub fn with_xml_http_request(mut self) -> Self {
        self.x_requested_with = statics::X_REQUESTED_WITH_XML_HTTP_REQUEST;
        self
    }

    pub fn with_x_frame_options(mut self, value: impl Into<XFrameOptions>) -> Self {
        self.x_frame_options = value.into();
        self
    }

    pub fn with_x_content_type_options(mut self, value: impl Into<XContentTypeOptions>) -> Self {
        self.x_content_type_options = value.into();
        self
    }

    pub fn with_csrf_token(mut self, value: impl Into<XCsrfToken>) -> Self {
        self.x_csrf_token = value.into();
        self
    }

    pub fn with_strict_transport_security(
        mut self,
        value: impl Into<StrictTransportSecurity>,
    ) -> Self {
        self.strict_transport_security = value.into();
        self
    }

    pub fn with_content_security_policy(
        mut self,
        value: impl Into<ContentSecurityPolicy>,
    ) -> Self {
        self.content_security_policy = value.into();
        self
    }

    pub fn with_cors_allow_origin(mut self, value: impl Into<AccessControlAllowOrigin>) -> Self {
        self.access_control_allow_origin = value.into();
        self
    }

    pub fn with_cors_allow_methods(mut self, value: impl Into<AccessControlAllowMethods>) -> Self {
        self.access_control_allow_methods = value.into();
        self
    }

    pub fn with_cors_allow_headers(mut self, value: impl Into<AccessControlAllowHeaders>) -> Self {
        self.access_control_allow_headers = value.into();
        self
    }

    pub fn with_range(mut self, value: impl Into<Range>) -> Self {
        self.range = value.into();
        self
    }

    /// Sets `Range` to a byte range; an absent end leaves the range open.
    pub fn with_range_bytes(mut self, start: u64, end: Option<u64>) -> Self {
        self.range = match end {
            Some(end) => format!("{}{}-{}", statics::RANGE_BYTES_PREFIX, start, end).into(),
            None => format!("{}{}-", statics::RANGE_BYTES_PREFIX, start).into(),
        };
        self
    }

    pub fn with_if_modified_since(mut self, value: impl Into<IfModifiedSince>) -> Self {
        self.if_modified_since = value.into();
        self
    }

    pub fn with_if_none_match(mut self, value: impl Into<IfNoneMatch>) -> Self {
        self.if_none_match = value.into();
        self
    }

    pub fn with_content_disposition(mut self, value: impl Into<ContentDisposition>) -> Self {
        self.content_disposition = value.into();
        self
    }

    /// Adds one custom header. Custom headers overwrite everything else.
    pub fn with_custom(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(name.into(), value.into());
        self
    }

    /// Requests the default client-hint bundle.
    pub fn with_client_hints(mut self) -> Self {
        self.include_client_hints = true;
        self
    }

    /// Overlays `other` on top of these options. Non-empty fields of
    /// `other` win, custom entries are merged (`other` winning on
    /// collisions), and the client-hint flag is kept if either side set it.
    pub fn with_opts(mut self, other: HeaderOpts) -> Self {
        macro_rules! take_set {
            ($($field:ident),+ $(,)?) => {
                $(
                    if !other.$field.is_empty() {
                        self.$field = other.$field;
                    }
                )+
            };
        }

        take_set!(
            content_type,
            accept,
            accept_language,
            accept_encoding,
            connection,
            user_agent,
            referer,
            origin,
            authorization,
            cache_control,
            pragma,
            dnt,
            sec_fetch_dest,
            sec_fetch_mode,
            sec_fetch_site,
            sec_fetch_user,
            x_requested_with,
            x_frame_options,
            x_content_type_options,
            x_csrf_token,
            strict_transport_security,
            content_security_policy,
            access_control_allow_origin,
            access_control_allow_methods,
            access_control_allow_headers,
            range,
            if_modified_since,
            if_none_match,
            content_disposition,
        );

        self.custom.extend(other.custom);
        self.include_client_hints |= other.include_client_hints;
        self
    }

    /// Writes these options onto `headers` in precedence order: named
    /// fields (set ones only), then the client-hint bundle, then custom
    /// entries, each pass overwriting same-named keys from earlier passes.
    pub(crate) fn apply(&self, headers: &mut IndexMap<String, String>) {
        fn put<F: HeaderField>(headers: &mut IndexMap<String, String>, value: &F) {
            if !value.is_unset() {
                headers.insert(F::NAME.to_owned(), value.value().to_owned());
            }
        }

        put(headers, &self.accept);
        put(headers, &self.accept_language);
        put(headers, &self.accept_encoding);
        put(headers, &self.connection);
        put(headers, &self.user_agent);
        put(headers, &self.content_type);
        put(headers, &self.referer);
        put(headers, &self.origin);
        put(headers, &self.authorization);
        put(headers, &self.cache_control);
        put(headers, &self.pragma);
        put(headers, &self.dnt);
        put(headers, &self.sec_fetch_dest);
        put(headers, &self.sec_fetch_mode);
        put(headers, &self.sec_fetch_site);
        put(headers, &self.sec_fetch_user);
        put(headers, &self.x_requested_with);
        put(headers, &self.range);
        put(headers, &self.if_modified_since);
        put(headers, &self.if_none_match);
        put(headers, &self.content_disposition);
        put(headers, &self.x_frame_options);
        put(headers, &self.x_content_type_options);
        put(headers, &self.x_csrf_token);
        put(headers, &self.strict_transport_security);
        put(headers, &self.content_security_policy);
        put(headers, &self.access_control_allow_origin);
        put(headers, &self.access_control_allow_methods);
        put(headers, &self.access_control_allow_headers);

        if self.include_client_hints {
            for (name, value) in statics::CLIENT_HINT_DEFAULTS {
                headers.insert((*name).to_owned(), (*value).to_owned());
            }
        }

        for (name, value) in &self.custom {
            headers.insert(name.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_gets_prefixed() {
        let opts = HeaderOpts::new().with_bearer_token("abc123");
        assert_eq!(opts.authorization.as_str(), "Bearer abc123");
    }

    #[test]
    fn basic_auth_is_base64_encoded() {
        let opts = HeaderOpts::new().with_basic_auth("user", "pass");
        assert_eq!(opts.authorization.as_str(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn api_key_gets_prefixed() {
        let opts = HeaderOpts::new().with_api_key("k-42");
        assert_eq!(opts.authorization.as_str(), "ApiKey k-42");
    }

    #[test]
    fn byte_range_is_formatted() {
        let closed = HeaderOpts::new().with_range_bytes(100, Some(200));
        assert_eq!(closed.range.as_str(), "bytes=100-200");

        let open = HeaderOpts::new().with_range_bytes(512, None);
        assert_eq!(open.range.as_str(), "bytes=512-");
    }

    #[test]
    fn xml_http_request_marks_ajax() {
        let opts = HeaderOpts::new().with_xml_http_request();
        assert_eq!(opts.x_requested_with.as_str(), "XMLHttpRequest");
    }

    #[test]
    fn apply_writes_canonical_wire_names() {
        let opts = HeaderOpts::new()
            .with_content_type(statics::CONTENT_TYPE_JSON)
            .with_sec_fetch(
                statics::SEC_FETCH_DEST_EMPTY,
                statics::SEC_FETCH_MODE_CORS,
                statics::SEC_FETCH_SITE_SAME_ORIGIN,
            );

        let mut headers = IndexMap::new();
        opts.apply(&mut headers);

        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(headers.get("Sec-Fetch-Dest").unwrap(), "empty");
        assert_eq!(headers.get("Sec-Fetch-Mode").unwrap(), "cors");
        assert_eq!(headers.get("Sec-Fetch-Site").unwrap(), "same-origin");
    }

    #[test]
    fn empty_fields_are_not_applied() {
        let opts = HeaderOpts::new().with_accept("");

        let mut headers = IndexMap::new();
        opts.apply(&mut headers);

        assert!(headers.is_empty());
    }

    #[test]
    fn custom_entries_overwrite_named_fields() {
        let opts = HeaderOpts::new()
            .with_accept(statics::ACCEPT_JSON)
            .with_custom("Accept", "text/html");

        let mut headers = IndexMap::new();
        opts.apply(&mut headers);

        assert_eq!(headers.get("Accept").unwrap(), "text/html");
    }

    #[test]
    fn overlay_prefers_non_empty_fields_of_other() {
        let base = HeaderOpts::new()
            .with_accept(statics::ACCEPT_JSON)
            .with_user_agent("base-agent");
        let other = HeaderOpts::new().with_accept(statics::ACCEPT_HTML);

        let merged = base.with_opts(other);

        assert_eq!(merged.accept.as_str(), "text/html");
        assert_eq!(merged.user_agent.as_str(), "base-agent");
    }

    #[test]
    fn overlay_merges_custom_and_client_hints() {
        let base = HeaderOpts::new().with_custom("X-One", "1");
        let other = HeaderOpts::new()
            .with_custom("X-Two", "2")
            .with_custom("X-One", "override")
            .with_client_hints();

        let merged = base.with_opts(other);

        assert_eq!(merged.custom.get("X-One").unwrap(), "override");
        assert_eq!(merged.custom.get("X-Two").unwrap(), "2");
        assert!(merged.include_client_hints);
    }

    #[test]
    fn opts_deserialize_from_json() {
        let opts: HeaderOpts = serde_json::from_str(
            r#"{
                "accept": "application/json",
                "user_agent": "curl/8.0",
                "custom": {"X-Trace": "t1"},
                "include_client_hints": true
            }"#,
        )
        .expect("opts should deserialize");

        assert_eq!(opts.accept.as_str(), "application/json");
        assert_eq!(opts.user_agent.as_str(), "curl/8.0");
        assert_eq!(opts.custom.get("X-Trace").unwrap(), "t1");
        assert!(opts.include_client_hints);
        assert!(opts.content_type.is_empty());
    }
}
