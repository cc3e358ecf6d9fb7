use std::borrow::Cow;
use std::fmt;

pub mod statics;

/// A typed header value bound to a fixed wire name.
///
/// Every value type in this module knows the canonical name of the header
/// it belongs to, so a value meant for one header cannot be assigned to
/// another. The wire name is a constant of the type and is never derived
/// from the value itself.
///
/// An empty value counts as unset and is skipped when a header map is
/// built. This mirrors the zero-value semantics callers rely on when they
/// fill only some fields of [`HeaderOpts`](crate::options::HeaderOpts).
pub trait HeaderField {
    /// Canonical wire name, e.g. `"Content-Type"`.
    const NAME: &'static str;

    /// Raw string value as it will appear on the wire.
    fn value(&self) -> &str;

    /// True when the value is empty and should not be emitted.
    fn is_unset(&self) -> bool {
        self.value().is_empty()
    }
}

macro_rules! nominal_str {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl Default for $name {
            /// The unset value.
            fn default() -> $name {
                $name(Cow::Borrowed(""))
            }
        }

        impl $name {
            /// Wraps a `'static` string without allocating. Usable in `const` context.
            pub const fn from_static(value: &'static str) -> $name {
                $name(Cow::Borrowed(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> $name {
                $name(Cow::Owned(value.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> $name {
                $name(Cow::Owned(value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

macro_rules! header_fields {
    ($($(#[$meta:meta])* $name:ident => $wire:literal;)+) => {
        $(
            nominal_str!($(#[$meta])* $name);

            impl HeaderField for $name {
                const NAME: &'static str = $wire;

                fn value(&self) -> &str {
                    &self.0
                }
            }
        )+
    };
}

header_fields! {
    // Content negotiation
    ContentType => "Content-Type";
    Accept => "Accept";
    AcceptLanguage => "Accept-Language";
    AcceptEncoding => "Accept-Encoding";

    // Connection management
    Connection => "Connection";
    Upgrade => "Upgrade";
    TransferEncoding => "Transfer-Encoding";
    Te => "TE";

    // Caching and conditional requests
    CacheControl => "Cache-Control";
    Pragma => "Pragma";
    Range => "Range";
    IfModifiedSince => "If-Modified-Since";
    IfNoneMatch => "If-None-Match";
    ETag => "ETag";
    LastModified => "Last-Modified";

    // Request context
    Authorization => "Authorization";
    Origin => "Origin";
    /// Misspelled in the HTTP spec itself; the wire name keeps the typo.
    Referer => "Referer";
    Host => "Host";
    UserAgent => "User-Agent";
    Cookie => "Cookie";
    XRequestedWith => "X-Requested-With";

    // Response metadata
    Location => "Location";
    SetCookie => "Set-Cookie";
    ContentDisposition => "Content-Disposition";
    ContentLength => "Content-Length";

    // Security
    /// Do Not Track preference, `"1"` or `"0"`.
    Dnt => "DNT";
    XFrameOptions => "X-Frame-Options";
    XContentTypeOptions => "X-Content-Type-Options";
    XCsrfToken => "X-CSRF-Token";
    StrictTransportSecurity => "Strict-Transport-Security";
    ContentSecurityPolicy => "Content-Security-Policy";

    // Proxying and forwarding
    XForwardedFor => "X-Forwarded-For";
    XRealIp => "X-Real-IP";
    XForwardedProto => "X-Forwarded-Proto";
    XForwardedHost => "X-Forwarded-Host";
    XForwardedPort => "X-Forwarded-Port";

    // CORS
    AccessControlAllowOrigin => "Access-Control-Allow-Origin";
    AccessControlAllowMethods => "Access-Control-Allow-Methods";
    AccessControlAllowHeaders => "Access-Control-Allow-Headers";
    AccessControlAllowCredentials => "Access-Control-Allow-Credentials";
    AccessControlExposeHeaders => "Access-Control-Expose-Headers";
    AccessControlMaxAge => "Access-Control-Max-Age";
    AccessControlRequestHeaders => "Access-Control-Request-Headers";
    AccessControlRequestMethod => "Access-Control-Request-Method";

    // Fetch metadata
    SecFetchDest => "Sec-Fetch-Dest";
    SecFetchMode => "Sec-Fetch-Mode";
    SecFetchSite => "Sec-Fetch-Site";
    SecFetchUser => "Sec-Fetch-User";

    // Client hints
    SecChUa => "Sec-CH-UA";
    SecChUaMobile => "Sec-CH-UA-Mobile";
    SecChUaPlatform => "Sec-CH-UA-Platform";
    SecChUaPlatformVersion => "Sec-CH-UA-Platform-Version";
    SecChUaFullVersionList => "Sec-CH-UA-Full-Version-List";
    SecChUaModel => "Sec-CH-UA-Model";
    SecChUaArch => "Sec-CH-UA-Arch";
    SecChUaBitness => "Sec-CH-UA-Bitness";
    /// Whether a 32-bit process runs on 64-bit Windows.
    SecChUaWow64 => "Sec-CH-UA-WoW64";
    SecChPrefersColorScheme => "Sec-CH-Prefers-Color-Scheme";
    SecChPrefersReducedMotion => "Sec-CH-Prefers-Reduced-Motion";
    SecChViewportWidth => "Sec-CH-Viewport-Width";
    SecChDeviceMemory => "Sec-CH-Device-Memory";
    SecChDpr => "Sec-CH-DPR";
    SecChWidth => "Sec-CH-Width";

    // Application headers commonly carried by APIs
    ApiKey => "X-API-Key";
    ApiVersion => "X-API-Version";
    RequestId => "X-Request-ID";
    Timestamp => "X-Timestamp";
    Signature => "X-Signature";
    Nonce => "X-Nonce";
}

nominal_str! {
    /// An HTTP method. Not a header field, so it carries no wire name;
    /// used with the method constants in [`statics`].
    Method
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_fixed_per_type() {
        assert_eq!(ContentType::NAME, "Content-Type");
        assert_eq!(SecChUa::NAME, "Sec-CH-UA");
        assert_eq!(XCsrfToken::NAME, "X-CSRF-Token");
        assert_eq!(Dnt::NAME, "DNT");
        assert_eq!(Referer::NAME, "Referer");
        assert_eq!(RequestId::NAME, "X-Request-ID");
    }

    #[test]
    fn wire_name_does_not_depend_on_value() {
        let canned = statics::CONTENT_TYPE_JSON;
        let custom = ContentType::from("application/vnd.acme+json");
        assert_eq!(ContentType::NAME, "Content-Type");
        assert_ne!(canned, custom);
    }

    #[test]
    fn default_value_is_unset() {
        let accept = Accept::default();
        assert!(accept.is_unset());
        assert!(accept.is_empty());
    }

    #[test]
    fn explicit_empty_value_is_unset() {
        let accept = Accept::from("");
        assert!(accept.is_unset());
    }

    #[test]
    fn conversions_preserve_the_text() {
        let ua: UserAgent = String::from("curl/8.0").into();
        assert_eq!(ua.as_str(), "curl/8.0");
        assert_eq!(ua.to_string(), "curl/8.0");
        assert_eq!(UserAgent::from("curl/8.0"), ua);
    }

    #[test]
    fn from_static_is_const_constructible() {
        const PLAIN: ContentType = ContentType::from_static("text/plain");
        assert_eq!(PLAIN.as_str(), "text/plain");
    }
}
