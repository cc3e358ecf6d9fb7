//! Canonical values for well-known headers, grouped by header family.
//!
//! Everything here is plain data. The constants are convenient, typed
//! literals for [`HeaderOpts`](crate::options::HeaderOpts) fields; nothing
//! enforces that only these values are used, and any string can be supplied
//! for any field.

use super::{
    Accept, AcceptEncoding, AcceptLanguage, AccessControlAllowCredentials,
    AccessControlAllowHeaders, AccessControlAllowMethods, AccessControlAllowOrigin,
    AccessControlMaxAge, ApiKey, ApiVersion, Authorization, CacheControl, Connection,
    ContentDisposition, ContentType, Dnt, HeaderField, Method, Nonce, Pragma, Range, RequestId,
    SecChPrefersColorScheme, SecChPrefersReducedMotion, SecChUa, SecChUaMobile, SecChUaPlatform,
    SecFetchDest, SecFetchMode, SecFetchSite, SecFetchUser, Signature, StrictTransportSecurity,
    Te, Timestamp, TransferEncoding, Upgrade, UserAgent, XContentTypeOptions, XFrameOptions,
    XRequestedWith,
};

// Impersonated browser and platform identity. Chrome 139 on Linux; bump
// these together when refreshing the profile.
pub const BROWSER_NAME: &str = "Chrome";
pub const CHROME_VERSION: &str = "139";
pub const CHROME_VERSION_FULL: &str = "139.0.7258.66";
pub const OS_NAME: &str = "Linux";
pub const OS_VERSION: &str = "6.8.0";

/// System identifier derived from the impersonated platform and browser.
pub const UDID: &str = "Linux/Chrome";

pub const USER_AGENT_DEFAULT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36";
pub const SEC_CH_UA_DEFAULT: &str =
    "\"Chromium\";v=\"139\", \"Google Chrome\";v=\"139\", \"Not-A.Brand\";v=\"99\"";
pub const SEC_CH_UA_FULL_VERSION_LIST_DEFAULT: &str =
    "\"Chromium\";v=\"139.0.7258.66\", \"Google Chrome\";v=\"139.0.7258.66\", \"Not-A.Brand\";v=\"99.0.0.0\"";
pub const SEC_CH_UA_PLATFORM_DEFAULT: &str = "\"Linux\"";
pub const SEC_CH_UA_PLATFORM_VERSION_DEFAULT: &str = "\"6.8.0\"";
pub const SEC_CH_UA_MOBILE_DEFAULT: &str = "?0";
pub const SEC_CH_UA_MODEL_DEFAULT: &str = "";
pub const SEC_CH_PREFERS_COLOR_SCHEME_DEFAULT: &str = "light";

/// The bundle emitted when client hints are requested on a build.
///
/// Kept deliberately small: the four hints Chrome sends unprompted on a
/// plain navigation. The remaining `Sec-CH-*` defaults above are available
/// for callers that negotiate high-entropy hints themselves.
pub static CLIENT_HINT_DEFAULTS: &[(&str, &str)] = &[
    (SecChUa::NAME, SEC_CH_UA_DEFAULT),
    (SecChUaPlatform::NAME, SEC_CH_UA_PLATFORM_DEFAULT),
    (SecChUaMobile::NAME, SEC_CH_UA_MOBILE_DEFAULT),
    (SecChPrefersColorScheme::NAME, SEC_CH_PREFERS_COLOR_SCHEME_DEFAULT),
];

// Common header value defaults
pub const ACCEPT_DEFAULT: &str = "*/*";
pub const ACCEPT_LANGUAGE_DEFAULT: &str = "en-US,en;q=0.9";
pub const ACCEPT_ENCODING_DEFAULT: &str = "gzip, deflate, br, zstd";
pub const CONNECTION_DEFAULT: &str = "keep-alive";

// Content types: JSON
pub const CONTENT_TYPE_JSON: ContentType = ContentType::from_static("application/json");
pub const CONTENT_TYPE_JSON_UTF8: ContentType =
    ContentType::from_static("application/json; charset=utf-8");

// Content types: XML
pub const CONTENT_TYPE_XML: ContentType = ContentType::from_static("application/xml");
pub const CONTENT_TYPE_XML_UTF8: ContentType =
    ContentType::from_static("application/xml; charset=utf-8");

// Content types: forms
pub const CONTENT_TYPE_FORM: ContentType =
    ContentType::from_static("application/x-www-form-urlencoded");
pub const CONTENT_TYPE_FORM_UTF8: ContentType =
    ContentType::from_static("application/x-www-form-urlencoded; charset=utf-8");
pub const CONTENT_TYPE_MULTIPART: ContentType = ContentType::from_static("multipart/form-data");
/// Incomplete on purpose: append the boundary parameter.
pub const CONTENT_TYPE_MULTIPART_PREFIX: ContentType =
    ContentType::from_static("multipart/form-data; boundary=");

// Content types: text
pub const CONTENT_TYPE_TEXT_PLAIN: ContentType = ContentType::from_static("text/plain");
pub const CONTENT_TYPE_TEXT_PLAIN_UTF8: ContentType =
    ContentType::from_static("text/plain; charset=utf-8");
pub const CONTENT_TYPE_TEXT_HTML: ContentType = ContentType::from_static("text/html");
pub const CONTENT_TYPE_TEXT_HTML_UTF8: ContentType =
    ContentType::from_static("text/html; charset=utf-8");
pub const CONTENT_TYPE_TEXT_CSS: ContentType = ContentType::from_static("text/css");
pub const CONTENT_TYPE_TEXT_JAVASCRIPT: ContentType = ContentType::from_static("text/javascript");
pub const CONTENT_TYPE_TEXT_XML: ContentType = ContentType::from_static("text/xml");
pub const CONTENT_TYPE_TEXT_CSV: ContentType = ContentType::from_static("text/csv");

// Content types: binary
pub const CONTENT_TYPE_OCTET_STREAM: ContentType =
    ContentType::from_static("application/octet-stream");
pub const CONTENT_TYPE_PDF: ContentType = ContentType::from_static("application/pdf");
pub const CONTENT_TYPE_ZIP: ContentType = ContentType::from_static("application/zip");
pub const CONTENT_TYPE_GZIP: ContentType = ContentType::from_static("application/gzip");

// Content types: images
pub const CONTENT_TYPE_IMAGE_JPEG: ContentType = ContentType::from_static("image/jpeg");
pub const CONTENT_TYPE_IMAGE_PNG: ContentType = ContentType::from_static("image/png");
pub const CONTENT_TYPE_IMAGE_GIF: ContentType = ContentType::from_static("image/gif");
pub const CONTENT_TYPE_IMAGE_WEBP: ContentType = ContentType::from_static("image/webp");
pub const CONTENT_TYPE_IMAGE_SVG: ContentType = ContentType::from_static("image/svg+xml");
pub const CONTENT_TYPE_IMAGE_ICO: ContentType = ContentType::from_static("image/x-icon");
pub const CONTENT_TYPE_IMAGE_BMP: ContentType = ContentType::from_static("image/bmp");
pub const CONTENT_TYPE_IMAGE_TIFF: ContentType = ContentType::from_static("image/tiff");

// Content types: audio
pub const CONTENT_TYPE_AUDIO_MP3: ContentType = ContentType::from_static("audio/mpeg");
pub const CONTENT_TYPE_AUDIO_WAV: ContentType = ContentType::from_static("audio/wav");
pub const CONTENT_TYPE_AUDIO_OGG: ContentType = ContentType::from_static("audio/ogg");
pub const CONTENT_TYPE_AUDIO_AAC: ContentType = ContentType::from_static("audio/aac");
pub const CONTENT_TYPE_AUDIO_FLAC: ContentType = ContentType::from_static("audio/flac");

// Content types: video
pub const CONTENT_TYPE_VIDEO_MP4: ContentType = ContentType::from_static("video/mp4");
pub const CONTENT_TYPE_VIDEO_AVI: ContentType = ContentType::from_static("video/x-msvideo");
pub const CONTENT_TYPE_VIDEO_MOV: ContentType = ContentType::from_static("video/quicktime");
pub const CONTENT_TYPE_VIDEO_WEBM: ContentType = ContentType::from_static("video/webm");
pub const CONTENT_TYPE_VIDEO_OGV: ContentType = ContentType::from_static("video/ogg");

// Connection
pub const CONNECTION_KEEP_ALIVE: Connection = Connection::from_static("keep-alive");
pub const CONNECTION_CLOSE: Connection = Connection::from_static("close");
pub const CONNECTION_UPGRADE: Connection = Connection::from_static("upgrade");

// Accept
pub const ACCEPT_ALL: Accept = Accept::from_static("*/*");
pub const ACCEPT_JSON: Accept = Accept::from_static("application/json");
pub const ACCEPT_XML: Accept = Accept::from_static("application/xml");
pub const ACCEPT_HTML: Accept = Accept::from_static("text/html");
pub const ACCEPT_TEXT: Accept = Accept::from_static("text/plain");
pub const ACCEPT_IMAGE: Accept = Accept::from_static("image/*");
pub const ACCEPT_AUDIO: Accept = Accept::from_static("audio/*");
pub const ACCEPT_VIDEO: Accept = Accept::from_static("video/*");
pub const ACCEPT_JSON_XML: Accept = Accept::from_static("application/json, application/xml");
pub const ACCEPT_HTML_XHTML: Accept = Accept::from_static("text/html, application/xhtml+xml");
pub const ACCEPT_IMAGE_WEBP: Accept = Accept::from_static("image/webp,image/apng,image/*,*/*;q=0.8");

// Accept-Language
pub const ACCEPT_LANGUAGE_ENGLISH: AcceptLanguage = AcceptLanguage::from_static("en-US,en;q=0.9");
pub const ACCEPT_LANGUAGE_SPANISH: AcceptLanguage = AcceptLanguage::from_static("es-ES,es;q=0.9");
pub const ACCEPT_LANGUAGE_FRENCH: AcceptLanguage = AcceptLanguage::from_static("fr-FR,fr;q=0.9");
pub const ACCEPT_LANGUAGE_GERMAN: AcceptLanguage = AcceptLanguage::from_static("de-DE,de;q=0.9");
pub const ACCEPT_LANGUAGE_CHINESE: AcceptLanguage = AcceptLanguage::from_static("zh-CN,zh;q=0.9");
pub const ACCEPT_LANGUAGE_JAPANESE: AcceptLanguage = AcceptLanguage::from_static("ja-JP,ja;q=0.9");
pub const ACCEPT_LANGUAGE_UNIVERSAL: AcceptLanguage =
    AcceptLanguage::from_static("en-US,en;q=0.9,*;q=0.5");

// Accept-Encoding
pub const ACCEPT_ENCODING_ALL: AcceptEncoding = AcceptEncoding::from_static("gzip, deflate, br, zstd");
pub const ACCEPT_ENCODING_GZIP: AcceptEncoding = AcceptEncoding::from_static("gzip");
pub const ACCEPT_ENCODING_DEFLATE: AcceptEncoding = AcceptEncoding::from_static("deflate");
pub const ACCEPT_ENCODING_BROTLI: AcceptEncoding = AcceptEncoding::from_static("br");
pub const ACCEPT_ENCODING_ZSTD: AcceptEncoding = AcceptEncoding::from_static("zstd");
pub const ACCEPT_ENCODING_IDENTITY: AcceptEncoding = AcceptEncoding::from_static("identity");

// Cache-Control
pub const CACHE_CONTROL_NO_CACHE: CacheControl = CacheControl::from_static("no-cache");
pub const CACHE_CONTROL_NO_STORE: CacheControl = CacheControl::from_static("no-store");
pub const CACHE_CONTROL_MAX_AGE_0: CacheControl = CacheControl::from_static("max-age=0");
pub const CACHE_CONTROL_MAX_AGE_3600: CacheControl = CacheControl::from_static("max-age=3600");
pub const CACHE_CONTROL_MAX_AGE_86400: CacheControl = CacheControl::from_static("max-age=86400");
pub const CACHE_CONTROL_MUST_REVALIDATE: CacheControl = CacheControl::from_static("must-revalidate");
pub const CACHE_CONTROL_PUBLIC: CacheControl = CacheControl::from_static("public");
pub const CACHE_CONTROL_PRIVATE: CacheControl = CacheControl::from_static("private");
pub const CACHE_CONTROL_IMMUTABLE: CacheControl = CacheControl::from_static("immutable");
pub const CACHE_CONTROL_STALE_WHILE_REVALIDATE: CacheControl =
    CacheControl::from_static("stale-while-revalidate=86400");

// Authorization scheme prefixes. Concatenate the credential after these.
pub const AUTHORIZATION_BEARER_PREFIX: Authorization = Authorization::from_static("Bearer ");
pub const AUTHORIZATION_BASIC_PREFIX: Authorization = Authorization::from_static("Basic ");
pub const AUTHORIZATION_DIGEST_PREFIX: Authorization = Authorization::from_static("Digest ");
pub const AUTHORIZATION_OAUTH_PREFIX: Authorization = Authorization::from_static("OAuth ");
pub const AUTHORIZATION_API_KEY_PREFIX: Authorization = Authorization::from_static("ApiKey ");

// Pragma
pub const PRAGMA_NO_CACHE: Pragma = Pragma::from_static("no-cache");
pub const PRAGMA_PUBLIC: Pragma = Pragma::from_static("public");

// Sec-Fetch-Dest
pub const SEC_FETCH_DEST_EMPTY: SecFetchDest = SecFetchDest::from_static("empty");
pub const SEC_FETCH_DEST_DOCUMENT: SecFetchDest = SecFetchDest::from_static("document");
pub const SEC_FETCH_DEST_IMAGE: SecFetchDest = SecFetchDest::from_static("image");
pub const SEC_FETCH_DEST_SCRIPT: SecFetchDest = SecFetchDest::from_static("script");
pub const SEC_FETCH_DEST_STYLE: SecFetchDest = SecFetchDest::from_static("style");
pub const SEC_FETCH_DEST_AUDIO: SecFetchDest = SecFetchDest::from_static("audio");
pub const SEC_FETCH_DEST_VIDEO: SecFetchDest = SecFetchDest::from_static("video");
pub const SEC_FETCH_DEST_FONT: SecFetchDest = SecFetchDest::from_static("font");
pub const SEC_FETCH_DEST_FRAME: SecFetchDest = SecFetchDest::from_static("frame");
pub const SEC_FETCH_DEST_IFRAME: SecFetchDest = SecFetchDest::from_static("iframe");
pub const SEC_FETCH_DEST_MANIFEST: SecFetchDest = SecFetchDest::from_static("manifest");
pub const SEC_FETCH_DEST_OBJECT: SecFetchDest = SecFetchDest::from_static("object");
pub const SEC_FETCH_DEST_SERVICE_WORKER: SecFetchDest = SecFetchDest::from_static("serviceworker");
pub const SEC_FETCH_DEST_SHARED_WORKER: SecFetchDest = SecFetchDest::from_static("sharedworker");
pub const SEC_FETCH_DEST_WORKER: SecFetchDest = SecFetchDest::from_static("worker");

// Sec-Fetch-Mode
pub const SEC_FETCH_MODE_CORS: SecFetchMode = SecFetchMode::from_static("cors");
pub const SEC_FETCH_MODE_NAVIGATE: SecFetchMode = SecFetchMode::from_static("navigate");
pub const SEC_FETCH_MODE_NO_CORS: SecFetchMode = SecFetchMode::from_static("no-cors");
pub const SEC_FETCH_MODE_SAME_ORIGIN: SecFetchMode = SecFetchMode::from_static("same-origin");
pub const SEC_FETCH_MODE_WEBSOCKET: SecFetchMode = SecFetchMode::from_static("websocket");

// Sec-Fetch-Site
pub const SEC_FETCH_SITE_CROSS_ORIGIN: SecFetchSite = SecFetchSite::from_static("cross-origin");
pub const SEC_FETCH_SITE_SAME_ORIGIN: SecFetchSite = SecFetchSite::from_static("same-origin");
pub const SEC_FETCH_SITE_SAME_SITE: SecFetchSite = SecFetchSite::from_static("same-site");
pub const SEC_FETCH_SITE_NONE: SecFetchSite = SecFetchSite::from_static("none");

// Sec-Fetch-User
pub const SEC_FETCH_USER_TRUE: SecFetchUser = SecFetchUser::from_static("?1");
pub const SEC_FETCH_USER_FALSE: SecFetchUser = SecFetchUser::from_static("?0");

// DNT
pub const DNT_ENABLE: Dnt = Dnt::from_static("1");
pub const DNT_DISABLE: Dnt = Dnt::from_static("0");

// X-Requested-With
pub const X_REQUESTED_WITH_XML_HTTP_REQUEST: XRequestedWith =
    XRequestedWith::from_static("XMLHttpRequest");
pub const X_REQUESTED_WITH_FLASH: XRequestedWith = XRequestedWith::from_static("ShockwaveFlash");

// X-Frame-Options
pub const X_FRAME_OPTIONS_DENY: XFrameOptions = XFrameOptions::from_static("DENY");
pub const X_FRAME_OPTIONS_SAME_ORIGIN: XFrameOptions = XFrameOptions::from_static("SAMEORIGIN");
pub const X_FRAME_OPTIONS_ALLOW_FROM: XFrameOptions = XFrameOptions::from_static("ALLOW-FROM");

// X-Content-Type-Options
pub const X_CONTENT_TYPE_OPTIONS_NO_SNIFF: XContentTypeOptions =
    XContentTypeOptions::from_static("nosniff");

// CORS
pub const ACCESS_CONTROL_ALLOW_ORIGIN_ALL: AccessControlAllowOrigin =
    AccessControlAllowOrigin::from_static("*");
pub const ACCESS_CONTROL_ALLOW_METHODS_ALL: AccessControlAllowMethods =
    AccessControlAllowMethods::from_static("*");
pub const ACCESS_CONTROL_ALLOW_METHODS_COMMON: AccessControlAllowMethods =
    AccessControlAllowMethods::from_static("GET, POST, PUT, DELETE, OPTIONS");
pub const ACCESS_CONTROL_ALLOW_HEADERS_ALL: AccessControlAllowHeaders =
    AccessControlAllowHeaders::from_static("*");
pub const ACCESS_CONTROL_ALLOW_HEADERS_COMMON: AccessControlAllowHeaders =
    AccessControlAllowHeaders::from_static("Content-Type, Authorization, X-Requested-With");
pub const ACCESS_CONTROL_ALLOW_CREDENTIALS_TRUE: AccessControlAllowCredentials =
    AccessControlAllowCredentials::from_static("true");
pub const ACCESS_CONTROL_ALLOW_CREDENTIALS_FALSE: AccessControlAllowCredentials =
    AccessControlAllowCredentials::from_static("false");
pub const ACCESS_CONTROL_MAX_AGE_ONE_HOUR: AccessControlMaxAge =
    AccessControlMaxAge::from_static("3600");
pub const ACCESS_CONTROL_MAX_AGE_ONE_DAY: AccessControlMaxAge =
    AccessControlMaxAge::from_static("86400");

// HTTP methods
pub const METHOD_GET: Method = Method::from_static("GET");
pub const METHOD_POST: Method = Method::from_static("POST");
pub const METHOD_PUT: Method = Method::from_static("PUT");
pub const METHOD_PATCH: Method = Method::from_static("PATCH");
pub const METHOD_DELETE: Method = Method::from_static("DELETE");
pub const METHOD_HEAD: Method = Method::from_static("HEAD");
pub const METHOD_OPTIONS: Method = Method::from_static("OPTIONS");
pub const METHOD_TRACE: Method = Method::from_static("TRACE");
pub const METHOD_CONNECT: Method = Method::from_static("CONNECT");

// Upgrade
pub const UPGRADE_WEBSOCKET: Upgrade = Upgrade::from_static("websocket");
pub const UPGRADE_HTTP2: Upgrade = Upgrade::from_static("h2c");

// Range prefix for byte ranges
pub const RANGE_BYTES_PREFIX: Range = Range::from_static("bytes=");

// Transfer-Encoding
pub const TRANSFER_ENCODING_CHUNKED: TransferEncoding = TransferEncoding::from_static("chunked");
pub const TRANSFER_ENCODING_COMPRESS: TransferEncoding = TransferEncoding::from_static("compress");
pub const TRANSFER_ENCODING_DEFLATE: TransferEncoding = TransferEncoding::from_static("deflate");
pub const TRANSFER_ENCODING_GZIP: TransferEncoding = TransferEncoding::from_static("gzip");
pub const TRANSFER_ENCODING_IDENTITY: TransferEncoding = TransferEncoding::from_static("identity");

// TE
pub const TE_CHUNKED: Te = Te::from_static("chunked");
pub const TE_COMPRESS: Te = Te::from_static("compress");
pub const TE_DEFLATE: Te = Te::from_static("deflate");
pub const TE_GZIP: Te = Te::from_static("gzip");
pub const TE_TRAILERS: Te = Te::from_static("trailers");

// Content-Disposition
pub const CONTENT_DISPOSITION_INLINE: ContentDisposition = ContentDisposition::from_static("inline");
pub const CONTENT_DISPOSITION_ATTACHMENT: ContentDisposition =
    ContentDisposition::from_static("attachment");
pub const CONTENT_DISPOSITION_FORM_DATA: ContentDisposition =
    ContentDisposition::from_static("form-data");

// Common user agents
pub const USER_AGENT_CHROME: UserAgent = UserAgent::from_static(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36",
);
pub const USER_AGENT_FIREFOX: UserAgent = UserAgent::from_static(
    "Mozilla/5.0 (X11; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0",
);
pub const USER_AGENT_SAFARI: UserAgent = UserAgent::from_static(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.2 Safari/605.1.15",
);
pub const USER_AGENT_EDGE: UserAgent = UserAgent::from_static(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36 Edg/139.0.0.0",
);
pub const USER_AGENT_MOBILE: UserAgent = UserAgent::from_static(
    "Mozilla/5.0 (iPhone; CPU iPhone OS 18_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.2 Mobile/15E148 Safari/604.1",
);
pub const USER_AGENT_BOT: UserAgent = UserAgent::from_static(
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
);

// Strict-Transport-Security
pub const STRICT_TRANSPORT_SECURITY_MAX_AGE: StrictTransportSecurity =
    StrictTransportSecurity::from_static("max-age=31536000");
pub const STRICT_TRANSPORT_SECURITY_INCLUDE_SUBDOMAINS: StrictTransportSecurity =
    StrictTransportSecurity::from_static("max-age=31536000; includeSubDomains");
pub const STRICT_TRANSPORT_SECURITY_PRELOAD: StrictTransportSecurity =
    StrictTransportSecurity::from_static("max-age=31536000; includeSubDomains; preload");

// Client hint values
pub const SEC_CH_UA_MOBILE_DESKTOP: SecChUaMobile = SecChUaMobile::from_static("?0");
pub const SEC_CH_UA_MOBILE_MOBILE: SecChUaMobile = SecChUaMobile::from_static("?1");

pub const SEC_CH_UA_PLATFORM_WINDOWS: SecChUaPlatform = SecChUaPlatform::from_static("\"Windows\"");
pub const SEC_CH_UA_PLATFORM_MACOS: SecChUaPlatform = SecChUaPlatform::from_static("\"macOS\"");
pub const SEC_CH_UA_PLATFORM_LINUX: SecChUaPlatform = SecChUaPlatform::from_static("\"Linux\"");
pub const SEC_CH_UA_PLATFORM_ANDROID: SecChUaPlatform = SecChUaPlatform::from_static("\"Android\"");
pub const SEC_CH_UA_PLATFORM_IOS: SecChUaPlatform = SecChUaPlatform::from_static("\"iOS\"");

pub const SEC_CH_PREFERS_COLOR_SCHEME_LIGHT: SecChPrefersColorScheme =
    SecChPrefersColorScheme::from_static("light");
pub const SEC_CH_PREFERS_COLOR_SCHEME_DARK: SecChPrefersColorScheme =
    SecChPrefersColorScheme::from_static("dark");

pub const SEC_CH_PREFERS_REDUCED_MOTION_NO_PREFERENCE: SecChPrefersReducedMotion =
    SecChPrefersReducedMotion::from_static("no-preference");
pub const SEC_CH_PREFERS_REDUCED_MOTION_REDUCE: SecChPrefersReducedMotion =
    SecChPrefersReducedMotion::from_static("reduce");

// Wire names of application headers, for use with custom header maps.
pub const HEADER_API_KEY: &str = ApiKey::NAME;
pub const HEADER_API_VERSION: &str = ApiVersion::NAME;
pub const HEADER_REQUEST_ID: &str = RequestId::NAME;
pub const HEADER_TIMESTAMP: &str = Timestamp::NAME;
pub const HEADER_SIGNATURE: &str = Signature::NAME;
pub const HEADER_NONCE: &str = Nonce::NAME;
pub const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
pub const HEADER_RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";
pub const HEADER_RATE_LIMIT_RESET: &str = "X-RateLimit-Reset";
