use std::collections::HashMap;
use std::sync::RwLock;

use indexmap::IndexMap;
use log::debug;

use crate::options::HeaderOpts;

/// Builds the final header map for outgoing requests.
///
/// A `HeaderBuilder` owns a small set of *basic* headers that appear on
/// every request built through it (a fixed `Host`, an `X-API-Key`, and the
/// like). Per-request headers come in as a [`HeaderOpts`] value on each
/// [`build`](Self::build) call.
///
/// Precedence, lowest to highest: basic headers, set option fields, the
/// client-hint bundle, custom entries. Later passes overwrite same-named
/// keys from earlier ones.
///
/// The basic-header store sits behind a read/write lock, so one builder
/// can be shared across threads: builds run in parallel, and a build
/// always sees the store either before or after a concurrent
/// [`set_basic_header`](Self::set_basic_header), never mid-write.
pub struct HeaderBuilder {
    basic_headers: RwLock<IndexMap<String, String>>,
}

impl HeaderBuilder {
    /// Creates a builder seeded with `basic_headers`. The builder keeps an
    /// independent copy; mutating the caller's map afterwards has no
    /// effect on later builds.
    pub fn new(basic_headers: &HashMap<String, String>) -> HeaderBuilder {
        let mut basics = IndexMap::with_capacity(basic_headers.len());
        for (name, value) in basic_headers {
            basics.insert(name.clone(), value.clone());
        }

        HeaderBuilder {
            basic_headers: RwLock::new(basics),
        }
    }

    /// Sets or replaces one basic header. Unlike option fields, an empty
    /// value is a legal value here and will be emitted as such.
    pub fn set_basic_header(&self, name: impl Into<String>, value: impl Into<String>) -> &Self {
        self.basic_headers
            .write()
            .expect("basic-header lock poisoned")
            .insert(name.into(), value.into());
        self
    }

    /// Removes a basic header. Removing a name that was never set does
    /// nothing.
    pub fn remove_basic_header(&self, name: &str) -> &Self {
        self.basic_headers
            .write()
            .expect("basic-header lock poisoned")
            .shift_remove(name);
        self
    }

    /// Returns the current value of one basic header, if set.
    pub fn basic_header(&self, name: &str) -> Option<String> {
        self.basic_headers
            .read()
            .expect("basic-header lock poisoned")
            .get(name)
            .cloned()
    }

    /// Merges the basic headers with `opts` into a freshly-allocated map.
    ///
    /// The returned map owns its storage: it aliases neither the internal
    /// store nor `opts`, and later builder mutations do not affect it.
    pub fn build(&self, opts: &HeaderOpts) -> IndexMap<String, String> {
        let mut headers = self
            .basic_headers
            .read()
            .expect("basic-header lock poisoned")
            .clone();
        let basic_count = headers.len();

        opts.apply(&mut headers);

        debug!(
            "built {} headers ({} basic, {} custom)",
            headers.len(),
            basic_count,
            opts.custom.len()
        );

        headers
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        HeaderBuilder {
            basic_headers: RwLock::new(IndexMap::new()),
        }
    }
}

/// Builds a header map from `opts` alone, equivalent to a builder with no
/// basic headers.
pub fn build(opts: &HeaderOpts) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();
    opts.apply(&mut headers);
    headers
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::values::statics;

    fn api_key_builder() -> HeaderBuilder {
        let builder = HeaderBuilder::default();
        builder.set_basic_header("X-API-Key", "k1");
        builder
    }

    #[test]
    fn basic_headers_appear_on_every_build() {
        let builder = api_key_builder();

        let headers = builder.build(&HeaderOpts::new());
        assert_eq!(headers.get("X-API-Key").unwrap(), "k1");

        let headers = builder.build(&HeaderOpts::json());
        assert_eq!(headers.get("X-API-Key").unwrap(), "k1");
    }

    #[test]
    fn options_and_basic_headers_merge() {
        let initial = HashMap::from([(String::from("X-API-Key"), String::from("k1"))]);
        let builder = HeaderBuilder::new(&initial);

        let headers = builder.build(
            &HeaderOpts::new()
                .with_content_type("application/json")
                .with_accept("application/json"),
        );

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("X-API-Key").unwrap(), "k1");
        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(headers.get("Accept").unwrap(), "application/json");
    }

    #[test]
    fn option_field_overrides_basic_header() {
        let builder = HeaderBuilder::default();
        builder.set_basic_header("Accept", "text/html");

        let headers = builder.build(&HeaderOpts::new().with_accept(statics::ACCEPT_JSON));

        assert_eq!(headers.get("Accept").unwrap(), "application/json");
    }

    #[test]
    fn custom_overrides_basic_header() {
        let builder = api_key_builder();

        let headers = builder.build(&HeaderOpts::new().with_custom("X-API-Key", "override"));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-API-Key").unwrap(), "override");
    }

    #[test]
    fn custom_outranks_option_fields() {
        let headers = build(
            &HeaderOpts::new()
                .with_user_agent("from-field")
                .with_custom("User-Agent", "from-custom"),
        );

        assert_eq!(headers.get("User-Agent").unwrap(), "from-custom");
    }

    #[test]
    fn empty_option_value_is_skipped() {
        let builder = HeaderBuilder::default();

        let headers = builder.build(&HeaderOpts::new().with_accept(""));

        assert!(!headers.contains_key("Accept"));
        assert!(headers.is_empty());
    }

    #[test]
    fn empty_option_value_never_clears_a_basic_header() {
        let builder = HeaderBuilder::default();
        builder.set_basic_header("Accept", "text/html");

        let headers = builder.build(&HeaderOpts::new().with_accept(""));

        assert_eq!(headers.get("Accept").unwrap(), "text/html");
    }

    #[test]
    fn removing_an_absent_header_is_a_noop() {
        let builder = api_key_builder();
        builder.remove_basic_header("Never-Set");

        let headers = builder.build(&HeaderOpts::new());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-API-Key").unwrap(), "k1");
    }

    #[test]
    fn removing_a_set_header_takes_effect() {
        let builder = api_key_builder();
        builder.remove_basic_header("X-API-Key");

        assert!(builder.build(&HeaderOpts::new()).is_empty());
        assert_eq!(builder.basic_header("X-API-Key"), None);
    }

    #[test]
    fn construction_takes_a_defensive_copy() {
        let mut initial = HashMap::from([(String::from("A"), String::from("1"))]);
        let builder = HeaderBuilder::new(&initial);

        initial.insert(String::from("A"), String::from("2"));
        initial.insert(String::from("B"), String::from("3"));

        let headers = builder.build(&HeaderOpts::new());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("A").unwrap(), "1");
    }

    #[test]
    fn result_is_detached_from_the_store() {
        let builder = api_key_builder();

        let headers = builder.build(&HeaderOpts::new());
        builder.set_basic_header("X-API-Key", "k2");

        assert_eq!(headers.get("X-API-Key").unwrap(), "k1");
    }

    #[test]
    fn client_hint_bundle_is_exactly_four_headers() {
        let builder = HeaderBuilder::default();

        let headers = builder.build(&HeaderOpts::new().with_client_hints());

        assert_eq!(headers.len(), 4);
        assert_eq!(headers.get("Sec-CH-UA").unwrap(), statics::SEC_CH_UA_DEFAULT);
        assert_eq!(
            headers.get("Sec-CH-UA-Platform").unwrap(),
            statics::SEC_CH_UA_PLATFORM_DEFAULT
        );
        assert_eq!(
            headers.get("Sec-CH-UA-Mobile").unwrap(),
            statics::SEC_CH_UA_MOBILE_DEFAULT
        );
        assert_eq!(
            headers.get("Sec-CH-Prefers-Color-Scheme").unwrap(),
            statics::SEC_CH_PREFERS_COLOR_SCHEME_DEFAULT
        );
    }

    #[test]
    fn rebuilding_with_the_same_opts_is_idempotent() {
        let builder = api_key_builder();
        let opts = HeaderOpts::browser().with_custom("X-Trace", "t1");

        assert_eq!(builder.build(&opts), builder.build(&opts));
    }

    #[test]
    fn stateless_build_has_no_basic_headers() {
        let headers = build(&HeaderOpts::json());

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(headers.get("Accept").unwrap(), "application/json");
    }

    #[test]
    fn mutators_chain() {
        let builder = HeaderBuilder::default();
        builder
            .set_basic_header("Host", "api.example.com")
            .set_basic_header("X-API-Key", "k1")
            .remove_basic_header("Host");

        let headers = builder.build(&HeaderOpts::new());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-API-Key").unwrap(), "k1");
    }

    #[test]
    fn empty_string_is_a_legal_basic_header_value() {
        let builder = HeaderBuilder::default();
        builder.set_basic_header("X-Flag", "");

        let headers = builder.build(&HeaderOpts::new());
        assert_eq!(headers.get("X-Flag").unwrap(), "");
    }

    #[test]
    fn concurrent_builds_see_whole_snapshots() {
        let builder = Arc::new(api_key_builder());

        let writer = {
            let builder = Arc::clone(&builder);
            thread::spawn(move || {
                for _ in 0..500 {
                    builder.set_basic_header("X-API-Key", "k2");
                    builder.set_basic_header("X-API-Key", "k1");
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let builder = Arc::clone(&builder);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let headers = builder.build(&HeaderOpts::new());
                        let value = headers
                            .get("X-API-Key")
                            .expect("snapshot lost the basic header");
                        assert!(value == "k1" || value == "k2", "torn value: {value:?}");
                        assert_eq!(headers.len(), 1);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
