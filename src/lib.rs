//! # mimicry | realistic HTTP header sets made simple
//!
//! Mimicry is a `rust` library for assembling realistic HTTP header maps
//! (browser-mimicking navigations, JSON APIs, CORS preflights) without
//! hand-typing strings. It ships a typed catalog of well-known header
//! values and a builder that merges reusable basic headers with
//! per-request options into one final map.
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use mimicry::builder::HeaderBuilder;
//! use mimicry::options::HeaderOpts;
//!
//! let builder = HeaderBuilder::new(&HashMap::from([
//!     (String::from("X-API-Key"), String::from("k1")),
//! ]));
//!
//! let headers = builder.build(&HeaderOpts::json().with_bearer_token("t0ken"));
//!
//! assert_eq!(headers.get("X-API-Key").unwrap(), "k1");
//! assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
//! assert_eq!(headers.get("Authorization").unwrap(), "Bearer t0ken");
//! ```
//!
//! Precedence is fixed, highest last: basic headers, then the set fields
//! of [`HeaderOpts`](options::HeaderOpts), then the client-hint bundle,
//! then custom entries. An empty option value counts as not provided and
//! never clears a basic header.
//!
//! Mimicry builds maps; it does not send them. Hand the result to whatever
//! HTTP client you use. Header names and values are passed through
//! verbatim, with no validation of HTTP grammar.

#![deny(unused_crate_dependencies)]

/// Main module that contains the `HeaderBuilder` struct and its methods.
pub mod builder;

/// Per-request header options and their fluent setters.
pub mod options;

/// Typed header values and the constant catalog.
pub mod values;

mod presets;
