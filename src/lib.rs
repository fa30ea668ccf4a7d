//! Reconstruction of HTTP request headers from CGI-style server environments.
//!
//! Gateway interfaces hand an inbound request over as a flat mapping of
//! environment variables (`HTTP_ACCEPT`, `CONTENT_TYPE`, `PHP_AUTH_USER`,
//! `HTTP_AUTHORIZATION`, ...). This crate turns that mapping back into a
//! normalized header mapping, including the authorization credentials that
//! may arrive through several mutually-exclusive conventions.
//!
//! The building blocks are:
//!
//! - [`ParamBag`], an insertion-ordered string key/value container used for
//!   every mapping in the crate,
//! - [`ServerBag`], which wraps the raw environment entries and owns the
//!   header reconstruction in [`ServerBag::headers`],
//! - [`Request`], a thin adapter bundling the per-request bags and deriving
//!   the header bag on capture.
//!
//! ```
//! use httpenv::{ParamBag, ServerBag};
//!
//! let mut server = ServerBag::new(ParamBag::from_iter([
//!     ("HTTP_HOST".to_string(), "example.test".to_string()),
//!     ("HTTP_AUTHORIZATION".to_string(), "Bearer abc123".to_string()),
//! ]));
//!
//! let headers = server.headers();
//! assert_eq!(headers.get("HOST"), Some("example.test"));
//! assert_eq!(headers.get("AUTHORIZATION"), Some("Bearer abc123"));
//! ```

pub mod bag;
pub mod request;

pub use bag::params::ParamBag;
pub use bag::server::ServerBag;
pub use bag::{AuthScheme, auth_scheme_from_value};
pub use request::Request;
