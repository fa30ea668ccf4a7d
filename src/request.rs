//! Inbound request capture.
//!
//! A [`Request`] bundles the per-aspect parameter bags of one inbound HTTP
//! request. The header bag is not supplied by the caller; it is derived from
//! the server bag on capture, so the two stay consistent.

use serde::{Deserialize, Serialize};

use crate::bag::params::ParamBag;
use crate::bag::server::ServerBag;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Query string parameters.
    pub query: ParamBag,
    /// Posted form parameters.
    pub form: ParamBag,
    /// Parameters attached by the application (routing results and the like).
    pub attributes: ParamBag,
    /// Cookie pairs as supplied by the caller; no cookie parsing happens here.
    pub cookies: ParamBag,
    /// Raw server/CGI environment entries.
    pub server: ServerBag,
    /// Headers reconstructed from `server` at capture time.
    pub headers: ParamBag,
    /// Raw request body, when one was read.
    pub content: Option<Vec<u8>>,
}

impl Request {
    /// Captures a request from its already-gathered parts.
    ///
    /// Header reconstruction runs here, so a digest write-back performed by
    /// [`ServerBag::headers`] is visible on the returned request's `server`
    /// field.
    pub fn capture(
        query: ParamBag,
        form: ParamBag,
        attributes: ParamBag,
        cookies: ParamBag,
        server: ParamBag,
        content: Option<Vec<u8>>,
    ) -> Self {
        let mut server = ServerBag::new(server);
        let headers = server.headers();

        Self {
            query,
            form,
            attributes,
            cookies,
            server,
            headers,
            content,
        }
    }

    /// Captures a request whose server bag is sourced from the process
    /// environment, the way a CGI gateway hands it over. All other bags start
    /// empty and there is no body.
    pub fn from_env() -> Self {
        Self::capture(
            ParamBag::new(),
            ParamBag::new(),
            ParamBag::new(),
            ParamBag::new(),
            std::env::vars().collect(),
            None,
        )
    }
}
