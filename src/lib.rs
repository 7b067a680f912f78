// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(warnings, missing_docs, clippy::all)]

//! Resolve HTTP proxies from the environment, once per process.
//!
//! This crate reads the wide-spread `$HTTP_PROXY`, `$HTTPS_PROXY` and `$NO_PROXY` environment
//! variables (in either letter case) and answers, for a given target URL, which proxy to route
//! the request through.  The environment is read lazily on the first lookup and never again; the
//! resulting [`ProxyRegistry`] is immutable for the rest of the process.
//!
//! Proxy configuration is best-effort by design: variables which are unset, empty, or hold an
//! unparseable value simply leave their scheme without a proxy.  No configuration error ever
//! reaches the caller.
//!
//! ## Usage
//!
//! Call [`resolve_proxy_for`] before issuing a request:
//!
//! ```
//! use url::Url;
//!
//! let url = Url::parse("https://example.com/page").unwrap();
//! match env_proxy::resolve_proxy_for(&url) {
//!     Some(proxy) if !proxy.bypass().no_proxy_for(&url) => {
//!         println!("connecting via {}", proxy.endpoint())
//!     }
//!     _ => println!("connecting directly"),
//! }
//! ```
//!
//! The returned [`ProxyDescriptor`] carries the proxy's address, optional percent-decoded
//! credentials, and the [`BypassList`] of hosts which must be fetched directly.  Whether a target
//! host falls under the bypass list is the HTTP client's decision, which is why
//! [`resolve_proxy_for`] returns the descriptor for bypassed hosts too.
//!
//! An HTTP client with its own proxy plumbing can instead hold a dedicated [`EnvProxyResolver`]
//! through the [`ProxyResolver`] trait; see `demos/reqwest.rs` for wiring the resolver into
//! [reqwest](https://docs.rs/reqwest).

use url::Url;

pub mod env;
pub mod registry;
pub mod types;

pub use env::BypassList;
pub use registry::{EnvProxyResolver, ProxyRegistry};
pub use types::{ProxyCredentials, ProxyDescriptor, ProxyResolver};

static RESOLVER: EnvProxyResolver = EnvProxyResolver::new();

/// Resolve the proxy for `url` from the proxy environment variables.
///
/// On the first call this snapshots the environment into the process-wide [`ProxyRegistry`];
/// every later call answers from that snapshot, so changes to the variables after the first call
/// have no effect.  Concurrent first calls initialize the registry exactly once.
///
/// Return the descriptor of the proxy configured for the scheme of `url`, or `None` if that
/// scheme had no usable proxy variable and `url` should be fetched directly.
pub fn resolve_proxy_for(url: &Url) -> Option<&'static ProxyDescriptor> {
    RESOLVER.for_url(url)
}
