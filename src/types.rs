// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core proxy types.
//!
//! This module defines the [`ProxyResolver`] trait and the value types it returns:
//! [`ProxyDescriptor`] and its optional [`ProxyCredentials`].

use url::Url;

use crate::env::BypassList;

/// Resolve proxies.
pub trait ProxyResolver {
    /// Resolve a proxy for the given `url`.
    ///
    /// Return the proxy descriptor to use for `url` or `None` for a direct connection to `url`.
    fn for_url(&self, url: &Url) -> Option<&ProxyDescriptor>;
}

/// Credentials for authenticating against a proxy.
///
/// Extracted from the user-info portion of a proxy URI; both parts are stored percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyCredentials {
    username: String,
    password: String,
}

static_assertions::assert_impl_all!(ProxyCredentials: Send, Sync);

impl ProxyCredentials {
    pub(crate) fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// The percent-decoded username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The percent-decoded password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// A proxy resolved for one target URL scheme.
///
/// Describes where the proxy listens, how to authenticate against it, and for which hosts it must
/// be skipped.  Descriptors are built once from the environment (see
/// [`crate::ProxyRegistry::from_env`]) and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyDescriptor {
    scheme: String,
    host: String,
    port: u16,
    endpoint: Url,
    credentials: Option<ProxyCredentials>,
    bypass: BypassList,
}

static_assertions::assert_impl_all!(ProxyDescriptor: Send, Sync);

impl ProxyDescriptor {
    pub(crate) fn new(
        scheme: String,
        host: String,
        port: u16,
        endpoint: Url,
        credentials: Option<ProxyCredentials>,
        bypass: BypassList,
    ) -> Self {
        Self {
            scheme,
            host,
            port,
            endpoint,
            credentials,
            bypass,
        }
    }

    /// The target URL scheme this proxy serves, e.g. `http`.
    ///
    /// This is the scheme of the URLs routed through the proxy; it also governs the scheme of
    /// [`endpoint`](Self::endpoint), regardless of the scheme the corresponding environment
    /// variable used.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host the proxy listens on.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port the proxy listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The address to dial to reach the proxy, as `scheme://host:port`.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Credentials to authenticate against the proxy, if the environment provided any.
    pub fn credentials(&self) -> Option<&ProxyCredentials> {
        self.credentials.as_ref()
    }

    /// Hosts for which this proxy must be skipped.
    ///
    /// The same list is shared by the descriptors of all schemes; see [`BypassList::from_env`].
    pub fn bypass(&self) -> &BypassList {
        &self.bypass
    }
}
