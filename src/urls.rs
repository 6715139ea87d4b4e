//! URL provenance checking for new source entries.
//!
//! A new version's download URLs must reuse infrastructure the recipe already
//! trusts: every hostname and every scheme of a candidate URL must already
//! appear among the URLs of the old sources snapshot. Hostname and scheme are
//! checked as independent set memberships, not as a bound pair: an old set
//! with host A over http and host B over https accepts host A over https.
//! That matches the historical behavior of this check and is kept on purpose.

use std::collections::HashSet;
use url::Url;

/// Aggregate hostname/scheme sets observed across a list of URLs.
///
/// Build this once per file pair from the old snapshot and reuse it for every
/// added entry.
#[derive(Debug, Clone, Default)]
pub struct UrlProvenance {
    hostnames: HashSet<String>,
    schemes: HashSet<String>,
}

impl UrlProvenance {
    /// Aggregate the hostnames and schemes of the given URLs.
    pub fn from_urls<'a, I>(urls: I) -> Self
    where
        I: IntoIterator<Item = &'a Url>,
    {
        let mut provenance = Self::default();
        for url in urls {
            if let Some(host) = url.host_str() {
                provenance.hostnames.insert(host.to_string());
            }
            provenance.schemes.insert(url.scheme().to_string());
        }
        provenance
    }

    /// Returns true if the URL's hostname and scheme each appear in the
    /// aggregate sets. A URL without a hostname never matches.
    pub fn covers(&self, url: &Url) -> bool {
        let host_known = url
            .host_str()
            .is_some_and(|host| self.hostnames.contains(host));
        host_known && self.schemes.contains(url.scheme())
    }

    /// Returns true if no URLs contributed to the aggregate.
    pub fn is_empty(&self) -> bool {
        self.hostnames.is_empty() && self.schemes.is_empty()
    }
}
