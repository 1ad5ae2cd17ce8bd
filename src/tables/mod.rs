//! Domain classification tables.
//!
//! Every table is an immutable [`DomainSet`]. The built-in sets are compiled in
//! with `phf`; callers can replace any of them with sets loaded at start-up
//! (see [`load_domain_list`]). Nothing mutates a table once it is built, so a
//! [`ClassificationTables`] value can be shared freely between threads.

mod blacklist;
mod disposable;
mod free;
mod loader;
mod tlds;

pub use loader::{load_domain_list, parse_domain_list};

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Read-only set of lowercase strings.
#[derive(Clone)]
pub struct DomainSet {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Static(&'static phf::Set<&'static str>),
    Owned(Arc<HashSet<String>>),
}

impl DomainSet {
    fn from_static(set: &'static phf::Set<&'static str>) -> Self {
        Self {
            inner: Inner::Static(set),
        }
    }

    /// Builds a set from caller data. Entries are lowercased; blank ones are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_ascii_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect::<HashSet<_>>();
        Self {
            inner: Inner::Owned(Arc::new(set)),
        }
    }

    /// Exact membership test. The key must already be lowercase.
    pub fn contains(&self, key: &str) -> bool {
        match &self.inner {
            Inner::Static(set) => set.contains(key),
            Inner::Owned(set) => set.contains(key),
        }
    }

    pub fn len(&self) -> usize {
        match &self.inner {
            Inner::Static(set) => set.len(),
            Inner::Owned(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for DomainSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner {
            Inner::Static(_) => "builtin",
            Inner::Owned(_) => "loaded",
        };
        f.debug_struct("DomainSet")
            .field("kind", &kind)
            .field("len", &self.len())
            .finish()
    }
}

/// The four domain tables plus the local-part blacklist.
#[derive(Debug, Clone)]
pub struct ClassificationTables {
    pub disposable: DomainSet,
    /// Two-label suffixes; matched against the last two labels of longer domains.
    pub disposable_wildcard: DomainSet,
    pub free_provider: DomainSet,
    pub tlds: DomainSet,
    pub blacklist: DomainSet,
}

impl ClassificationTables {
    /// Tables compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            disposable: DomainSet::from_static(&disposable::DISPOSABLE),
            disposable_wildcard: DomainSet::from_static(&disposable::DISPOSABLE_WILDCARD),
            free_provider: DomainSet::from_static(&free::FREE_PROVIDERS),
            tlds: DomainSet::from_static(&tlds::TLDS),
            blacklist: DomainSet::from_static(&blacklist::BLACKLIST),
        }
    }

    /// Domains with more than two labels are matched on their last two labels
    /// against the wildcard table; shorter ones exactly against the disposable table.
    pub fn is_disposable(&self, domain: &str) -> bool {
        match wildcard_suffix(domain) {
            Some(suffix) => self.disposable_wildcard.contains(suffix),
            None => self.disposable.contains(domain),
        }
    }

    pub fn is_free_provider(&self, domain: &str) -> bool {
        self.free_provider.contains(domain)
    }

    pub fn is_valid_tld(&self, tld: &str) -> bool {
        self.tlds.contains(tld)
    }

    /// Case-insensitive.
    pub fn is_blacklisted(&self, local: &str) -> bool {
        self.blacklist.contains(&local.to_lowercase())
    }
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Last two labels of `domain`, or `None` when it has two labels or fewer.
fn wildcard_suffix(domain: &str) -> Option<&str> {
    let mut dots = domain.rmatch_indices('.').map(|(idx, _)| idx);
    let _last = dots.next()?;
    let second = dots.next()?;
    Some(&domain[second + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_suffix_needs_three_labels() {
        assert_eq!(wildcard_suffix("10mail.org"), None);
        assert_eq!(wildcard_suffix("things.10mail.org"), Some("10mail.org"));
        assert_eq!(wildcard_suffix("a.b.10mail.org"), Some("10mail.org"));
        assert_eq!(wildcard_suffix("localhost"), None);
    }

    #[test]
    fn disposable_exact_and_wildcard() {
        let tables = ClassificationTables::builtin();
        assert!(tables.is_disposable("bcaoo.com"));
        assert!(tables.is_disposable("10mail.org"));
        assert!(tables.is_disposable("things.10mail.org"));
        assert!(tables.is_disposable("things.more.10mail.org"));
        assert!(!tables.is_disposable("gmail.com"));
        assert!(!tables.is_disposable("example.com"));
    }

    #[test]
    fn subdomain_of_exact_only_entry_is_not_disposable() {
        let tables = ClassificationTables {
            disposable: DomainSet::from_entries(["throwaway.test"]),
            disposable_wildcard: DomainSet::from_entries(Vec::<String>::new()),
            ..ClassificationTables::builtin()
        };
        assert!(tables.is_disposable("throwaway.test"));
        assert!(!tables.is_disposable("inbox.throwaway.test"));
    }

    #[test]
    fn free_provider_is_exact() {
        let tables = ClassificationTables::builtin();
        assert!(tables.is_free_provider("gmail.com"));
        assert!(!tables.is_free_provider("mail.gmail.com"));
    }

    #[test]
    fn tld_lookup() {
        let tables = ClassificationTables::builtin();
        assert!(tables.is_valid_tld("com"));
        assert!(tables.is_valid_tld("org"));
        assert!(tables.is_valid_tld("fr"));
        assert!(!tables.is_valid_tld("invalidtld"));
        assert!(!tables.is_valid_tld(""));
    }

    #[test]
    fn blacklist_ignores_case() {
        let tables = ClassificationTables::builtin();
        assert!(tables.is_blacklisted("abuse"));
        assert!(tables.is_blacklisted("PostMaster"));
        assert!(!tables.is_blacklisted("alice"));
    }

    #[test]
    fn owned_set_lowercases_entries() {
        let set = DomainSet::from_entries(["Example.COM", "  ", "other.net "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("example.com"));
        assert!(set.contains("other.net"));
        assert!(!set.is_empty());
    }
}
