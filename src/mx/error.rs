use thiserror::Error;

#[derive(Debug, Error)]
pub enum MxError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    #[error("DNS lookup failed: {source}")]
    Lookup {
        #[source]
        source: trust_dns_resolver::error::ResolveError,
    },
    #[error("lookup worker could not be started: {source}")]
    Worker {
        #[source]
        source: std::io::Error,
    },
    #[error("lookup worker stopped without answering")]
    WorkerLost,
    #[error("deadline elapsed before the lookup completed")]
    DeadlineElapsed,
    /// Neither MX nor host-address resolution produced an answer.
    #[error("mail exchange lookup failed for {domain}")]
    LookupFailed { domain: String },
}

impl MxError {
    pub(crate) fn idna(source: idna::Errors) -> Self {
        Self::IdnaConversion { source }
    }

    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn lookup(source: trust_dns_resolver::error::ResolveError) -> Self {
        Self::Lookup { source }
    }

    pub(crate) fn worker(source: std::io::Error) -> Self {
        Self::Worker { source }
    }

    pub(crate) fn lookup_failed(domain: &str) -> Self {
        Self::LookupFailed {
            domain: domain.to_string(),
        }
    }
}
