use std::net::IpAddr;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};
use trust_dns_resolver::Resolver;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::system_conf::read_system_conf;

use super::{Deadline, Error, MailHost, MxRecord};

/// DNS queries needed by the mail-exchange check. Implementations block for at
/// most `timeout`; callers never rely on that and enforce the deadline themselves.
pub trait LookupMailHost: Send + Sync {
    fn lookup_mx(&self, domain: &str, timeout: Duration) -> Result<Vec<MxRecord>, Error>;
    fn lookup_host(&self, domain: &str, timeout: Duration) -> Result<Vec<IpAddr>, Error>;
}

/// Queries the nameservers from the system configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    fn build(timeout: Duration) -> Result<Resolver, Error> {
        let (config, opts) = system_conf()?;
        Resolver::new(config, with_timeout(opts, timeout)).map_err(Error::resolver_init)
    }
}

/// `/etc/resolv.conf` (or platform equivalent), read once per process.
fn system_conf() -> Result<(ResolverConfig, ResolverOpts), Error> {
    static CONF: OnceLock<(ResolverConfig, ResolverOpts)> = OnceLock::new();
    if let Some(conf) = CONF.get() {
        return Ok(conf.clone());
    }
    let conf = read_system_conf().map_err(Error::resolver_init)?;
    Ok(CONF.get_or_init(|| conf).clone())
}

/// One attempt per query, bounded by the time left.
pub(crate) fn with_timeout(mut opts: ResolverOpts, timeout: Duration) -> ResolverOpts {
    opts.timeout = timeout.max(Duration::from_millis(1));
    opts.attempts = 1;
    opts
}

impl LookupMailHost for SystemResolver {
    fn lookup_mx(&self, domain: &str, timeout: Duration) -> Result<Vec<MxRecord>, Error> {
        let resolver = Self::build(timeout)?;
        let lookup = resolver.mx_lookup(domain).map_err(Error::lookup)?;
        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
            .collect())
    }

    fn lookup_host(&self, domain: &str, timeout: Duration) -> Result<Vec<IpAddr>, Error> {
        let resolver = Self::build(timeout)?;
        let lookup = resolver.lookup_ip(domain).map_err(Error::lookup)?;
        Ok(lookup.iter().collect())
    }
}

/// Confirms that `domain` can receive mail: MX first, then the implicit MX
/// (A/AAAA of the domain itself). Returns [`Error::DeadlineElapsed`] as soon as
/// `deadline` passes, even if the underlying query is still running.
///
/// The lookup runs on a detached `mx-lookup` thread. After a timeout that thread
/// may outlive the call until the resolver's own per-query timeout (the time
/// that was left when each query started) expires; its answer is discarded.
pub fn check_mail_exchange(
    lookup: Arc<dyn LookupMailHost>,
    domain: &str,
    deadline: Deadline,
) -> Result<MailHost, Error> {
    let ascii = normalize_domain(domain)?;
    if deadline.is_elapsed() {
        return Err(Error::DeadlineElapsed);
    }

    let (tx, rx) = mpsc::channel();
    let worker_domain = ascii.clone();
    thread::Builder::new()
        .name("mx-lookup".into())
        .spawn(move || {
            // le récepteur peut avoir abandonné
            let _ = tx.send(resolve_with(lookup.as_ref(), &worker_domain, deadline));
        })
        .map_err(Error::worker)?;

    match rx.recv_timeout(deadline.remaining()) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            debug!(domain = %ascii, "mail exchange lookup timed out");
            Err(Error::DeadlineElapsed)
        }
        Err(RecvTimeoutError::Disconnected) => Err(Error::WorkerLost),
    }
}

pub(crate) fn resolve_with(
    lookup: &dyn LookupMailHost,
    ascii_domain: &str,
    deadline: Deadline,
) -> Result<MailHost, Error> {
    match lookup.lookup_mx(ascii_domain, deadline.remaining()) {
        Ok(mut records) if !records.is_empty() => {
            records.sort();
            records.dedup();
            trace!(domain = ascii_domain, count = records.len(), "MX records found");
            return Ok(MailHost::Exchangers(records));
        }
        Ok(_) => debug!(domain = ascii_domain, "empty MX answer, trying host lookup"),
        Err(err) => debug!(domain = ascii_domain, error = %err, "MX lookup failed, trying host lookup"),
    }

    if deadline.is_elapsed() {
        return Err(Error::DeadlineElapsed);
    }

    match lookup.lookup_host(ascii_domain, deadline.remaining()) {
        Ok(addrs) if !addrs.is_empty() => Ok(MailHost::Addresses(addrs)),
        Ok(_) => Err(Error::lookup_failed(ascii_domain)),
        Err(err) => {
            debug!(domain = ascii_domain, error = %err, "host lookup failed");
            Err(Error::lookup_failed(ascii_domain))
        }
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}
