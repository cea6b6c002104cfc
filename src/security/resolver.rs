//! Hostname resolution.
//!
//! The checks talk to DNS only through [`HostResolver`], so the
//! empty-result and mixed-result policies can be exercised with a fixed
//! answer instead of the live resolver.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

/// Resolves a hostname to every address the resolver returns for it.
///
/// Implementations return both families and no port information. A
/// successful empty answer is `Ok(vec![])`, not an error; the classifier
/// decides what that means.
pub trait HostResolver {
    /// Looks up `hostname`. Errors are passed to the caller unchanged.
    fn lookup(&self, hostname: &str) -> io::Result<Vec<IpAddr>>;
}

/// The operating system resolver (getaddrinfo).
///
/// The lookup is issued with a numeric port of `0`, so it is address-only:
/// no service database lookup happens and no port is ever part of the answer.
/// The call blocks with no timeout of its own; callers that need one must run
/// it off the critical path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn lookup(&self, hostname: &str) -> io::Result<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = (hostname, 0)
            .to_socket_addrs()?
            .map(|addr| addr.ip())
            .collect();
        log::trace!("System resolver returned {} address(es) for {hostname}", addrs.len());
        Ok(addrs)
    }
}

impl<R: HostResolver + ?Sized> HostResolver for &R {
    fn lookup(&self, hostname: &str) -> io::Result<Vec<IpAddr>> {
        (**self).lookup(hostname)
    }
}
