//! Main application modules.
//!
//! This module turns CLI targets into verdicts and renders them. It is a
//! thin layer over [`crate::security`]; every decision is made there.

pub mod report;
pub mod target;

use log::{debug, warn};
use url::Host;

use crate::error_handling::CheckError;
use crate::security::{
    inspect_host, reserved_range, url_host, AddressVerdict, HostReport, HostResolver,
};

// Re-export public API
pub use report::{RunReport, TargetOutcome};
pub use target::Target;

/// Checks one raw CLI target.
///
/// Never fails: input and resolver errors become an outcome with
/// `private: None` so the remaining targets still run.
pub fn check_target<R: HostResolver>(resolver: &R, raw: &str, resolve_hosts: bool) -> TargetOutcome {
    let target = match Target::parse(raw) {
        Ok(target) => target,
        Err(e) => return failed(raw, "invalid", e),
    };
    debug!("Checking {} '{}'", target.kind(), target);

    let host = match &target {
        Target::Address(addr) => return address_outcome(&target, *addr),
        Target::Url(url) => match url_host(url) {
            Ok(Host::Ipv4(ip)) => return address_outcome(&target, ip.into()),
            Ok(Host::Ipv6(ip)) => return address_outcome(&target, ip.into()),
            Ok(Host::Domain(domain)) => domain,
            Err(e) => return failed(raw, target.kind(), e),
        },
        Target::Hostname(host) => host.clone(),
    };

    if !resolve_hosts {
        return TargetOutcome {
            target: target.to_string(),
            kind: target.kind(),
            private: Some(true),
            addresses: Vec::new(),
            note: Some("not resolved; treated as unsafe".to_string()),
            error: None,
        };
    }

    match inspect_host(resolver, &host) {
        Ok(report) => host_outcome(&target, report),
        Err(e) => failed(raw, target.kind(), e),
    }
}

/// Checks every target in order.
pub fn check_targets<R, I, S>(resolver: &R, targets: I, resolve_hosts: bool) -> RunReport
where
    R: HostResolver,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RunReport {
        outcomes: targets
            .into_iter()
            .map(|t| check_target(resolver, t.as_ref(), resolve_hosts))
            .collect(),
    }
}

fn address_outcome(target: &Target, addr: std::net::IpAddr) -> TargetOutcome {
    let verdict = AddressVerdict::new(addr, reserved_range(addr));
    TargetOutcome {
        target: target.to_string(),
        kind: target.kind(),
        private: Some(verdict.is_private()),
        addresses: vec![verdict],
        note: None,
        error: None,
    }
}

fn host_outcome(target: &Target, report: HostReport) -> TargetOutcome {
    let note = report
        .is_empty()
        .then(|| "resolved to no addresses; treated as unsafe".to_string());
    TargetOutcome {
        target: target.to_string(),
        kind: target.kind(),
        private: Some(report.is_private()),
        addresses: report.addresses,
        note,
        error: None,
    }
}

fn failed(raw: &str, kind: &'static str, error: CheckError) -> TargetOutcome {
    warn!("Could not check '{}': {}", raw.trim(), error);
    TargetOutcome {
        target: raw.trim().to_string(),
        kind,
        private: None,
        addresses: Vec::new(),
        note: None,
        error: Some(error.to_string()),
    }
}
