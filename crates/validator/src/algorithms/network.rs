//! Host classification helpers shared by the url and email fields.

use std::net::{Ipv4Addr, Ipv6Addr};

use url::Host;

/// `host` equals `domain` or is one of its subdomains; ASCII
/// case-insensitive.
#[must_use]
pub fn domain_matches(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.');
    let domain = domain.trim_start_matches('.').trim_end_matches('.');
    if host.eq_ignore_ascii_case(domain) {
        return true;
    }
    host.len() > domain.len()
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
        && host[host.len() - domain.len()..].eq_ignore_ascii_case(domain)
}

/// `localhost`, `*.localhost` or a loopback address.
#[must_use]
pub fn is_localhost<S: AsRef<str>>(host: &Host<S>) -> bool {
    match host {
        Host::Domain(name) => {
            let name = name.as_ref();
            name.eq_ignore_ascii_case("localhost") || domain_matches(name, "localhost")
        }
        Host::Ipv4(ip) => ip.is_loopback(),
        Host::Ipv6(ip) => ip.is_loopback(),
    }
}

fn private_v4(ip: Ipv4Addr) -> bool {
    ip.is_private() || ip.is_link_local() || ip.is_unspecified()
}

fn private_v6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    let unique_local = first & 0xfe00 == 0xfc00;
    let link_local = first & 0xffc0 == 0xfe80;
    unique_local
        || link_local
        || ip.is_unspecified()
        || ip.to_ipv4_mapped().is_some_and(private_v4)
}

/// RFC 1918, link-local and unspecified addresses (and their IPv6
/// counterparts). Loopback is reported by [`is_localhost`] instead.
#[must_use]
pub fn is_private_ip<S: AsRef<str>>(host: &Host<S>) -> bool {
    match host {
        Host::Domain(_) => false,
        Host::Ipv4(ip) => private_v4(*ip),
        Host::Ipv6(ip) => private_v6(*ip),
    }
}

/// The host is a domain whose last label looks like a top-level domain.
#[must_use]
pub fn has_tld<S: AsRef<str>>(host: &Host<S>) -> bool {
    let Host::Domain(name) = host else {
        return false;
    };
    let name = name.as_ref().trim_end_matches('.');
    name.rsplit_once('.').is_some_and(|(_, tld)| {
        tld.len() >= 2 && tld.chars().all(|c| c.is_alphabetic() || c == '-')
    })
}
