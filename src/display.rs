//! Implements the Display trait for records and payloads, so warnings and
//! caller diagnostics read in `dig` style.

use crate::resource::{Record, Resource, CAA, MX, NAPTR, SOA, SRV, SSHFP, TLSA};
use std::fmt;

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{name:<20} {ttl:>4} {class:4} {type:6} {resource}",
            name = self.name,
            ttl = self.ttl.as_secs(),
            class = self.class,
            r#type = self.r#type(),
            resource = self.resource,
        )
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::A(ip) => ip.fmt(f),
            Resource::AAAA(ip) => ip.fmt(f),

            Resource::NS(name) => name.fmt(f),
            Resource::CNAME(name) => name.fmt(f),
            Resource::PTR(name) => name.fmt(f),

            Resource::SOA(soa) => soa.fmt(f),
            Resource::MX(mx) => mx.fmt(f),
            Resource::SRV(srv) => srv.fmt(f),
            Resource::NAPTR(naptr) => naptr.fmt(f),
            Resource::SSHFP(sshfp) => sshfp.fmt(f),
            Resource::TLSA(tlsa) => tlsa.fmt(f),
            Resource::CAA(caa) => caa.fmt(f),

            Resource::TXT(txts) => {
                let output = txts
                    .iter()
                    .map(|txt| match std::str::from_utf8(txt) {
                        Ok(txt) => txt,
                        Err(_e) => "invalid",
                    })
                    .collect::<Vec<&str>>()
                    .join(" ");

                write!(f, "{}", output)
            }
        }
    }
}

impl fmt::Display for MX {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // "10 aspmx.l.google.com."
        write!(
            f,
            "{preference} {exchange}",
            preference = self.preference,
            exchange = self.exchange,
        )
    }
}

impl fmt::Display for SOA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // "ns1.google.com. dns-admin.google.com. 376337657 900 900 1800 60"
        write!(
            f,
            "{mname} {rname} {serial} {refresh} {retry} {expire} {minimum}",
            mname = self.mname,
            rname = self.rname,
            serial = self.serial,
            refresh = self.refresh.as_secs(),
            retry = self.retry.as_secs(),
            expire = self.expire.as_secs(),
            minimum = self.minimum.as_secs(),
        )
    }
}

impl fmt::Display for SRV {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // "5 0 389 ldap.google.com."
        write!(
            f,
            "{priority} {weight} {port} {name}",
            priority = self.priority,
            weight = self.weight,
            port = self.port,
            name = self.name,
        )
    }
}

impl fmt::Display for NAPTR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // "100 50 "s" "SIP+D2U" "" _sip._udp.example.com."
        write!(
            f,
            "{order} {preference} \"{flags}\" \"{service}\" \"{regexp}\" {replacement}",
            order = self.order,
            preference = self.preference,
            flags = self.flags,
            service = self.service,
            regexp = self.regexp,
            replacement = self.replacement,
        )
    }
}

impl fmt::Display for SSHFP {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // "1 1 450c7d19d5da9a3a5b7c19992d1fbde15d8dad34"
        write!(
            f,
            "{algorithm} {type} {fingerprint}",
            algorithm = self.algorithm,
            r#type = self.r#type,
            fingerprint = self.fingerprint,
        )
    }
}

impl fmt::Display for TLSA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // "3 1 1 0c72ac70b745ac19998811b131d662c9ac69dbdbe7cb23e5b514b566"
        write!(
            f,
            "{usage} {selector} {matching_type} {certificate}",
            usage = self.usage,
            selector = self.selector,
            matching_type = self.matching_type,
            certificate = hex::encode(&self.certificate),
        )
    }
}

impl fmt::Display for CAA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // "0 issue "letsencrypt.org""
        write!(
            f,
            "{flag} {tag} \"{value}\"",
            flag = self.flag,
            tag = self.tag,
            value = String::from_utf8_lossy(&self.value),
        )
    }
}
