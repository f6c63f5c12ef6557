//! Serialises records back into their canonical `data` lines.

use crate::errors::WriteError;
use crate::octal;
use crate::resource::{Record, Resource};

impl Record {
    /// The canonical data-file line for this record, without the trailing
    /// newline. Every line the parser produced re-parses to the same
    /// record; the only way this fails is an SSHFP fingerprint that is not
    /// valid hex.
    pub fn to_line(&self) -> Result<String, WriteError> {
        let name = &self.name;
        let ttl = self.ttl.as_secs();

        Ok(match &self.resource {
            Resource::SOA(soa) => {
                // Zfqdn:mname:rname:ser:ref:ret:exp:min:ttl
                // A zero serial is written as an empty field, so a rewrite
                // never pins a serial the source file left unset.
                let serial = match soa.serial {
                    0 => String::new(),
                    s => s.to_string(),
                };
                format!(
                    "Z{}:{}:{}:{}:{}:{}:{}:{}:{}",
                    name,
                    soa.mname,
                    soa.rname,
                    serial,
                    soa.refresh.as_secs(),
                    soa.retry.as_secs(),
                    soa.expire.as_secs(),
                    soa.minimum.as_secs(),
                    ttl
                )
            }

            Resource::A(ip) => format!("+{}:{}:{}", name, ip, ttl),

            Resource::AAAA(ip) => format!(
                ":{}:28:{}:{}",
                name,
                octal::octal_field(&ip.octets()),
                ttl
            ),

            Resource::NS(target) => format!("&{}::{}:{}", name, target, ttl),

            Resource::CNAME(target) => format!("C{}:{}:{}", name, target, ttl),

            Resource::MX(mx) => {
                format!("@{}::{}:{}:{}", name, mx.exchange, mx.preference, ttl)
            }

            Resource::PTR(target) => format!("^{}:{}:{}", name, target, ttl),

            Resource::TXT(txt) => format!(
                "'{}:{}:{}",
                name,
                octal::octal_field(&txt.join(&b'\n')),
                ttl
            ),

            Resource::SRV(srv) => format!(
                ":{}:33:{}{}{}{}:{}",
                name,
                octal::uint16_to_octal(srv.priority),
                octal::uint16_to_octal(srv.weight),
                octal::uint16_to_octal(srv.port),
                octal::name_to_octal_pack(&srv.name),
                ttl
            ),

            Resource::NAPTR(naptr) => format!(
                ":{}:35:{}{}\\{:03o}{}\\{:03o}{}\\{:03o}{}{}:{}",
                name,
                octal::uint16_to_octal(naptr.order),
                octal::uint16_to_octal(naptr.preference),
                naptr.flags.len(),
                naptr.flags,
                naptr.service.len(),
                octal::escape_string(&naptr.service),
                naptr.regexp.len(),
                octal::escape_string(&naptr.regexp),
                octal::name_to_octal_pack(&naptr.replacement),
                ttl
            ),

            Resource::SSHFP(sshfp) => {
                let fingerprint = hex::decode(&sshfp.fingerprint)?;
                format!(
                    ":{}:44:\\{:03o}\\{:03o}{}:{}",
                    name,
                    sshfp.algorithm,
                    sshfp.r#type,
                    octal::octal_field(&fingerprint),
                    ttl
                )
            }

            Resource::TLSA(tlsa) => format!(
                ":{}:52:\\{:03o}\\{:03o}\\{:03o}{}:{}",
                name,
                tlsa.usage,
                tlsa.selector,
                tlsa.matching_type,
                octal::octal_field(&tlsa.certificate),
                ttl
            ),

            Resource::CAA(caa) => format!(
                ":{}:257:\\{:03o}\\{:03o}{}{}:{}",
                name,
                caa.flag,
                caa.tag.len(),
                caa.tag,
                octal::octal_field(&caa.value),
                ttl
            ),
        })
    }
}
