use crate::errors::ParseError;
use crate::octal;
use crate::types::{Class, Type};
use std::convert::TryInto;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

/// IPv4 Address (A) record.
pub type A = Ipv4Addr;

/// IPv6 Address (AAAA) record.
#[allow(clippy::upper_case_acronyms)]
pub type AAAA = Ipv6Addr;

/// Name Server (NS) record delegating to the given authoritative name
/// server.
pub type NS = String;

/// Canonical name (CNAME) record, for aliasing one name to another.
#[allow(clippy::upper_case_acronyms)]
pub type CNAME = String;

/// Pointer (PTR) record, most commonly used for reverse DNS lookups.
#[allow(clippy::upper_case_acronyms)]
pub type PTR = String;

/// Text (TXT) record: a list of character-strings. Arbitrary octets,
/// never assumed UTF-8.
#[allow(clippy::upper_case_acronyms)]
pub type TXT = Vec<Vec<u8>>;

/// A single DNS resource record.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Absolute owner name.
    pub name: String,

    pub class: Class,

    /// The number of seconds that the resource record may be cached.
    pub ttl: Duration,

    pub resource: Resource,
}

impl Record {
    pub fn new(name: impl Into<String>, ttl: Duration, resource: Resource) -> Record {
        Record {
            name: name.into(),
            class: Class::Internet,
            ttl,
            resource,
        }
    }

    /// The wire type of this record's payload.
    pub fn r#type(&self) -> Type {
        match self.resource {
            Resource::A(_) => Type::A,
            Resource::AAAA(_) => Type::AAAA,
            Resource::NS(_) => Type::NS,
            Resource::CNAME(_) => Type::CNAME,
            Resource::PTR(_) => Type::PTR,
            Resource::MX(_) => Type::MX,
            Resource::SOA(_) => Type::SOA,
            Resource::TXT(_) => Type::TXT,
            Resource::SRV(_) => Type::SRV,
            Resource::NAPTR(_) => Type::NAPTR,
            Resource::SSHFP(_) => Type::SSHFP,
            Resource::TLSA(_) => Type::TLSA,
            Resource::CAA(_) => Type::CAA,
        }
    }

    pub fn is_soa(&self) -> bool {
        matches!(self.resource, Resource::SOA(_))
    }
}

/// The type-specific payload of a [`Record`].
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Resource {
    A(A),
    AAAA(AAAA),
    NS(NS),
    CNAME(CNAME),
    PTR(PTR),
    MX(MX),
    SOA(SOA),
    TXT(TXT),
    SRV(SRV),
    NAPTR(NAPTR),
    SSHFP(SSHFP),
    TLSA(TLSA),
    CAA(CAA),
}

/// Mail EXchanger (MX) record specifying the mail server responsible for
/// accepting email on behalf of the owner name.
#[derive(Clone, Debug, PartialEq)]
pub struct MX {
    /// The preference given to this RR among others at the same owner.
    /// Lower values are preferred.
    pub preference: u16,

    /// A host willing to act as a mail exchange for the owner name.
    pub exchange: String,
}

/// Start of Authority (SOA) record delimiting a zone. See [rfc1035].
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct SOA {
    /// The name server that is the primary source of data for this zone.
    pub mname: String,

    /// The mailbox of the person responsible for this zone.
    pub rname: String,

    pub serial: u32,

    pub refresh: Duration,
    pub retry: Duration,
    pub expire: Duration,
    pub minimum: Duration,
}

/// Service (SRV) record, containing hostname and port information of
/// specified services. See [rfc2782].
///
/// [rfc2782]: https://datatracker.ietf.org/doc/html/rfc2782
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct SRV {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub name: String,
}

/// Naming Authority Pointer (NAPTR) record. See [rfc3403].
///
/// [rfc3403]: https://datatracker.ietf.org/doc/html/rfc3403
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct NAPTR {
    pub order: u16,
    pub preference: u16,
    pub flags: String,
    pub service: String,
    pub regexp: String,
    pub replacement: String,
}

/// SSH public key fingerprint (SSHFP) record. The fingerprint is held as
/// lower-case hex; the wire form carries the raw digest bytes.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct SSHFP {
    pub algorithm: u8,
    pub r#type: u8,
    pub fingerprint: String,
}

/// TLSA certificate association record. See [rfc6698].
///
/// [rfc6698]: https://datatracker.ietf.org/doc/html/rfc6698
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct TLSA {
    pub usage: u8,
    pub selector: u8,
    pub matching_type: u8,
    pub certificate: Vec<u8>,
}

/// Certification Authority Authorization (CAA) record. See [rfc8659].
///
/// [rfc8659]: https://datatracker.ietf.org/doc/html/rfc8659
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct CAA {
    pub flag: u8,
    pub tag: String,
    pub value: Vec<u8>,
}

pub(crate) fn parse_aaaa(data: &[u8]) -> Result<AAAA, ParseError> {
    if data.len() < 16 {
        return Err(ParseError::ShortRecord(Type::AAAA));
    }

    // unwrap is safe due to the outer bounds check.
    let octets: [u8; 16] = data[..16].try_into().unwrap();
    Ok(AAAA::from(octets))
}

impl SRV {
    /// Parses the decoded RDATA of a `:fqdn:33:...` line.
    pub(crate) fn parse(data: &[u8]) -> Result<SRV, ParseError> {
        if data.len() < 7 {
            return Err(ParseError::ShortRecord(Type::SRV));
        }

        Ok(SRV {
            priority: octal::byte_to_uint16(&data[0..2]),
            weight: octal::byte_to_uint16(&data[2..4]),
            port: octal::byte_to_uint16(&data[4..6]),
            name: octal::unpack_name(&data[6..]),
        })
    }
}

impl NAPTR {
    /// Parses the decoded RDATA of a `:fqdn:35:...` line: two u16s, three
    /// length-prefixed character-strings, then the packed replacement name.
    pub(crate) fn parse(data: &[u8]) -> Result<NAPTR, ParseError> {
        if data.len() < 4 {
            return Err(ParseError::ShortRecord(Type::NAPTR));
        }

        let order = octal::byte_to_uint16(&data[0..2]);
        let preference = octal::byte_to_uint16(&data[2..4]);

        let mut rest = &data[4..];
        let mut texts = [String::new(), String::new(), String::new()];
        for text in texts.iter_mut() {
            let (label, r) =
                octal::unpack_string(rest).ok_or(ParseError::ShortRecord(Type::NAPTR))?;
            *text = text_field(label, "NAPTR string")?;
            rest = r;
        }
        let [flags, service, regexp] = texts;

        Ok(NAPTR {
            order,
            preference,
            flags,
            service,
            regexp,
            replacement: octal::unpack_name(rest),
        })
    }
}

impl SSHFP {
    pub(crate) fn parse(data: &[u8]) -> Result<SSHFP, ParseError> {
        if data.len() < 2 {
            return Err(ParseError::ShortRecord(Type::SSHFP));
        }

        Ok(SSHFP {
            algorithm: data[0],
            r#type: data[1],
            fingerprint: hex::encode(&data[2..]),
        })
    }
}

impl TLSA {
    pub(crate) fn parse(data: &[u8]) -> Result<TLSA, ParseError> {
        if data.len() < 3 {
            return Err(ParseError::ShortRecord(Type::TLSA));
        }

        Ok(TLSA {
            usage: data[0],
            selector: data[1],
            matching_type: data[2],
            certificate: data[3..].to_vec(),
        })
    }
}

impl CAA {
    pub(crate) fn parse(data: &[u8]) -> Result<CAA, ParseError> {
        if data.len() < 2 {
            return Err(ParseError::ShortRecord(Type::CAA));
        }

        let tag_len = 2 + data[1] as usize;
        if data.len() < tag_len {
            return Err(ParseError::ShortRecord(Type::CAA));
        }

        Ok(CAA {
            flag: data[0],
            tag: text_field(&data[2..tag_len], "CAA tag")?,
            value: data[tag_len..].to_vec(),
        })
    }
}

fn text_field(b: &[u8], what: &'static str) -> Result<String, ParseError> {
    String::from_utf8(b.to_vec()).map_err(|e| ParseError::BadField(what, e.to_string()))
}
