use strum_macros::{Display, EnumString};

/// The resource-record types this codec understands, tagged with their IANA
/// numeric codes. The numeric form is what the generic `:` line carries on
/// disk; the text form is used for diagnostics.
///
/// When adding a Type, a parsing function must be added in resource.rs and
/// an emit arm in datafile/emit.rs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, Display, EnumString)]
#[allow(clippy::upper_case_acronyms)]
pub enum Type {
    A = 1,
    NS = 2,
    CNAME = 5,
    SOA = 6,
    PTR = 12,   // A domain name pointer
    MX = 15,    // A mail exchange
    TXT = 16,   // Text strings
    AAAA = 28,  // IP6 Address
    SRV = 33,   // Server Selection
    NAPTR = 35, // Naming Authority Pointer [RFC3403]
    SSHFP = 44, // SSH Key Fingerprint [RFC4255]
    TLSA = 52,  // TLSA certificate association [RFC6698]
    CAA = 257,  // Certification Authority Restriction [RFC8659]
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
pub enum Class {
    #[strum(serialize = "IN")]
    Internet = 1, // (IN) The Internet [RFC1035]

    #[strum(serialize = "CS")]
    CsNet = 2, // (CS) The CSNET class (Obsolete)

    #[strum(serialize = "CH")]
    Chaos = 3, // (CH) The Chaos class

    #[strum(serialize = "HS")]
    Hesiod = 4, // (HS)
}
