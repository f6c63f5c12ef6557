//! Decodes one line of a `data` file into resource records.
//!
//! The first byte of a line selects the record kind; the rest is a
//! `:`-separated field list whose layout depends on that sigil. A single
//! line can decode to several records, because the `.`, `&` and `@` forms
//! fold glue (and for `.` the SOA itself) into one line.

use crate::errors::ParseError;
use crate::name;
use crate::octal;
use crate::resource::{parse_aaaa, Record, Resource, CAA, MX, NAPTR, SOA, SRV, SSHFP, TLSA};
use crate::types::Type;
use num_traits::FromPrimitive;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Decodes `line` into zero or more records. Blank lines, comment (`#`)
/// and disabled (`-`) lines, and lines whose owner name falls outside
/// `origin` decode to no records at all.
pub(crate) fn line_to_records(line: &str, origin: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();

    if line.is_empty() {
        return Ok(records);
    }

    let sigil = line.as_bytes()[0] as char;
    if sigil == '#' || sigil == '-' {
        return Ok(records);
    }
    if !line.is_char_boundary(1) {
        return Err(ParseError::UnknownSigil(sigil));
    }

    let fields: Vec<&str> = line[1..].split(':').collect();
    let fqdn = field(&fields, 0);
    let max_field = fields.len() - 1;

    if !name::is_subdomain(origin, fqdn) {
        return Ok(records);
    }

    // The index of the last field each form consumes; anything after it is
    // the timestamp/location extension this codec does not model.
    let ttl_field = match sigil {
        '.' | '&' => {
            // .fqdn:ip:x:ttl
            let nameserver = name::expand_host(fqdn, field(&fields, 2), "ns");
            let ttl = ttl(&fields, 3)?;

            if !field(&fields, 1).is_empty() && name::is_subdomain(origin, &nameserver) {
                records.push(a_record(&nameserver, field(&fields, 1), ttl)?);
            }
            if sigil == '.' {
                records.push(Record::new(
                    fqdn,
                    ttl,
                    Resource::SOA(SOA {
                        mname: nameserver.clone(),
                        rname: format!("hostmaster.{}", fqdn),
                        serial: 0,
                        refresh: Duration::from_secs(0),
                        retry: Duration::from_secs(0),
                        expire: Duration::from_secs(0),
                        minimum: Duration::from_secs(0),
                    }),
                ));
            }
            records.push(Record::new(fqdn, ttl, Resource::NS(nameserver)));
            3
        }

        'Z' => {
            // Zfqdn:mname:rname:ser:ref:ret:exp:min:ttl
            records.push(Record::new(
                fqdn,
                ttl(&fields, 8)?,
                Resource::SOA(SOA {
                    mname: field(&fields, 1).to_string(),
                    rname: field(&fields, 2).to_string(),
                    serial: number::<u32>(&fields, 3, "SOA serial")?,
                    refresh: seconds(&fields, 4, "SOA refresh")?,
                    retry: seconds(&fields, 5, "SOA retry")?,
                    expire: seconds(&fields, 6, "SOA expire")?,
                    minimum: seconds(&fields, 7, "SOA minimum")?,
                }),
            ));
            8
        }

        // TODO: '=' should also synthesise the PTR in the reverse zone.
        '+' | '=' => {
            // +fqdn:ip:ttl
            records.push(a_record(fqdn, field(&fields, 1), ttl(&fields, 2)?)?);
            2
        }

        'C' => {
            // Cfqdn:target:ttl
            records.push(Record::new(
                fqdn,
                ttl(&fields, 2)?,
                Resource::CNAME(field(&fields, 1).to_string()),
            ));
            2
        }

        '@' => {
            // @fqdn:ip:x:dist:ttl
            let ttl = ttl(&fields, 4)?;
            let exchange = name::expand_host(fqdn, field(&fields, 2), "mx");

            if !field(&fields, 1).is_empty() {
                records.push(a_record(&exchange, field(&fields, 1), ttl)?);
            }
            records.push(Record::new(
                fqdn,
                ttl,
                Resource::MX(MX {
                    preference: number::<u16>(&fields, 3, "MX preference")?,
                    exchange,
                }),
            ));
            4
        }

        '^' => {
            // ^fqdn:target:ttl
            records.push(Record::new(
                fqdn,
                ttl(&fields, 2)?,
                Resource::PTR(field(&fields, 1).to_string()),
            ));
            2
        }

        '\'' => {
            // 'fqdn:text:ttl with the text octal-escaped. One line holds
            // one logical string; embedded newlines split it into the
            // character-string list.
            let mut data = octal::de_octal(field(&fields, 1));
            data.retain(|&b| b != b'\r');
            let txt = data.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();

            records.push(Record::new(fqdn, ttl(&fields, 2)?, Resource::TXT(txt)));
            2
        }

        ':' => {
            // :fqdn:type:rdata:ttl
            let code = number::<u16>(&fields, 1, "record type")?;
            if code == 99 {
                info!("ignoring SPF record for {}", fqdn);
                return Ok(records);
            }

            let data = octal::de_octal(field(&fields, 2));
            let resource = match Type::from_u16(code) {
                Some(Type::AAAA) => Resource::AAAA(parse_aaaa(&data)?),
                Some(Type::SRV) => Resource::SRV(SRV::parse(&data)?),
                Some(Type::NAPTR) => Resource::NAPTR(NAPTR::parse(&data)?),
                Some(Type::SSHFP) => Resource::SSHFP(SSHFP::parse(&data)?),
                Some(Type::TLSA) => Resource::TLSA(TLSA::parse(&data)?),
                Some(Type::CAA) => Resource::CAA(CAA::parse(&data)?),
                _ => return Err(ParseError::UnimplementedType(code)),
            };

            records.push(Record::new(fqdn, ttl(&fields, 3)?, resource));
            3
        }

        _ => return Err(ParseError::UnknownSigil(sigil)),
    };

    if max_field > ttl_field {
        warn!(
            "ignoring {} extra trailing fields on '{}' line for {}",
            max_field - ttl_field,
            sigil,
            fqdn
        );
    }

    Ok(records)
}

/// The field at `idx`, with absent fields reading as empty.
fn field<'a>(fields: &[&'a str], idx: usize) -> &'a str {
    fields.get(idx).copied().unwrap_or("")
}

/// Parses a trimmed base-10 unsigned field. Empty and absent fields are 0;
/// anything unparseable, including overflow of the width, is a BadField.
fn number<T>(fields: &[&str], idx: usize, what: &'static str) -> Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseIntError> + Default,
{
    let s = field(fields, idx).trim();
    if s.is_empty() {
        return Ok(T::default());
    }
    s.parse()
        .map_err(|e: std::num::ParseIntError| ParseError::BadField(what, e.to_string()))
}

fn seconds(fields: &[&str], idx: usize, what: &'static str) -> Result<Duration, ParseError> {
    Ok(Duration::from_secs(number::<u32>(fields, idx, what)?.into()))
}

fn ttl(fields: &[&str], idx: usize) -> Result<Duration, ParseError> {
    seconds(fields, idx, "ttl")
}

fn a_record(fqdn: &str, ip: &str, ttl: Duration) -> Result<Record, ParseError> {
    let ip: Ipv4Addr = ip
        .trim()
        .parse()
        .map_err(|e: std::net::AddrParseError| ParseError::BadField("ip", e.to_string()))?;
    Ok(Record::new(fqdn, ttl, Resource::A(ip)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "example.com";

    fn parse(line: &str) -> Vec<Record> {
        line_to_records(line, ORIGIN).expect(line)
    }

    #[test]
    fn test_a() {
        let records = parse("+www.example.com:192.0.2.1:300");
        assert_eq!(
            records,
            vec![Record::new(
                "www.example.com",
                Duration::from_secs(300),
                Resource::A("192.0.2.1".parse().unwrap()),
            )]
        );

        // '=' reads the same as '+' (the PTR side is not modelled).
        assert_eq!(parse("=www.example.com:192.0.2.1:300"), records);
    }

    #[test]
    fn test_soa_ns_line() {
        let records = parse(".example.com:192.0.2.53:a:3600");

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            Record::new(
                "a.ns.example.com",
                Duration::from_secs(3600),
                Resource::A("192.0.2.53".parse().unwrap()),
            )
        );
        assert_eq!(
            records[1],
            Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::SOA(SOA {
                    mname: "a.ns.example.com".to_string(),
                    rname: "hostmaster.example.com".to_string(),
                    serial: 0,
                    refresh: Duration::from_secs(0),
                    retry: Duration::from_secs(0),
                    expire: Duration::from_secs(0),
                    minimum: Duration::from_secs(0),
                }),
            )
        );
        assert_eq!(
            records[2],
            Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::NS("a.ns.example.com".to_string()),
            )
        );
    }

    #[test]
    fn test_ns_line() {
        // No ip, so no glue.
        let records = parse("&example.com::ns1.example.com:3600");
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::NS("ns1.example.com".to_string()),
            )]
        );

        // Glue is only emitted for a nameserver inside the origin.
        let records = parse("&example.com:192.0.2.53:ns1.elsewhere.net:3600");
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].resource,
            Resource::NS("ns1.elsewhere.net".to_string())
        );

        let records = parse("&example.com:192.0.2.53:a:3600");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a.ns.example.com");
    }

    #[test]
    fn test_explicit_soa() {
        let records =
            parse("Zexample.com:ns1.example.com:hostmaster.example.com:2021120801:16384:2048:1048576:2560:3600");
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::SOA(SOA {
                    mname: "ns1.example.com".to_string(),
                    rname: "hostmaster.example.com".to_string(),
                    serial: 2021120801,
                    refresh: Duration::from_secs(16384),
                    retry: Duration::from_secs(2048),
                    expire: Duration::from_secs(1048576),
                    minimum: Duration::from_secs(2560),
                }),
            )]
        );

        // Empty numeric fields default to zero.
        let records = parse("Zexample.com:ns1.example.com:hostmaster.example.com::::::");
        match &records[0].resource {
            Resource::SOA(soa) => {
                assert_eq!(soa.serial, 0);
                assert_eq!(soa.refresh, Duration::from_secs(0));
                assert_eq!(soa.expire, Duration::from_secs(0));
            }
            r => panic!("expected a SOA, got {:?}", r),
        }
        assert_eq!(records[0].ttl, Duration::from_secs(0));
    }

    #[test]
    fn test_cname_and_ptr() {
        assert_eq!(
            parse("Cwww.example.com:example.com:3600"),
            vec![Record::new(
                "www.example.com",
                Duration::from_secs(3600),
                Resource::CNAME("example.com".to_string()),
            )]
        );

        assert_eq!(
            parse("^1.2.0.192.in-addr.arpa.example.com:www.example.com:3600"),
            vec![Record::new(
                "1.2.0.192.in-addr.arpa.example.com",
                Duration::from_secs(3600),
                Resource::PTR("www.example.com".to_string()),
            )]
        );
    }

    #[test]
    fn test_mx() {
        let records = parse("@example.com:192.0.2.25:mail:10:3600");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Record::new(
                "mail.mx.example.com",
                Duration::from_secs(3600),
                Resource::A("192.0.2.25".parse().unwrap()),
            )
        );
        assert_eq!(
            records[1],
            Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::MX(MX {
                    preference: 10,
                    exchange: "mail.mx.example.com".to_string(),
                }),
            )
        );

        // A dotted exchange is verbatim, and no ip means no glue.
        let records = parse("@example.com::mail.example.com:20:3600");
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::MX(MX {
                    preference: 20,
                    exchange: "mail.example.com".to_string(),
                }),
            )]
        );
    }

    #[test]
    fn test_txt() {
        let records = parse("'example.com:v=spf1 \\072 -all:3600");
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::TXT(vec![b"v=spf1 : -all".to_vec()]),
            )]
        );

        // CRs are stripped and LFs split the character-string list.
        let records = parse("'example.com:one\\015\\012two:3600");
        assert_eq!(
            records[0].resource,
            Resource::TXT(vec![b"one".to_vec(), b"two".to_vec()])
        );
    }

    #[test]
    fn test_generic_aaaa() {
        let records = parse(
            ":example.com:28:\\040\\001\\015\\270\\000\\000\\000\\000\\000\\000\\000\\000\\000\\000\\000\\001:3600",
        );
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::AAAA("2001:db8::1".parse().unwrap()),
            )]
        );
    }

    #[test]
    fn test_generic_srv() {
        let records = parse(
            ":example.com:33:\\000\\005\\000\\000\\001\\205\\004ldap\\007example\\003com\\000:3600",
        );
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::SRV(SRV {
                    priority: 5,
                    weight: 0,
                    port: 389,
                    name: "ldap.example.com.".to_string(),
                }),
            )]
        );
    }

    #[test]
    fn test_generic_naptr() {
        let records = parse(
            ":example.com:35:\\000d\\0002\\001s\\007SIP+D2U\\000\\004_sip\\004_udp\\007example\\003com\\000:3600",
        );
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::NAPTR(NAPTR {
                    order: 100,
                    preference: 50,
                    flags: "s".to_string(),
                    service: "SIP+D2U".to_string(),
                    regexp: "".to_string(),
                    replacement: "_sip._udp.example.com.".to_string(),
                }),
            )]
        );
    }

    #[test]
    fn test_generic_sshfp() {
        let records = parse(":example.com:44:\\001\\001\\336\\255\\276\\357:3600");
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::SSHFP(SSHFP {
                    algorithm: 1,
                    r#type: 1,
                    fingerprint: "deadbeef".to_string(),
                }),
            )]
        );
    }

    #[test]
    fn test_generic_tlsa() {
        let records = parse(":example.com:52:\\003\\001\\001\\001\\002\\003:3600");
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::TLSA(TLSA {
                    usage: 3,
                    selector: 1,
                    matching_type: 1,
                    certificate: vec![1, 2, 3],
                }),
            )]
        );
    }

    #[test]
    fn test_generic_caa() {
        let records = parse(":example.com:257:\\000\\005issueletsencrypt.org:3600");
        assert_eq!(
            records,
            vec![Record::new(
                "example.com",
                Duration::from_secs(3600),
                Resource::CAA(CAA {
                    flag: 0,
                    tag: "issue".to_string(),
                    value: b"letsencrypt.org".to_vec(),
                }),
            )]
        );
    }

    #[test]
    fn test_spf_skipped() {
        assert!(parse(":example.com:99:v=spf1 -all:3600").is_empty());
    }

    #[test]
    fn test_skipped_lines() {
        assert!(parse("").is_empty());
        assert!(parse("# a comment").is_empty());
        assert!(parse("-disabled.example.com:192.0.2.1:300").is_empty());

        // Out of origin: silently skipped, not an error.
        assert!(parse("+www.elsewhere.net:192.0.2.1:300").is_empty());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            line_to_records("!example.com:x", ORIGIN),
            Err(ParseError::UnknownSigil('!'))
        ));
        assert!(matches!(
            line_to_records(":example.com:6:whatever:3600", ORIGIN),
            Err(ParseError::UnimplementedType(6))
        ));
        assert!(matches!(
            line_to_records(":example.com:1234:whatever:3600", ORIGIN),
            Err(ParseError::UnimplementedType(1234))
        ));
        assert!(matches!(
            line_to_records("+www.example.com:not-an-ip:300", ORIGIN),
            Err(ParseError::BadField("ip", _))
        ));
        assert!(matches!(
            line_to_records("@example.com::mail:70000:3600", ORIGIN),
            Err(ParseError::BadField("MX preference", _))
        ));
        assert!(matches!(
            line_to_records("+www.example.com:192.0.2.1:4294967296", ORIGIN),
            Err(ParseError::BadField("ttl", _))
        ));
        assert!(matches!(
            line_to_records(":example.com:33:\\000\\005:3600", ORIGIN),
            Err(ParseError::ShortRecord(Type::SRV))
        ));
    }

    #[test]
    fn test_extra_fields_ignored() {
        // The tinydns timestamp/lo extension fields parse but are dropped.
        let records = parse("+www.example.com:192.0.2.1:300:1234567890:lo");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ttl, Duration::from_secs(300));
    }
}
