//! Domain-name helpers shared by the line parser and the zone tree.

/// The labels of a dotted name, ignoring a trailing dot and empty labels.
pub(crate) fn labels(name: &str) -> impl DoubleEndedIterator<Item = &str> + '_ {
    name.split_terminator('.').filter(|l| !l.is_empty())
}

/// Is `child` equal to or beneath `parent`? Compared label by label from
/// the right, ASCII case-insensitively. The empty name and `.` contain
/// every name.
pub(crate) fn is_subdomain(parent: &str, child: &str) -> bool {
    let parent: Vec<&str> = labels(parent).collect();
    let child: Vec<&str> = labels(child).collect();

    if parent.len() > child.len() {
        return false;
    }
    parent
        .iter()
        .rev()
        .zip(child.iter().rev())
        .all(|(p, c)| p.eq_ignore_ascii_case(c))
}

/// Expands the short host label of a `.`, `&` or `@` line: a name with no
/// dot becomes `<name>.<sub>.<fqdn>`, anything else is used verbatim.
pub(crate) fn expand_host(fqdn: &str, name: &str, sub: &str) -> String {
    if !name.contains('.') {
        return format!("{}.{}.{}", name, sub, fqdn);
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subdomain() {
        let tests = vec![
            ("example.com", "example.com", true),
            ("example.com", "www.example.com", true),
            ("example.com", "Www.Example.COM", true),
            ("example.com", "example.org", false),
            ("example.com", "com", false),
            // Label boundaries, not string suffixes.
            ("example.com", "badexample.com", false),
            // The root contains everything.
            ("", "anything.at.all", true),
            (".", "anything.at.all", true),
            // Trailing dots are ignored.
            ("example.com.", "www.example.com", true),
        ];

        for (parent, child, want) in tests {
            assert_eq!(
                is_subdomain(parent, child),
                want,
                "is_subdomain({:?}, {:?})",
                parent,
                child
            );
        }
    }

    #[test]
    fn test_expand_host() {
        assert_eq!(expand_host("example", "a", "ns"), "a.ns.example");
        assert_eq!(expand_host("example", "a", "mx"), "a.mx.example");

        // Anything containing a dot is already a host name.
        assert_eq!(expand_host("example", "a.", "ns"), "a.");
        assert_eq!(expand_host("example", "ns1.example.com", "ns"), "ns1.example.com");
    }
}
