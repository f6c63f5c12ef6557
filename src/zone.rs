//! The zone tree: a trie of domain labels with SOAs at the zone cuts and
//! every other record attached to its nearest enclosing zone.

use crate::name;
use crate::resource::Record;
use tracing::warn;

/// One node of the zone tree. The label is a single domain label; a node's
/// FQDN is its label followed by the labels of its ancestors. Nodes own
/// their children exclusively, so traversal always starts from the root.
#[derive(Debug, Default)]
pub struct ZoneNode {
    pub label: String,
    pub children: Vec<ZoneNode>,
    pub soa: Option<Record>,
    pub records: Vec<Record>,
}

impl ZoneNode {
    /// Inserts an SOA record, creating the path of nodes down to its owner
    /// name. A node holds at most one SOA; a second one replaces the first.
    pub fn add_zone(&mut self, soa: Record) {
        let labels: Vec<String> = name::labels(&soa.name).map(str::to_string).collect();

        let mut node = self;
        for label in labels.iter().rev() {
            let pos = match node
                .children
                .iter()
                .position(|c| c.label.eq_ignore_ascii_case(label))
            {
                Some(pos) => pos,
                None => {
                    node.children.push(ZoneNode {
                        label: label.to_string(),
                        ..Default::default()
                    });
                    node.children.len() - 1
                }
            };
            node = &mut node.children[pos];
        }

        if let Some(old) = &node.soa {
            warn!("replacing SOA for {}: {}", soa.name, old);
        }
        node.soa = Some(soa);
    }

    /// The direct child carrying this label, if any.
    pub fn find_label(&self, label: &str) -> Option<&ZoneNode> {
        self.children
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(label))
    }

    /// Walks towards `fqdn`, TLD first, and returns the deepest node on its
    /// path. The walk stops at the first missing label; a name sharing no
    /// suffix with the tree yields the root itself.
    pub fn find_zone(&self, fqdn: &str) -> &ZoneNode {
        let mut node = self;
        for label in name::labels(fqdn).rev() {
            match node.find_label(label) {
                Some(child) => node = child,
                None => break,
            }
        }
        node
    }

    /// Routes every record to its nearest enclosing zone: the deepest node
    /// on its path that carries an SOA. A record above the highest SOA has
    /// no zone to live in and is dropped.
    pub fn split_records(&mut self, records: Vec<Record>) {
        for record in records {
            match self.zone_cut(&record.name) {
                Some(node) => node.records.push(record),
                None => warn!("no enclosing zone, dropping record: {}", record),
            }
        }
    }

    /// The deepest SOA-carrying node on the path towards `fqdn`.
    fn zone_cut(&mut self, fqdn: &str) -> Option<&mut ZoneNode> {
        let mut path = Vec::new();
        let mut cut_depth = if self.soa.is_some() { Some(0) } else { None };

        let mut node = &*self;
        for label in name::labels(fqdn).rev() {
            match node
                .children
                .iter()
                .position(|c| c.label.eq_ignore_ascii_case(label))
            {
                Some(pos) => {
                    path.push(pos);
                    node = &node.children[pos];
                    if node.soa.is_some() {
                        cut_depth = Some(path.len());
                    }
                }
                None => break,
            }
        }

        let depth = cut_depth?;
        let mut node = self;
        for &pos in &path[..depth] {
            node = &mut node.children[pos];
        }
        Some(node)
    }

    /// Flattens the tree into the record sequence the emitter consumes:
    /// depth-first, SOA before records at each node, children in insertion
    /// order. A zone whose FQDN equals `exclude` contributes neither its
    /// SOA nor its records; its descendant zones are still visited.
    pub fn to_records(&self, exclude: Option<&str>) -> Vec<Record> {
        let mut out = Vec::new();
        self.walk_records("", exclude, &mut out);
        out
    }

    fn walk_records(&self, origin: &str, exclude: Option<&str>, out: &mut Vec<Record>) {
        let fqdn = self.fqdn(origin);

        let excluded = exclude.map_or(false, |e| e.eq_ignore_ascii_case(&fqdn));
        if !excluded {
            if let Some(soa) = &self.soa {
                out.push(soa.clone());
            }
            out.extend(self.records.iter().cloned());
        }

        for child in &self.children {
            child.walk_records(&fqdn, exclude, out);
        }
    }

    /// FQDNs of every node carrying an SOA, in depth-first order.
    pub fn list_zones(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.walk_zones("", &mut out);
        out
    }

    fn walk_zones(&self, origin: &str, out: &mut Vec<String>) {
        let fqdn = self.fqdn(origin);
        if self.soa.is_some() {
            out.push(fqdn.clone());
        }
        for child in &self.children {
            child.walk_zones(&fqdn, out);
        }
    }

    fn fqdn(&self, origin: &str) -> String {
        if self.label.is_empty() {
            origin.to_string()
        } else if origin.is_empty() {
            self.label.clone()
        } else {
            format!("{}.{}", self.label, origin)
        }
    }
}
