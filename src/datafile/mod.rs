//! Reading and writing whole `data` files.
//!
//! A read scans the stream line by line in file order: SOAs shape the zone
//! tree as they arrive, everything else is held back until the scan
//! finishes and is then routed to its nearest enclosing zone. A write is
//! the mirror image, one line per record in sequence order, and rewriting
//! the flattened output of a read reproduces it byte for byte.

pub(crate) mod emit;
pub(crate) mod parse;

use crate::errors::{ReadError, WriteError};
use crate::resource::Record;
use crate::zone::ZoneNode;
use std::io::{BufRead, Write};
use tracing::warn;

/// Scans a `data` file into a zone tree.
///
/// `origin` is the domain the file is understood to describe; lines owned
/// by names outside it are skipped. Pass `"."` to accept every line. The
/// first fatal line error abandons the scan and is returned with its
/// 1-based line number.
pub fn read_data_file<R: BufRead>(origin: &str, reader: R) -> Result<ZoneNode, ReadError> {
    let mut root = ZoneNode::default();
    let mut pending = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReadError {
            line: index + 1,
            source: e.into(),
        })?;

        let records = parse::line_to_records(&line, origin).map_err(|source| ReadError {
            line: index + 1,
            source,
        })?;

        for record in records {
            if record.is_soa() {
                root.add_zone(record);
            } else {
                pending.push(record);
            }
        }
    }

    if root.list_zones().is_empty() && !pending.is_empty() {
        warn!("data file for {} carries no SOA; every record is rootless", origin);
    }
    root.split_records(pending);

    Ok(root)
}

/// Writes records as `data` lines, one per record, in sequence order.
///
/// `origin` is accepted for parity with [`read_data_file`] but plays no
/// part in emission.
pub fn write_data_file<W: Write>(
    mut writer: W,
    records: &[Record],
    _origin: &str,
) -> Result<(), WriteError> {
    for record in records {
        writeln!(writer, "{}", record.to_line()?)?;
    }
    Ok(())
}
