//! A bidirectional codec between the tinydns `data` file format and an
//! in-memory DNS resource-record model, with a zone tree that groups each
//! record under its nearest enclosing SOA.
//!
//! [`read_data_file`] scans a `data` stream into a [`ZoneNode`] tree;
//! [`write_data_file`] serialises a flat record sequence back into
//! canonical lines. Parsing then emitting reproduces the original record
//! set, octal escapes and all.

mod datafile;
mod display;
mod errors;
mod name;
pub mod octal;
pub mod resource;
pub mod types;
mod zone;

#[macro_use]
extern crate num_derive;

pub use crate::types::*;

// Pull up the various types that should be on the front page of the docs.
#[doc(inline)]
pub use crate::resource::Record;

#[doc(inline)]
pub use crate::resource::Resource;

#[doc(inline)]
pub use crate::zone::ZoneNode;

pub use crate::datafile::{read_data_file, write_data_file};
pub use crate::errors::{ParseError, ReadError, WriteError};
