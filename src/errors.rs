use crate::types::Type;
use std::io;
use thiserror::Error;

/// A fatal error decoding a single line.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The leading byte of the line selects no record kind.
    #[error("unknown record type '{0}'")]
    UnknownSigil(char),

    /// A generic `:` line names a numeric type outside the registry.
    #[error("unimplemented record type {0}")]
    UnimplementedType(u16),

    /// A field failed to parse, or overflowed its width.
    #[error("bad {0} field: {1}")]
    BadField(&'static str, String),

    /// The decoded RDATA is shorter than the type's fixed prefix.
    #[error("short {0} record data")]
    ShortRecord(Type),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A [`ParseError`] tagged with the 1-based line it came from.
#[derive(Error, Debug)]
#[error("line {line}: {source}")]
pub struct ReadError {
    pub line: usize,
    pub source: ParseError,
}

/// A fatal error serialising records back to lines.
#[derive(Error, Debug)]
pub enum WriteError {
    /// An SSHFP fingerprint that is not valid hex cannot be emitted.
    #[error("bad sshfp fingerprint: {0}")]
    BadFingerprint(#[from] hex::FromHexError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
