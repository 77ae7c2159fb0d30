/// Errors raised while decoding a save.
///
/// Every decode variant records the byte offset at which the problem was
/// detected. The decode is all-or-nothing: the first error aborts the parse.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("truncated data at offset {offset}: need {need} bytes, have {have}")]
    TruncatedData { offset: usize, need: usize, have: usize },

    #[error("malformed 7-bit integer at offset {offset}: continuation exceeds {max_bytes} bytes")]
    MalformedVarInt { offset: usize, max_bytes: usize },

    #[error("invalid string encoding at offset {offset}: {source}")]
    InvalidEncoding {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("unsupported variant at offset {offset}: {what}")]
    UnsupportedVariant { offset: usize, what: &'static str },

    #[error("{section} group at offset {offset} references unknown faction {faction_id}")]
    OverlayReference {
        offset: usize,
        section: &'static str,
        faction_id: i32,
    },

    #[error("{section} record at offset {offset} references unknown unit {unit_id}")]
    UnknownUnitReference {
        offset: usize,
        section: &'static str,
        unit_id: i32,
    },

    #[error("negative {section} count {count} at offset {offset}")]
    InvalidCount {
        offset: usize,
        section: &'static str,
        count: i32,
    },

    #[error("trailing data: decode stopped at offset {offset} of {len} bytes")]
    TrailingData { offset: usize, len: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid class table: {0}")]
    ClassTable(#[from] serde_json::Error),
}

impl Error {
    /// Byte offset of a decode failure, `None` for I/O and table errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::TruncatedData { offset, .. }
            | Error::MalformedVarInt { offset, .. }
            | Error::InvalidEncoding { offset, .. }
            | Error::UnsupportedVariant { offset, .. }
            | Error::OverlayReference { offset, .. }
            | Error::UnknownUnitReference { offset, .. }
            | Error::InvalidCount { offset, .. }
            | Error::TrailingData { offset, .. } => Some(*offset),
            Error::Io(_) | Error::ClassTable(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
