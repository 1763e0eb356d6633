use crate::error::MdsError;

/// Byte range for a read. Bounds are inclusive, RFC 7233 style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteRange {
    /// The whole object; no `Range` header is sent.
    #[default]
    Full,
    /// From an offset to the end of the object.
    From(u64),
    /// A closed, inclusive range.
    Between(u64, u64),
}

impl ByteRange {
    /// Build a range from a bounds list as the proxy API defines it: zero
    /// bounds is the whole object, one is open-ended, two is a closed
    /// inclusive range. Anything longer is rejected locally, before any
    /// request is issued.
    pub fn from_bounds(bounds: &[u64]) -> Result<Self, MdsError> {
        match bounds {
            [] => Ok(ByteRange::Full),
            [start] => Ok(ByteRange::From(*start)),
            [start, end] => Ok(ByteRange::Between(*start, *end)),
            _ => Err(MdsError::InvalidRange {
                bounds: bounds.len(),
            }),
        }
    }

    /// `Range` header value, if one is needed at all.
    pub fn header_value(&self) -> Option<String> {
        match self {
            ByteRange::Full => None,
            ByteRange::From(start) => Some(format!("bytes={}-", start)),
            ByteRange::Between(start, end) => Some(format!("bytes={}-{}", start, end)),
        }
    }
}
