#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing or malformed {0}")]
    MissingDate(&'static str),

    #[error("cannot parse {0:?} as a date")]
    InvalidDate(String),

    #[error("ranges do not overlap")]
    NoOverlap,

    #[error("range ends before it starts")]
    ReversedRange,

    #[error("conflicts with existing reservation #{0}")]
    Conflict(usize),

    #[error("no availability window overlaps the request")]
    Unavailable,
}
