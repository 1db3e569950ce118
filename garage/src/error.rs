use std::fmt::{Display, Formatter};

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Error {
    StoreUnavailable(String),
    MalformedRequest,
    MissingParameter(&'static str),
    UnknownMethod,
}
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreUnavailable(reason) => write!(f, "Store unavailable: {reason}"),
            Self::MalformedRequest => write!(f, "Malformed request"),
            Self::MissingParameter(name) => write!(f, "Missing required parameter '{name}'"),
            Self::UnknownMethod => write!(f, "Unknown method"),
        }
    }
}
