use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::geometry::GeometryError;
use crate::impl_err;
use crate::index::IndexError;
use crate::options::OptionError;

/// The piece of externally supplied context a decode step required
/// but was not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingContext {
    /// A geometry was present, but no shape format was known to read it with.
    ShapeFormat,
    /// A route or match was assembled without its originating options.
    Options,
}

#[derive(Debug)]
pub enum DirectionsError {
    /// An option list carried a token outside its vocabulary.
    InvalidOption(OptionError),
    MissingContext(MissingContext),
    Geometry(GeometryError),
    /// The payload is not valid JSON, or is missing required fields.
    Json(serde_json::Error),
    /// An index set referenced a position outside its universe.
    InvalidIndex(IndexError),
    /// The service responded, but with a non-`Ok` code.
    Api {
        code: String,
        message: Option<String>,
    },
}

impl_err!(OptionError, InvalidOption);
impl_err!(GeometryError, Geometry);
impl_err!(serde_json::Error, Json);
impl_err!(IndexError, InvalidIndex);
impl_err!(MissingContext, MissingContext);

impl Display for MissingContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingContext::ShapeFormat => write!(f, "no shape format to decode geometry with"),
            MissingContext::Options => write!(f, "no request options to assemble against"),
        }
    }
}

impl Display for DirectionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectionsError::InvalidOption(err) => write!(f, "invalid option: {err}"),
            DirectionsError::MissingContext(missing) => write!(f, "missing context: {missing}"),
            DirectionsError::Geometry(err) => write!(f, "invalid geometry: {err}"),
            DirectionsError::Json(err) => write!(f, "invalid payload: {err}"),
            DirectionsError::InvalidIndex(err) => write!(f, "invalid index: {err}"),
            DirectionsError::Api {
                code,
                message: Some(message),
            } => write!(f, "service returned {code}: {message}"),
            DirectionsError::Api {
                code,
                message: None,
            } => write!(f, "service returned {code}"),
        }
    }
}

impl Error for DirectionsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DirectionsError::InvalidOption(err) => Some(err),
            DirectionsError::Geometry(err) => Some(err),
            DirectionsError::Json(err) => Some(err),
            DirectionsError::InvalidIndex(err) => Some(err),
            DirectionsError::MissingContext(_) | DirectionsError::Api { .. } => None,
        }
    }
}
