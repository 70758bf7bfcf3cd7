use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

use bon::Builder;
use serde::{Deserialize, Serialize};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The API answered with a non-successful status and an error envelope
    Api,
    /// The payload was not valid JSON, did not match the schema, or carried a malformed temporal literal
    Decode,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    #[must_use]
    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Returns the API error envelope if this error was produced by a non-successful response.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        self.downcast_ref::<ApiError>()
    }

    pub fn decode<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Decode {
            path: path.into(),
            message: message.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Error envelope returned by the API alongside a 4xx or 5xx status.
///
/// Key error handling off [`error`](Self::error): it is a stable constant such as
/// `VENUE_AND_ONLINE` that does not change with locale. The description is meant for
/// developers and is neither localized nor suitable for end users. The status code
/// mirrors the HTTP status of the response.
///
/// <https://www.eventbrite.com/platform/api#/introduction/errors>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[non_exhaustive]
pub struct ApiError {
    #[builder(into, default)]
    pub error: String,
    #[builder(into, default)]
    pub error_description: String,
    #[builder(default)]
    pub status_code: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Eventbrite API: [Status code - {}] {}",
            self.status_code, self.error_description
        )
    }
}

impl StdError for ApiError {}

/// A payload that could not be mapped onto the requested type.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decode {
    /// Dotted path to the offending field, `.` for the document root
    pub path: String,
    pub message: String,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode `{}`: {}", self.path, self.message)
    }
}

impl StdError for Decode {}

/// A date or datetime literal that does not match its fixed wire layout.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTemporal {
    pub input: String,
    pub layout: &'static str,
}

impl MalformedTemporal {
    pub(crate) fn new<S: Into<String>>(input: S, layout: &'static str) -> Self {
        Self {
            input: input.into(),
            layout,
        }
    }
}

impl fmt::Display for MalformedTemporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed temporal literal {:?}, expected layout {}",
            self.input, self.layout
        )
    }
}

impl StdError for MalformedTemporal {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::with_source(Kind::Api, err)
    }
}

impl From<Decode> for Error {
    fn from(err: Decode) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

impl From<MalformedTemporal> for Error {
    fn from(err: MalformedTemporal) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        Error::decode(path, err.into_inner().to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::with_source(Kind::Internal, e)
        } else {
            Error::with_source(Kind::Decode, e)
        }
    }
}
