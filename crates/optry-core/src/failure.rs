use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Unrecoverable;

/// Shared handle to the error a failure was built from.
pub type Source = Arc<dyn StdError + Send + Sync + 'static>;

/// Discriminator of a raised condition.
///
/// The first group is captured by a Try; the second group is never captured
/// and always escapes the boundary that observed it (see [`crate::classify`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// An I/O operation failed.
    Io,
    /// A caller passed an argument the operation cannot accept.
    InvalidArgument,
    /// A value was read from an empty Optional.
    EmptyValueAccess,
    /// A callback expected to produce a wrapper produced none.
    NullResult,
    /// A filtered value was rejected by its predicate.
    NoSuchElement,
    /// The operation is not defined for this variant.
    UnsupportedOperation,
    /// Text could not be parsed into the requested type.
    Parse,
    /// Recursion exhausted the stack. Recoverable by policy.
    StackOverflow,
    /// Domain-specific kind identified by name.
    Other(String),

    /// Memory could not be allocated.
    OutOfMemory,
    /// The executing task was forced to stop.
    Terminated,
    /// The executing task received a cooperative cancellation request.
    Interrupted,
    /// Required code could not be resolved or linked.
    Linkage,
}

impl FailureKind {
    /// Whether the kind belongs to the built-in fatal group.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::OutOfMemory | Self::Terminated | Self::Interrupted | Self::Linkage
        )
    }

    /// Short name used in textual forms, e.g. `Io` or `Interrupted`.
    pub fn name(&self) -> &str {
        match self {
            Self::Io => "Io",
            Self::InvalidArgument => "InvalidArgument",
            Self::EmptyValueAccess => "EmptyValueAccess",
            Self::NullResult => "NullResult",
            Self::NoSuchElement => "NoSuchElement",
            Self::UnsupportedOperation => "UnsupportedOperation",
            Self::Parse => "Parse",
            Self::StackOverflow => "StackOverflow",
            Self::Other(name) => name.as_str(),
            Self::OutOfMemory => "OutOfMemory",
            Self::Terminated => "Terminated",
            Self::Interrupted => "Interrupted",
            Self::Linkage => "Linkage",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raised condition: a kind, a message, and optionally the error it came from.
///
/// Renders as `Kind` when the message is empty and `Kind: message` otherwise.
/// The source is carried for [`std::error::Error::source`] but is not
/// serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    #[serde(skip)]
    source: Option<Source>,
    #[serde(skip)]
    escaped: bool,
}

impl Failure {
    /// Create a failure with a kind and message.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            escaped: false,
        }
    }

    /// Create a failure with no message.
    pub fn of_kind(kind: FailureKind) -> Self {
        Self::new(kind, String::new())
    }

    /// Wrap an existing error, keeping it as the source.
    pub fn from_error<E>(kind: FailureKind, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind,
            message: error.to_string(),
            source: Some(Arc::new(error)),
            escaped: false,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Io, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidArgument, message)
    }

    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NoSuchElement, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(FailureKind::UnsupportedOperation, message)
    }

    pub fn stack_overflow(message: impl Into<String>) -> Self {
        Self::new(FailureKind::StackOverflow, message)
    }

    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Interrupted, message)
    }

    pub fn terminated(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Terminated, message)
    }

    pub fn out_of_memory(message: impl Into<String>) -> Self {
        Self::new(FailureKind::OutOfMemory, message)
    }

    pub fn linkage(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Linkage, message)
    }

    /// A domain-specific failure identified by `name`.
    pub fn other(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::Other(name.into()), message)
    }

    /// The kind discriminator.
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// The message, possibly empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error this failure was built from, if any.
    pub fn cause(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// Returns `true` once the failure has escaped a Try boundary as
    /// [`Unrecoverable`]. Such a failure stays unrecoverable for every
    /// classifier.
    pub fn has_escaped(&self) -> bool {
        self.escaped
    }

    pub(crate) fn mark_escaped(mut self) -> Self {
        self.escaped = true;
        self
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Failures are equal when kind and message match; sources are ignored.
impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Failure {}

impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        let kind = match error.kind() {
            std::io::ErrorKind::OutOfMemory => FailureKind::OutOfMemory,
            _ => FailureKind::Io,
        };
        Self::from_error(kind, error)
    }
}

impl From<std::num::ParseIntError> for Failure {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::from_error(FailureKind::Parse, error)
    }
}

impl From<std::num::ParseFloatError> for Failure {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::from_error(FailureKind::Parse, error)
    }
}

impl From<std::str::Utf8Error> for Failure {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::from_error(FailureKind::Parse, error)
    }
}

impl From<std::string::FromUtf8Error> for Failure {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::from_error(FailureKind::Parse, error)
    }
}

impl From<std::collections::TryReserveError> for Failure {
    fn from(error: std::collections::TryReserveError) -> Self {
        Self::from_error(FailureKind::OutOfMemory, error)
    }
}

/// Re-raising an escaped failure inside another callback keeps it escaping.
impl From<Unrecoverable> for Failure {
    fn from(error: Unrecoverable) -> Self {
        error.into_failure().mark_escaped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_message_is_kind_name() {
        assert_eq!(Failure::of_kind(FailureKind::Io).to_string(), "Io");
    }

    #[test]
    fn display_with_message() {
        let f = Failure::io("numbers.txt not found");
        assert_eq!(f.to_string(), "Io: numbers.txt not found");
    }

    #[test]
    fn other_kind_displays_its_name() {
        let f = Failure::other("Timeout", "3s elapsed");
        assert_eq!(f.to_string(), "Timeout: 3s elapsed");
        assert_eq!(f.kind().name(), "Timeout");
    }

    #[test]
    fn fatal_group() {
        assert!(FailureKind::OutOfMemory.is_fatal());
        assert!(FailureKind::Terminated.is_fatal());
        assert!(FailureKind::Interrupted.is_fatal());
        assert!(FailureKind::Linkage.is_fatal());
        assert!(!FailureKind::StackOverflow.is_fatal());
        assert!(!FailureKind::Io.is_fatal());
        assert!(!FailureKind::Other("Interrupted".into()).is_fatal());
    }

    #[test]
    fn io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let f = Failure::from(io);
        assert_eq!(f.kind(), &FailureKind::Io);
        assert_eq!(f.message(), "gone");
        assert!(StdError::source(&f).is_some());
    }

    #[test]
    fn io_out_of_memory_maps_to_fatal_kind() {
        let io = std::io::Error::from(std::io::ErrorKind::OutOfMemory);
        assert_eq!(Failure::from(io).kind(), &FailureKind::OutOfMemory);
    }

    #[test]
    fn parse_error_converts() {
        let err = "x".parse::<i32>().unwrap_err();
        let f = Failure::from(err);
        assert_eq!(f.kind(), &FailureKind::Parse);
    }

    #[test]
    fn equality_ignores_source() {
        let a = Failure::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let b = Failure::io("boom");
        assert_eq!(a, b);
        assert_ne!(a, Failure::io("other"));
    }

    #[test]
    fn escaped_marker_survives_round_trip_through_unrecoverable() {
        let f = Failure::io("late");
        assert!(!f.has_escaped());
        let back = Failure::from(Unrecoverable::new(f));
        assert!(back.has_escaped());
        assert_eq!(back.kind(), &FailureKind::Io);
    }

    #[test]
    fn serde_drops_source() {
        let f = Failure::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let json = serde_json::to_string(&f).unwrap();
        let parsed: Failure = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, f);
        assert!(parsed.cause().is_none());
    }
}
