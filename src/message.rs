use crate::{Error, LogLevel, Properties, Route};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single log event travelling through a pipeline.
///
/// The record is immutable by convention: fields are public for pipelines to
/// read (and for tests to build fixtures), but nothing is expected to change
/// after the factory call. Identity is all fields taken together, which is
/// what the derived `PartialEq` compares. `Clone` is a deep copy; mutating a
/// clone never affects the original.
///
/// The crate offers no thread-safety guarantee beyond what the field types
/// provide: distinct instances can be built and read concurrently without
/// coordination, while sharing one mutable instance across threads is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMessage {
    /// Human-readable log content. May be empty.
    pub message: String,

    /// Routing tag. `None` means unspecified routing, left to the pipeline's
    /// default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,

    /// Creation time, taken at the factory call.
    pub time_stamp: DateTime<Utc>,

    /// Free-form metadata. `None` means no metadata attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Properties>,

    /// Severity.
    pub level: LogLevel,
}

impl LogMessage {
    /// General factory. Stores the inputs as given and stamps the message
    /// with the current time. Never fails; empty message text is permitted.
    pub fn new(
        message: impl Into<String>,
        route: Option<Route>,
        level: LogLevel,
        user_info: Option<Properties>,
    ) -> Self {
        Self {
            message: message.into(),
            route,
            time_stamp: Utc::now(),
            user_info,
            level,
        }
    }

    /// An [`Info`](LogLevel::Info) message routed to every sink.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Some(Route::AllSinks), LogLevel::Info, None)
    }

    /// A [`Debug`](LogLevel::Debug) message routed to every sink.
    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(message, Some(Route::AllSinks), LogLevel::Debug, None)
    }

    /// A [`Warning`](LogLevel::Warning) message routed to every sink.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Some(Route::AllSinks), LogLevel::Warning, None)
    }

    /// An [`Error`](LogLevel::Error) message routed to every sink.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Some(Route::AllSinks), LogLevel::Error, None)
    }

    /// An [`Info`](LogLevel::Info) message with an explicit route.
    pub fn info_routed(message: impl Into<String>, route: Route) -> Self {
        Self::new(message, Some(route), LogLevel::Info, None)
    }

    /// A [`Debug`](LogLevel::Debug) message with an explicit route.
    pub fn debug_routed(message: impl Into<String>, route: Route) -> Self {
        Self::new(message, Some(route), LogLevel::Debug, None)
    }

    /// A [`Warning`](LogLevel::Warning) message with an explicit route.
    pub fn warning_routed(message: impl Into<String>, route: Route) -> Self {
        Self::new(message, Some(route), LogLevel::Warning, None)
    }

    /// An [`Error`](LogLevel::Error) message with an explicit route.
    pub fn error_routed(message: impl Into<String>, route: Route) -> Self {
        Self::new(message, Some(route), LogLevel::Error, None)
    }

    /// Encode to a JSON document preserving every field.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Encode)
    }

    /// Decode a document produced by [`to_json`](LogMessage::to_json).
    /// Decoding an encoded message yields a field-for-field equal record.
    pub fn from_json(encoded: &str) -> Result<Self, Error> {
        serde_json::from_str(encoded).map_err(Error::Decode)
    }
}
