use serde::{de, ser, Deserialize, Serialize};
use std::fmt;

const ALL_SINKS: &str = "all-loggers";
const NETWORK_ONLY: &str = "network-only";
const CONSOLE_ONLY: &str = "console-only";
const WEB_SERVICE_ONLY: &str = "web-service-only";
const FILE_ONLY: &str = "file-only";
const NO_LOGGING: &str = "no-logging";

/// Routing tag deciding which sinks receive a [`LogMessage`](crate::LogMessage).
///
/// The six well-known routes are understood by every pipeline. Anything else
/// travels as [`Route::Custom`] and is interpreted by pipeline-specific
/// dispatch rules.
///
/// Conversion to and from the wire token is total: [`as_str`](Route::as_str)
/// yields the token, and `From<&str>`/`From<String>` parse one, mapping
/// unknown tokens to `Custom`. Parsing is canonical, so a `Custom` carrying a
/// well-known token normalizes to the well-known variant on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Route to every configured sink.
    AllSinks,
    /// Route to the network sink only.
    NetworkOnly,
    /// Route to the console sink only.
    ConsoleOnly,
    /// Route to the web-service sink only.
    WebServiceOnly,
    /// Route to the file sink only.
    FileOnly,
    /// Suppress delivery to any sink.
    NoLogging,
    /// A pipeline-specific routing token.
    Custom(String),
}

impl Route {
    /// The wire token for this route.
    pub fn as_str(&self) -> &str {
        match self {
            Route::AllSinks => ALL_SINKS,
            Route::NetworkOnly => NETWORK_ONLY,
            Route::ConsoleOnly => CONSOLE_ONLY,
            Route::WebServiceOnly => WEB_SERVICE_ONLY,
            Route::FileOnly => FILE_ONLY,
            Route::NoLogging => NO_LOGGING,
            Route::Custom(token) => token,
        }
    }
}

impl From<&str> for Route {
    fn from(token: &str) -> Self {
        match token {
            ALL_SINKS => Route::AllSinks,
            NETWORK_ONLY => Route::NetworkOnly,
            CONSOLE_ONLY => Route::ConsoleOnly,
            WEB_SERVICE_ONLY => Route::WebServiceOnly,
            FILE_ONLY => Route::FileOnly,
            NO_LOGGING => Route::NoLogging,
            _ => Route::Custom(token.to_string()),
        }
    }
}

impl From<String> for Route {
    fn from(token: String) -> Self {
        match token.as_str() {
            ALL_SINKS => Route::AllSinks,
            NETWORK_ONLY => Route::NetworkOnly,
            CONSOLE_ONLY => Route::ConsoleOnly,
            WEB_SERVICE_ONLY => Route::WebServiceOnly,
            FILE_ONLY => Route::FileOnly,
            NO_LOGGING => Route::NoLogging,
            _ => Route::Custom(token),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Route {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Route::from)
    }
}
