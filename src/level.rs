use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// Severity of a [`LogMessage`](crate::LogMessage).
///
/// Each level serializes as a distinct negative integer sentinel. The
/// sentinel values are stable wire tokens shared with existing pipeline
/// consumers and carry no ordering of their own; use
/// [`severity`](LogLevel::severity) when a filter needs "warning or above"
/// logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum LogLevel {
    /// Routine operational information.
    Info = -1000,
    /// Diagnostic detail for development and troubleshooting.
    Debug = -1001,
    /// Something unexpected that the application can keep running through.
    Warning = -1002,
    /// A failure the application could not handle.
    Error = -1003,
}

impl LogLevel {
    /// Ordinal rank for threshold filtering: Debug < Info < Warning < Error,
    /// as 0 through 3.
    ///
    /// The wire sentinels do not follow this order, so filters must compare
    /// ranks, never the serialized values.
    pub fn severity(self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warning => 2,
            LogLevel::Error => 3,
        }
    }

    /// The integer sentinel this level serializes as.
    pub fn sentinel(self) -> i32 {
        self as i32
    }

    /// Lowercase level name, as used by text-formatting sinks.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    #[test]
    fn sentinels_are_pairwise_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.sentinel(), b.sentinel());
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn severity_orders_conventionally() {
        assert!(LogLevel::Debug.severity() < LogLevel::Info.severity());
        assert!(LogLevel::Info.severity() < LogLevel::Warning.severity());
        assert!(LogLevel::Warning.severity() < LogLevel::Error.severity());
    }

    #[test_case(LogLevel::Info,    "-1000" ; "info")]
    #[test_case(LogLevel::Debug,   "-1001" ; "debug")]
    #[test_case(LogLevel::Warning, "-1002" ; "warning")]
    #[test_case(LogLevel::Error,   "-1003" ; "error")]
    fn serializes_as_sentinel(level: LogLevel, expected: &'static str) {
        assert_eq!(expected, serde_json::to_string(&level).unwrap());
        let decoded: LogLevel = serde_json::from_str(expected).unwrap();
        assert_eq!(level, decoded);
    }

    #[test]
    fn unknown_sentinel_fails_to_decode() {
        serde_json::from_str::<LogLevel>("-999").unwrap_err();
    }
}
