//! Data model for sink-routed logging pipelines.
//!
//! A pipeline accepts [`LogMessage`] values at the log call-site, reads their
//! [`Route`] to decide which sinks receive them (console, file, network,
//! web service, all of them, or none), and reads the remaining fields for
//! formatting and output. This crate holds only the data model and its
//! construction, encoding and duplication capabilities; dispatching,
//! filtering, formatting and transport live in the pipeline crates that
//! consume it.
//!
//! # Usage
//!
//! Construct messages with the level shorthands and hand them to a pipeline:
//!
//! ```rust
//! use routed_log::{LogLevel, LogMessage, Route};
//!
//! // Goes to every configured sink.
//! let msg = LogMessage::warning("disk nearly full");
//! assert_eq!(msg.route, Some(Route::AllSinks));
//! assert_eq!(msg.level, LogLevel::Warning);
//!
//! // Goes to the console sink only.
//! let msg = LogMessage::debug_routed("cache warmed", Route::ConsoleOnly);
//! ```
//!
//! Attach metadata and pick everything explicitly with the general factory:
//!
//! ```rust
//! use routed_log::{LogLevel, LogMessage, Properties, Route};
//!
//! let mut user_info = Properties::new();
//! user_info.insert("request_id".into(), "d2c9".into());
//! user_info.insert("attempt".into(), 3.into());
//!
//! let msg = LogMessage::new(
//!     "upstream timed out",
//!     Some(Route::NetworkOnly),
//!     LogLevel::Error,
//!     Some(user_info),
//! );
//! ```
//!
//! Messages encode to a JSON document and decode back without losing any
//! field:
//!
//! ```rust
//! use routed_log::LogMessage;
//!
//! # fn main() -> Result<(), routed_log::Error> {
//! let msg = LogMessage::info("listening on :8080");
//! let encoded = msg.to_json()?;
//! assert_eq!(LogMessage::from_json(&encoded)?, msg);
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

mod error;
mod level;
mod message;
mod route;
mod value;

pub use error::Error;
pub use level::LogLevel;
pub use message::LogMessage;
pub use route::Route;
pub use value::{Properties, Value};
