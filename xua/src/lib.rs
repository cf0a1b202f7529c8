#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

//! X-User-Agent Identity String Parser
//!
//! This crate parses the structured, single-line identity string that client
//! applications send in the `X-User-Agent` header:
//!
//! ```text
//! jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)
//! ^ app name          ^ ver  ^ device ^ OS      ^ trailing (retailer)
//! ```
//!
//! Parsing is all-or-nothing. Either every field is extracted and validated, or a
//! [`XuaError::MalformedIdentity`] carrying the input is returned.
//!
//! # Features
//!
//! - **Strict grammar**: anchored match, one to three version groups, delimiter
//!   free fields
//! - **Policy flags**: app name character class and OS field handling differ
//!   between deployments, see [`Grammar`]
//! - **Formatting inverse**: [`UserAgent`] implements `Display` in the canonical
//!   header form
//! - **Linear time**: patterns run on the `regex` crate's automata, so hostile
//!   input cannot trigger backtracking blowups
//! - **serde**: optional `Serialize` support behind the `serde` feature
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use xua::parse;
//!
//! let ua = parse("App 1/2.3.1 (Device Model 1, Android 11, Other)")?;
//!
//! assert_eq!(ua.app_name(), "App 1");
//! assert_eq!(ua.device_model(), "Device Model 1");
//! assert_eq!(ua.os_name(), "Android");
//! assert_eq!(ua.os_version(), "11");
//! assert_eq!(ua.to_string(), "App 1/2.3.1 (Device Model 1, Android 11, Other)");
//! # Ok::<(), xua::XuaError>(())
//! ```
//!
//! ## Handling Rejections
//!
//! ```
//! use xua::{RejectReason, UserAgent};
//!
//! let err = "App//1.0.0 (Device, OS 1, X)".parse::<UserAgent>().unwrap_err();
//! assert_eq!(err.reason(), RejectReason::GrammarMismatch);
//! assert_eq!(err.input(), "App//1.0.0 (Device, OS 1, X)");
//! ```
//!
//! ## Legacy Grammar
//!
//! ```
//! use xua::{AppNamePolicy, Grammar, OsFieldPolicy};
//!
//! let legacy = Grammar::new()
//!     .with_app_name(AppNamePolicy::WordLike)
//!     .with_os_field(OsFieldPolicy::Combined);
//!
//! assert!(legacy.parse("ISM Flutter/2.3.1 (Samsung S8 Pro, Android 11, Sugi)").is_ok());
//! assert!(legacy.parse("App-1/10 (Device-Model, Windows 10, Other)").is_err());
//! ```

mod errors;
pub mod grammar;
mod parser;
mod types;

pub use errors::{RejectReason, XuaError, XuaResult};
pub use grammar::{AppNamePolicy, Grammar, OsFieldPolicy, TrailingField};
pub use parser::parse;
pub use types::UserAgent;

/// Name of the HTTP header carrying the identity string
pub const HEADER_NAME: &str = "X-User-Agent";
