//! Grammar definition for identity strings
//!
//! An identity string has the shape
//!
//! ```text
//! <app>/<version> (<device>, <os name> <os version>, <trailing>)
//! ```
//!
//! | field        | accepted characters                                     |
//! |--------------|---------------------------------------------------------|
//! | `app`        | anything but `/` (or word chars, spaces and dots)        |
//! | `version`    | one to three dot separated groups of ASCII digits        |
//! | `device`     | anything but `,`                                         |
//! | `os name`    | ASCII letters                                            |
//! | `os version` | ASCII digits                                             |
//! | `trailing`   | anything but `)`                                         |
//!
//! Deployments disagree on a few details, so the grammar carries policy flags
//! instead of being forked. The defaults are the strictest OS handling and the
//! most permissive app name handling.
//!
//! All patterns are compiled once and matched with the `regex` crate, which runs
//! in time linear in the input length.

use regex::Regex;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const APP_ANY_EXCEPT_SLASH: &str = r"([^/]+)";
const APP_WORD_LIKE: &str = r"([0-9A-Za-z_\t\n\x0C\r .]+)";
const VERSION: &str = r"([0-9]+(?:\.[0-9]+){0,2})";
const DEVICE: &str = r"([^,]+)";
const OS_SPLIT: &str = r"([A-Za-z]+) ([0-9]+)";
const OS_COMBINED: &str = r"([^,]+)";
const TRAILING: &str = r"([^)]+)";

static ANY_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| compile(APP_ANY_EXCEPT_SLASH, OsFieldPolicy::Split));
static ANY_COMBINED: LazyLock<Regex> =
    LazyLock::new(|| compile(APP_ANY_EXCEPT_SLASH, OsFieldPolicy::Combined));
static WORD_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| compile(APP_WORD_LIKE, OsFieldPolicy::Split));
static WORD_COMBINED: LazyLock<Regex> =
    LazyLock::new(|| compile(APP_WORD_LIKE, OsFieldPolicy::Combined));

fn compile(app: &str, os_field: OsFieldPolicy) -> Regex {
    let os = match os_field {
        OsFieldPolicy::Split => OS_SPLIT,
        OsFieldPolicy::Combined => OS_COMBINED,
    };
    let pattern = format!(r"^{app}/{VERSION} \({DEVICE}, {os}, {TRAILING}\)$");
    Regex::new(&pattern).expect("identity grammar is a valid regex")
}

/// Characters accepted in the app name field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AppNamePolicy {
    /// Any character except `/`
    #[default]
    AnyExceptSlash,
    /// ASCII word characters, ASCII whitespace and `.` only
    WordLike,
}

/// How the OS field is matched and split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OsFieldPolicy {
    /// Name and version are matched directly as `letters space digits`
    #[default]
    Split,
    /// The field is captured whole and split on its first space afterwards.
    ///
    /// Text after the version token (e.g. `Pro 10.0 (Build 19045)`) is accepted
    /// and dropped.
    Combined,
}

/// Meaning of the last field, which only changes how it is labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TrailingField {
    /// Distribution channel or retailer tag
    #[default]
    Retailer,
    /// Free-form miscellaneous tag
    Others,
}

impl TrailingField {
    /// Label used when presenting the field
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Retailer => "retailer",
            Self::Others => "others",
        }
    }
}

/// A configured identity string grammar
///
/// # Examples
///
/// ```
/// use xua::{Grammar, OsFieldPolicy};
///
/// let grammar = Grammar::new().with_os_field(OsFieldPolicy::Combined);
/// let ua = grammar.parse("App-1/0.1.1 (Device-Model, Windows 10 Pro 10.0 (Build 19045), Other)")?;
/// assert_eq!(ua.os_name(), "Windows");
/// assert_eq!(ua.os_version(), "10");
/// # Ok::<(), xua::XuaError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Grammar {
    /// App name character policy
    pub app_name: AppNamePolicy,
    /// OS field policy
    pub os_field: OsFieldPolicy,
    /// Trailing field meaning
    pub trailing: TrailingField,
}

impl Grammar {
    /// Create the default grammar
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the app name policy
    #[must_use]
    pub fn with_app_name(mut self, policy: AppNamePolicy) -> Self {
        self.app_name = policy;
        self
    }

    /// Set the OS field policy
    #[must_use]
    pub fn with_os_field(mut self, policy: OsFieldPolicy) -> Self {
        self.os_field = policy;
        self
    }

    /// Set the meaning of the trailing field
    #[must_use]
    pub fn with_trailing(mut self, trailing: TrailingField) -> Self {
        self.trailing = trailing;
        self
    }

    /// The compiled, anchored pattern for this grammar
    #[must_use]
    pub fn pattern(&self) -> &'static Regex {
        match (self.app_name, self.os_field) {
            (AppNamePolicy::AnyExceptSlash, OsFieldPolicy::Split) => &*ANY_SPLIT,
            (AppNamePolicy::AnyExceptSlash, OsFieldPolicy::Combined) => &*ANY_COMBINED,
            (AppNamePolicy::WordLike, OsFieldPolicy::Split) => &*WORD_SPLIT,
            (AppNamePolicy::WordLike, OsFieldPolicy::Combined) => &*WORD_COMBINED,
        }
    }

    /// Number of capture groups a successful match must produce, excluding the whole match
    #[must_use]
    pub fn capture_count(&self) -> usize {
        match self.os_field {
            OsFieldPolicy::Split => 6,
            OsFieldPolicy::Combined => 5,
        }
    }
}
