//! Parsed identity type

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::errors::{RejectReason, XuaError, XuaResult};

/// A parsed `X-User-Agent` identity
///
/// All six fields are non-empty. A value is only ever produced by a successful
/// parse, or by [`UserAgent::new`] which validates the parts the same way, and is
/// never mutated afterwards.
///
/// `Display` writes the canonical header form
/// `app/version (device, os_name os_version, trailing)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UserAgent {
    app_name: String,
    app_version: String,
    device_model: String,
    os_name: String,
    os_version: String,
    trailing: String,
}

impl UserAgent {
    pub(crate) fn from_fields(
        app_name: &str,
        app_version: &str,
        device_model: &str,
        os_name: &str,
        os_version: &str,
        trailing: &str,
    ) -> Self {
        Self {
            app_name: app_name.to_string(),
            app_version: app_version.to_string(),
            device_model: device_model.to_string(),
            os_name: os_name.to_string(),
            os_version: os_version.to_string(),
            trailing: trailing.to_string(),
        }
    }

    /// Build an identity from its parts
    ///
    /// The parts are formatted into a header value and parsed back with the
    /// default grammar; every field must survive unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`XuaError::MalformedIdentity`] if any part would not survive a
    /// parse, e.g. a device model containing a comma.
    ///
    /// # Examples
    ///
    /// ```
    /// use xua::UserAgent;
    ///
    /// let ua = UserAgent::new("SCT", "1.0.0", "Toshiba T380", "Windows", "11", "Aeon")?;
    /// assert_eq!(ua.to_string(), "SCT/1.0.0 (Toshiba T380, Windows 11, Aeon)");
    ///
    /// assert!(UserAgent::new("SCT", "1.0.0", "Toshiba, T380", "Windows", "11", "Aeon").is_err());
    /// # Ok::<(), xua::XuaError>(())
    /// ```
    pub fn new(
        app_name: impl Into<String>,
        app_version: impl Into<String>,
        device_model: impl Into<String>,
        os_name: impl Into<String>,
        os_version: impl Into<String>,
        trailing: impl Into<String>,
    ) -> XuaResult<Self> {
        let candidate = Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
            device_model: device_model.into(),
            os_name: os_name.into(),
            os_version: os_version.into(),
            trailing: trailing.into(),
        };
        let formatted = candidate.to_header_value();
        let parsed = crate::parse(&formatted)?;
        if parsed == candidate {
            Ok(candidate)
        } else {
            // Every field is bounded by a delimiter, so a shifted boundary means a
            // part smuggled one in.
            Err(XuaError::malformed(&formatted, RejectReason::GrammarMismatch))
        }
    }

    /// Application name
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Dotted numeric application version
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Device model
    #[must_use]
    pub fn device_model(&self) -> &str {
        &self.device_model
    }

    /// Operating system name
    #[must_use]
    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    /// Operating system version, all digits
    #[must_use]
    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    /// Trailing field (retailer or other tag)
    #[must_use]
    pub fn trailing(&self) -> &str {
        &self.trailing
    }

    /// Format back into the canonical header value
    #[must_use]
    pub fn to_header_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}, {} {}, {})",
            self.app_name,
            self.app_version,
            self.device_model,
            self.os_name,
            self.os_version,
            self.trailing
        )
    }
}

impl FromStr for UserAgent {
    type Err = XuaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
