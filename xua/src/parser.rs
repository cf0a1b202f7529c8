//! Parser for identity strings

use regex::Captures;

use crate::{
    errors::{RejectReason, XuaError, XuaResult},
    grammar::{Grammar, OsFieldPolicy},
    types::UserAgent,
};

/// Parse an identity string with the default grammar
///
/// The whole input must have the shape
/// `app/version (device, os_name os_version, trailing)`.
///
/// # Errors
///
/// Returns [`XuaError::MalformedIdentity`] carrying the input if it does not
/// match the grammar. No partial result is ever produced.
///
/// # Examples
///
/// ```
/// use xua::parse;
///
/// let ua = parse("jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)")?;
/// assert_eq!(ua.app_name(), "jp.retailai.raicart");
/// assert_eq!(ua.app_version(), "3.9.3");
/// assert_eq!(ua.device_model(), "S-500");
/// assert_eq!(ua.os_name(), "Android");
/// assert_eq!(ua.os_version(), "10");
/// assert_eq!(ua.trailing(), "trial");
///
/// assert!(parse("App/1.0.0.0 (Device, OS 1, X)").is_err());
/// # Ok::<(), xua::XuaError>(())
/// ```
pub fn parse(input: &str) -> XuaResult<UserAgent> {
    Grammar::default().parse(input)
}

impl Grammar {
    /// Parse an identity string with this grammar
    ///
    /// # Errors
    ///
    /// Returns [`XuaError::MalformedIdentity`] if the input does not match, or,
    /// under [`OsFieldPolicy::Combined`], if the OS field cannot be split into an
    /// alphabetic name and a numeric version.
    pub fn parse(&self, input: &str) -> XuaResult<UserAgent> {
        let result = self.parse_inner(input);
        match &result {
            Ok(ua) => tracing::trace!(?ua, "parsed identity string"),
            Err(err) => tracing::debug!(input, reason = %err.reason(), "rejected identity string"),
        }
        result
    }

    fn parse_inner(&self, input: &str) -> XuaResult<UserAgent> {
        let caps = self
            .pattern()
            .captures(input)
            .ok_or_else(|| XuaError::malformed(input, RejectReason::GrammarMismatch))?;

        let app_name = capture(&caps, 1, input)?;
        let app_version = capture(&caps, 2, input)?;
        let device_model = capture(&caps, 3, input)?;

        let (os_name, os_version, trailing) = match self.os_field {
            OsFieldPolicy::Split => (
                capture(&caps, 4, input)?,
                capture(&caps, 5, input)?,
                capture(&caps, 6, input)?,
            ),
            OsFieldPolicy::Combined => {
                let (name, version) = split_os_field(capture(&caps, 4, input)?)
                    .map_err(|reason| XuaError::malformed(input, reason))?;
                (name, version, capture(&caps, 5, input)?)
            }
        };

        Ok(UserAgent::from_fields(
            app_name,
            app_version,
            device_model,
            os_name,
            os_version,
            trailing,
        ))
    }
}

fn capture<'h>(caps: &Captures<'h>, index: usize, input: &str) -> XuaResult<&'h str> {
    caps.get(index)
        .map(|m| m.as_str())
        .ok_or_else(|| XuaError::malformed(input, RejectReason::MissingCapture))
}

/// Split a combined OS field such as `Android 10` or `Windows 10 Pro 10.0`
///
/// The name is everything before the first space and the version is the token
/// after it, up to the next space. Anything after the version is dropped.
fn split_os_field(field: &str) -> Result<(&str, &str), RejectReason> {
    let (name, rest) = field
        .split_once(' ')
        .ok_or(RejectReason::MissingOsVersion)?;
    let version = rest.split(' ').next().unwrap_or_default();

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RejectReason::InvalidOsName);
    }
    if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit()) {
        return Err(RejectReason::InvalidOsVersion);
    }
    Ok((name, version))
}
