//! Rendering of parsed identities

use serde::ser::Error as _;
use serde_json::Value;
use xua::{TrailingField, UserAgent};

use crate::cli::OutputFormat;

/// Render a parsed identity in the requested format
pub(crate) fn render(
    ua: &UserAgent,
    trailing: TrailingField,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(ua, trailing)),
        OutputFormat::Json => render_json(ua, trailing),
    }
}

fn render_text(ua: &UserAgent, trailing: TrailingField) -> String {
    let rows = [
        ("app_name", ua.app_name()),
        ("app_version", ua.app_version()),
        ("device_model", ua.device_model()),
        ("os_name", ua.os_name()),
        ("os_version", ua.os_version()),
        (trailing.label(), ua.trailing()),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label:<13}{value}\n"));
    }
    out.push_str(&format!("{:<13}{ua}", "formatted"));
    out
}

fn render_json(ua: &UserAgent, trailing: TrailingField) -> serde_json::Result<String> {
    let Value::Object(mut fields) = serde_json::to_value(ua)? else {
        return Err(serde_json::Error::custom("identity did not serialize to an object"));
    };
    if let Some(value) = fields.remove("trailing") {
        fields.insert(trailing.label().to_string(), value);
    }
    fields.insert("formatted".to_string(), Value::String(ua.to_string()));
    serde_json::to_string_pretty(&Value::Object(fields))
}
