//! Command-line arguments and grammar configuration

use clap::{Parser, ValueEnum};
use xua::{AppNamePolicy, Grammar, OsFieldPolicy, TrailingField};

/// Parse an X-User-Agent identity string
#[derive(Debug, Parser)]
#[command(name = "xua", version, about)]
pub(crate) struct Cli {
    /// Identity string, e.g. "jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)"
    #[arg(value_name = "USER_AGENT")]
    pub(crate) user_agent: String,

    /// Characters accepted in the app name
    #[arg(long, env = "XUA_APP_NAME", value_enum, default_value_t = AppNameArg::AnyExceptSlash)]
    pub(crate) app_name: AppNameArg,

    /// How the OS field is matched
    #[arg(long, env = "XUA_OS_FIELD", value_enum, default_value_t = OsFieldArg::Split)]
    pub(crate) os_field: OsFieldArg,

    /// Meaning of the last field
    #[arg(long, env = "XUA_TRAILING", value_enum, default_value_t = TrailingArg::Retailer)]
    pub(crate) trailing: TrailingArg,

    /// Output format
    #[arg(long, env = "XUA_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output: OutputFormat,

    /// Log filter directive, overrides RUST_LOG (e.g. "debug" or "xua=trace")
    #[arg(long, env = "XUA_LOG")]
    pub(crate) log_level: Option<String>,
}

impl Cli {
    /// Grammar selected by the policy options
    pub(crate) fn grammar(&self) -> Grammar {
        Grammar::new()
            .with_app_name(self.app_name.into())
            .with_os_field(self.os_field.into())
            .with_trailing(self.trailing.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AppNameArg {
    AnyExceptSlash,
    WordLike,
}

impl From<AppNameArg> for AppNamePolicy {
    fn from(arg: AppNameArg) -> Self {
        match arg {
            AppNameArg::AnyExceptSlash => Self::AnyExceptSlash,
            AppNameArg::WordLike => Self::WordLike,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OsFieldArg {
    Split,
    Combined,
}

impl From<OsFieldArg> for OsFieldPolicy {
    fn from(arg: OsFieldArg) -> Self {
        match arg {
            OsFieldArg::Split => Self::Split,
            OsFieldArg::Combined => Self::Combined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TrailingArg {
    Retailer,
    Others,
}

impl From<TrailingArg> for TrailingField {
    fn from(arg: TrailingArg) -> Self {
        match arg {
            TrailingArg::Retailer => Self::Retailer,
            TrailingArg::Others => Self::Others,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}
