use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use graphmark_core::client::{
    DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
    GraphClientConfig,
};
use graphmark_core::format::ColumnMarkers;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_VALUE_MARKER: &str = "value";
const DEFAULT_CATEGORY_MARKERS: &str = "type";

#[derive(Parser, Debug)]
#[command(name = "graphmark-mcpd", version, about = "Graphmark MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "GRAPHMARK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "GRAPHMARK_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Upstream request timeout in seconds; 0 disables enforcement.
    #[arg(
        long,
        env = "GRAPHMARK_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,

    /// Substring marking the numeric value column.
    #[arg(long, env = "GRAPHMARK_VALUE_MARKER", default_value = DEFAULT_VALUE_MARKER)]
    value_marker: String,

    /// Comma-separated substrings marking category columns.
    #[arg(
        long,
        env = "GRAPHMARK_CATEGORY_MARKERS",
        value_delimiter = ',',
        default_value = DEFAULT_CATEGORY_MARKERS
    )]
    category_markers: Vec<String>,

    #[arg(
        long = "stdio",
        env = "GRAPHMARK_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "GRAPHMARK_HTTP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "GRAPHMARK_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
pub struct GraphmarkConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub markers: ColumnMarkers,
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub mcp_http_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl GraphmarkConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    /// Connection settings for the fetch client.
    #[must_use]
    pub fn client(&self) -> GraphClientConfig {
        GraphClientConfig::new(self.base_url.clone())
            .with_user_agent(self.user_agent.clone())
            .with_timeout(self.timeout)
    }
}

impl TryFrom<CliArgs> for GraphmarkConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "GRAPHMARK_BASE_URL",
                value: args.base_url,
            });
        }
        if args.value_marker.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "GRAPHMARK_VALUE_MARKER",
                value: args.value_marker,
            });
        }
        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::MissingSetting(
                "transport (enable --stdio or --http-serve)",
            ));
        }

        let timeout = if args.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.timeout_secs))
        };

        let categories: Vec<String> = args
            .category_markers
            .into_iter()
            .filter(|marker| !marker.trim().is_empty())
            .collect();

        Ok(Self {
            base_url: args.base_url,
            user_agent: args.user_agent,
            timeout,
            markers: ColumnMarkers::new(args.value_marker, categories),
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            mcp_http_addr: args.mcp_http_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            value_marker: DEFAULT_VALUE_MARKER.to_string(),
            category_markers: vec![DEFAULT_CATEGORY_MARKERS.to_string()],
            enable_stdio: true,
            http_serve: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
        }
    }

    #[test]
    fn zero_timeout_disables_enforcement() {
        let mut args = base_args();
        args.timeout_secs = 0;

        let config = GraphmarkConfig::try_from(args).expect("config should parse");

        assert!(config.timeout.is_none());
        assert!(config.client().timeout.is_none());
    }

    #[test]
    fn default_timeout_matches_documented_limit() {
        let config = GraphmarkConfig::try_from(base_args()).expect("config should parse");

        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let mut args = base_args();
        args.base_url = "  ".to_string();

        let err = GraphmarkConfig::try_from(args).expect_err("config should be rejected");

        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "GRAPHMARK_BASE_URL",
                ..
            }
        ));
    }

    #[test]
    fn disabling_every_transport_is_rejected() {
        let mut args = base_args();
        args.enable_stdio = false;
        args.http_serve = false;

        let err = GraphmarkConfig::try_from(args).expect_err("config should be rejected");

        assert!(matches!(err, ConfigError::MissingSetting(_)));
    }
}
