use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use fhir_core::loader::DEFAULT_DEFINITIONS_PATH;
use fhir_mcp::DEFAULT_SEARCH_LIMIT;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";

#[derive(Parser, Debug)]
#[command(name = "fhir-mcpd", version, about = "FHIR R5 MCP daemon.")]
struct CliArgs {
    #[arg(
        long,
        env = "FHIR_DEFINITIONS_PATH",
        default_value = DEFAULT_DEFINITIONS_PATH
    )]
    definitions_path: PathBuf,

    #[arg(
        long,
        env = "FHIR_SEARCH_LIMIT",
        default_value_t = DEFAULT_SEARCH_LIMIT
    )]
    search_limit: usize,

    #[arg(
        long = "stdio",
        env = "FHIR_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(long, env = "FHIR_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
pub struct FhirConfig {
    pub definitions_path: PathBuf,
    pub search_limit: usize,
    pub enable_stdio: bool,
    pub mcp_http_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl FhirConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for FhirConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.definitions_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "FHIR_DEFINITIONS_PATH",
                value: args.definitions_path.display().to_string(),
            });
        }
        if args.search_limit == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "FHIR_SEARCH_LIMIT",
                value: args.search_limit.to_string(),
            });
        }

        Ok(Self {
            definitions_path: args.definitions_path,
            search_limit: args.search_limit,
            enable_stdio: args.enable_stdio,
            mcp_http_addr: args.mcp_http_addr,
        })
    }
}
