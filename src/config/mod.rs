pub mod cli;
pub mod env;

use crate::domain::ports::ProbeConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MCP_URL: &str = "https://mcp.supabase.com/mcp";
pub const DEFAULT_PROJECT_REF: &str = "yvcsxadahzrxuptcgtkg";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mcp-probe")]
#[command(about = "Connectivity diagnostics for the Supabase MCP server")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_MCP_URL)]
    pub mcp_url: String,

    #[arg(long, default_value = DEFAULT_PROJECT_REF)]
    pub project_ref: String,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl ProbeConfig for CliConfig {
    fn mcp_url(&self) -> &str {
        &self.mcp_url
    }

    fn project_ref(&self) -> &str {
        &self.project_ref
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("mcp_url", &self.mcp_url)?;
        validation::validate_non_empty_string("project_ref", &self.project_ref)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            mcp_url: DEFAULT_MCP_URL.to_string(),
            project_ref: DEFAULT_PROJECT_REF.to_string(),
            timeout_seconds: 5,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = base_config();
        config.mcp_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_project_ref_rejected() {
        let mut config = base_config();
        config.project_ref = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = base_config();
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
