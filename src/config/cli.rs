use crate::config::toml_config::DashboardConfig;
use clap::Parser;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "carrier-dashboard")]
#[command(about = "Web dashboard for a carrier self-service account")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dashboard.toml")]
    pub config: String,

    /// Override server.host from config
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port from config
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn config_exists(&self) -> bool {
        Path::new(&self.config).exists()
    }

    /// 載入設定檔並套用命令列覆蓋。設定檔不存在時使用預設值。
    pub fn load_config(&self) -> crate::Result<DashboardConfig> {
        let mut config = if self.config_exists() {
            DashboardConfig::from_file(&self.config)?
        } else {
            DashboardConfig::default()
        };

        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut DashboardConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }

    /// 描述命令列覆蓋的項目，供日誌初始化後輸出
    pub fn overrides(&self) -> Vec<String> {
        let mut applied = Vec::new();
        if let Some(host) = &self.host {
            applied.push(format!("Host overridden to: {}", host));
        }
        if let Some(port) = self.port {
            applied.push(format!("Port overridden to: {}", port));
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file_values() {
        let args = CliArgs::parse_from(["carrier-dashboard", "--port", "8081", "--host", "127.0.0.1"]);
        let mut config = DashboardConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.bind_address(), "127.0.0.1:8081");
    }

    #[test]
    fn test_overrides_describe_cli_values() {
        let args = CliArgs::parse_from(["carrier-dashboard", "--port", "8081", "--host", "127.0.0.1"]);
        assert_eq!(
            args.overrides(),
            vec![
                "Host overridden to: 127.0.0.1".to_string(),
                "Port overridden to: 8081".to_string(),
            ]
        );

        let plain = CliArgs::parse_from(["carrier-dashboard"]);
        assert!(plain.overrides().is_empty());
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let args = CliArgs::parse_from(["carrier-dashboard", "-c", "/nonexistent/dashboard.toml"]);
        let config = args.load_config().unwrap();
        assert_eq!(config.server.port, 5000);
    }
}
