use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// A tiny HTTP server answering echo, user-agent and file requests.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Root directory for file server
    #[arg(long, default_value = "./")]
    pub directory: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:4221")]
    pub bind: String,

    /// Maximum log level: trace, debug, info, warn or error
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["mini-http-server"]);

        assert_eq!(config.directory, PathBuf::from("./"));
        assert_eq!(config.bind, "0.0.0.0:4221");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn flags() {
        let config = Config::parse_from([
            "mini-http-server",
            "--directory",
            "/tmp/files",
            "--bind",
            "127.0.0.1:8080",
            "--log-level",
            "debug",
        ]);

        assert_eq!(config.directory, PathBuf::from("/tmp/files"));
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
