// Bot configuration, loaded from environment variables and CLI flags.

/// Bot process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name this bot joins the game with.
    pub bot_name: String,
    /// Address to bind the HTTP server to and advertise to the game
    /// server for turn callbacks.
    pub listen_addr: String,
    /// Address of the game server to join.
    pub game_server: String,
    /// Dump received messages as JSON at debug level.
    pub verbose: bool,
}

/// A required configuration value was missing at startup.
#[derive(Debug, thiserror::Error)]
#[error("missing required configuration: {0} (flag {1})")]
pub struct MissingConfig(pub &'static str, pub &'static str);

impl Config {
    /// Load configuration from environment variables and CLI arguments.
    ///
    /// Environment variables:
    /// - `BOT_NAME` - bot name (default: `rust-bot`)
    /// - `LISTEN_ADDR` - address to bind and advertise (required)
    /// - `GAME_SERVER` - game server address (required)
    /// - `BOT_VERBOSE` - set to `true` to log received messages
    ///
    /// CLI flags (take precedence over env vars):
    /// - `--name <NAME>` - bot name
    /// - `--listen <ADDR>` - listen address
    /// - `--server <ADDR>` - game server address
    /// - `--verbose` - verbose message logging
    ///
    /// Missing required values are fatal: the process must not reach
    /// the game without a listen and server address.
    pub fn load() -> Result<Self, MissingConfig> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args)
    }

    fn from_args(args: &[String]) -> Result<Self, MissingConfig> {
        let bot_name = Self::parse_cli_value(args, "--name")
            .or_else(|| std::env::var("BOT_NAME").ok())
            .unwrap_or_else(|| "rust-bot".to_string());

        let listen_addr = Self::parse_cli_value(args, "--listen")
            .or_else(|| std::env::var("LISTEN_ADDR").ok())
            .ok_or(MissingConfig("listen address", "--listen"))?;

        let game_server = Self::parse_cli_value(args, "--server")
            .or_else(|| std::env::var("GAME_SERVER").ok())
            .ok_or(MissingConfig("game server address", "--server"))?;

        let verbose = args.contains(&"--verbose".to_string())
            || std::env::var("BOT_VERBOSE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false);

        Ok(Config {
            bot_name,
            listen_addr,
            game_server,
            verbose,
        })
    }

    /// Parse a CLI flag value like `--listen 0.0.0.0:4000`.
    fn parse_cli_value(args: &[String], flag: &str) -> Option<String> {
        args.windows(2).find_map(|pair| {
            if pair[0] == flag {
                Some(pair[1].clone())
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_flags() {
        let cfg = Config::from_args(&args(&[
            "bot", "--name", "tester", "--listen", "0.0.0.0:4000", "--server", "game:50051",
            "--verbose",
        ]))
        .unwrap();
        assert_eq!(cfg.bot_name, "tester");
        assert_eq!(cfg.listen_addr, "0.0.0.0:4000");
        assert_eq!(cfg.game_server, "game:50051");
        assert!(cfg.verbose);
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_args(&args(&[
            "bot", "--listen", "0.0.0.0:4000", "--server", "game:50051",
        ]))
        .unwrap();
        assert_eq!(cfg.bot_name, "rust-bot");
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_missing_server_is_fatal() {
        // LISTEN_ADDR/GAME_SERVER may leak in from the environment of
        // whoever runs the tests; only assert when they are unset.
        if std::env::var("GAME_SERVER").is_err() {
            let result = Config::from_args(&args(&["bot", "--listen", "0.0.0.0:4000"]));
            assert!(result.is_err());
        }
    }
}
