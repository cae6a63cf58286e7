use clap::Parser;

/// Runtime configuration, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "bingochain", version, about = "BingoChain front-end server")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: String,
    /// Number of actix worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Base URL of the lottery backend API.
    #[arg(long, env = "BACKEND_API_URL", default_value = "http://localhost:3500/api/v1")]
    pub backend_url: String,
    /// JSON-RPC endpoint of the blockchain node.
    #[arg(long, env = "WEB3_PROVIDER_URL", default_value = "http://localhost:8545")]
    pub rpc_url: String,
    #[arg(long, env = "CHAIN_ID", default_value_t = 1337)]
    pub chain_id: u64,
    #[arg(long, env = "GAS_LIMIT", default_value_t = 6_721_975)]
    pub gas_limit: u64,
    #[arg(long, env = "GAS_PRICE", default_value_t = 20_000_000_000)]
    pub gas_price: u64,
    /// Deployed bingo contract, empty when not yet deployed.
    #[arg(long, env = "CRYPTO_BINGO_CONTRACT_ADDRESS", default_value = "")]
    pub contract: String,
    /// Secret used to sign wallet session tokens.
    #[arg(long, env = "SECRET_KEY")]
    pub secret: Option<String>,
    /// Origins allowed by CORS.
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://127.0.0.1:3000"
    )]
    pub origins: Vec<String>,
}

impl Config {
    /// Key material for wallet session tokens. Without `SECRET_KEY` a fresh
    /// random key is drawn on every call, so sessions die with the process.
    pub fn secret(&self) -> Vec<u8> {
        match self.secret.as_deref() {
            Some(secret) => secret.as_bytes().to_vec(),
            None => {
                log::warn!("SECRET_KEY not set, wallet sessions will not survive a restart");
                rand::random::<[u8; 32]>().to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_stack() {
        let config = Config::try_parse_from(["bingochain"]).unwrap();
        assert_eq!(config.backend_url, "http://localhost:3500/api/v1");
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, 1337);
        assert_eq!(config.gas_limit, 6_721_975);
        assert_eq!(config.gas_price, 20_000_000_000);
        assert_eq!(config.origins.len(), 2);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bingochain",
            "--backend-url",
            "http://backend:9000/api",
            "--chain-id",
            "11155111",
            "--origins",
            "https://a.example,https://b.example,https://c.example",
        ])
        .unwrap();
        assert_eq!(config.backend_url, "http://backend:9000/api");
        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.origins.len(), 3);
    }

    #[test]
    fn missing_secret_is_never_empty() {
        let config = Config {
            secret: None,
            ..Config::try_parse_from(["bingochain"]).unwrap()
        };
        let one = config.secret();
        let two = config.secret();
        assert_eq!(one.len(), 32);
        assert_ne!(one, two);
        let config = Config::try_parse_from(["bingochain", "--secret", "hunter2"]).unwrap();
        assert_eq!(config.secret(), b"hunter2".to_vec());
    }
}
