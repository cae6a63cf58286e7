//! Blockchain node settings.
//!
//! The server never signs or submits transactions; wallets in the browser
//! do. It only publishes the node settings to the wallet UI and checks at
//! startup that the node answers.
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Chain {
    pub rpc_url: String,
    pub chain_id: u64,
    pub gas_limit: u64,
    pub gas_price: u64,
    pub contract_address: String,
    pub network: &'static str,
}

impl From<&crate::Config> for Chain {
    fn from(config: &crate::Config) -> Self {
        Self {
            rpc_url: config.rpc_url.clone(),
            chain_id: config.chain_id,
            gas_limit: config.gas_limit,
            gas_price: config.gas_price,
            contract_address: config.contract.clone(),
            network: Self::network(&config.rpc_url),
        }
    }
}

impl Chain {
    /// Label reported to wallets: local development node or public network.
    pub fn network(rpc_url: &str) -> &'static str {
        match rpc_url.contains("localhost") || rpc_url.contains("127.0.0.1") {
            true => "localhost",
            false => "mainnet",
        }
    }

    /// Asks the node for its chain id and logs the outcome.
    /// An unreachable node is not fatal; pages and the relay work without it.
    pub async fn probe(&self) {
        match self.chain_id_remote().await {
            Ok(id) if id == self.chain_id => log::info!("connected to chain {} at {}", id, self.rpc_url),
            Ok(id) => log::warn!("node at {} reports chain {}, expected {}", self.rpc_url, id, self.chain_id),
            Err(e) => log::error!("failed to reach node at {}: {}", self.rpc_url, e),
        }
    }

    async fn chain_id_remote(&self) -> anyhow::Result<u64> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_chainId",
            "params": [],
            "id": 1,
        });
        let response = reqwest::Client::new()
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        response
            .get("result")
            .and_then(|r| r.as_str())
            .and_then(|hex| u64::from_str_radix(hex.trim_start_matches("0x"), 16).ok())
            .ok_or_else(|| anyhow::anyhow!("malformed eth_chainId response: {}", response))
    }
}
