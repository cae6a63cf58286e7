use super::*;
use serde_json::Value;

/// Backend response relayed to the caller: status code and JSON body.
#[derive(Debug)]
pub struct Reply {
    pub status: reqwest::StatusCode,
    pub body: Value,
}

/// HTTP client for the lottery backend, rooted at its base URL.
pub struct Backend {
    base: String,
    http: reqwest::Client,
}

impl Backend {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Backend {
    pub async fn lotteries(&self) -> Result<Reply, UpstreamError> {
        self.get("/lotteries").await
    }
    pub async fn lottery(&self, id: u64) -> Result<Reply, UpstreamError> {
        self.get(&format!("/lotteries/{}", id)).await
    }
    pub async fn player_tickets(&self, wallet: &crate::wallet::Address) -> Result<Reply, UpstreamError> {
        self.get(&format!("/tickets/player/{}", wallet)).await
    }
    pub async fn purchase(&self, ticket: &Value) -> Result<Reply, UpstreamError> {
        self.post("/tickets/purchase", ticket).await
    }
    pub async fn validate_numbers(&self, numbers: &Value) -> Result<Reply, UpstreamError> {
        self.post("/tickets/validate-numbers", numbers).await
    }
}

impl Backend {
    async fn get(&self, path: &str) -> Result<Reply, UpstreamError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::reply(response).await
    }
    async fn post(&self, path: &str, body: &Value) -> Result<Reply, UpstreamError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::reply(response).await
    }
    async fn reply(response: reqwest::Response) -> Result<Reply, UpstreamError> {
        let status = response.status();
        match status.is_success() {
            false => Err(UpstreamError::Rejected(status)),
            true => Ok(Reply {
                status,
                body: response.json::<Value>().await?,
            }),
        }
    }
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}
