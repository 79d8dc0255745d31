//! Core database service client

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Environment variable holding the service (read/write) key
pub const SERVICE_KEY_VAR: &str = "RENTFLOW_DB_SERVICE_KEY";
/// Environment variable holding the anon (read-only) key
pub const ANON_KEY_VAR: &str = "RENTFLOW_DB_ANON_KEY";

/// Error descriptor for a failed database operation.
///
/// `Service` carries the human-readable message parsed from the service's
/// error body; the GUI shows it verbatim.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database service error: {0}")]
    Service(String),

    #[error("failed to reach database service: {0}")]
    Transport(String),

    #[error("unexpected response from database service: {0}")]
    Malformed(String),
}

/// Client for the hosted database service
#[derive(Clone, Debug)]
pub struct DbClient {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl DbClient {
    /// Create a client against the given base URL with the given key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            agent,
        }
    }

    /// Create a read/write client from the service key in the environment.
    ///
    /// A missing key is a configuration error: callers get a descriptive
    /// failure at the point of first use.
    pub fn service_from_env(base_url: &str) -> anyhow::Result<Self> {
        let key = std::env::var(SERVICE_KEY_VAR).map_err(|_| {
            anyhow::anyhow!(
                "Database service key not configured: set {} to enable record writes",
                SERVICE_KEY_VAR
            )
        })?;
        Ok(Self::new(base_url, key))
    }

    /// Create a read-only client from the anon key in the environment.
    ///
    /// Unlike [`Self::service_from_env`], a missing key only logs a warning
    /// and leaves the client uninitialized.
    pub fn read_only_from_env(base_url: &str) -> Option<Self> {
        match std::env::var(ANON_KEY_VAR) {
            Ok(key) => Some(Self::new(base_url, key)),
            Err(_) => {
                tracing::warn!(
                    "{} not set; browsing is disabled until a read-only key is configured",
                    ANON_KEY_VAR
                );
                None
            }
        }
    }

    fn endpoint(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), collection)
    }

    /// Fetch every record of a collection, optionally ordered
    pub fn fetch_all<T: DeserializeOwned>(
        &self,
        collection: &str,
        order: Option<&str>,
    ) -> Result<Vec<T>, DbError> {
        let mut url = format!("{}?select=*", self.endpoint(collection));
        if let Some(order) = order {
            url = format!("{}&order={}", url, order);
        }

        let response = self
            .agent
            .get(&url)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .call()
            .map_err(request_error)?;

        response
            .into_json()
            .map_err(|e| DbError::Malformed(e.to_string()))
    }

    /// Fetch records of a collection matching a single equality filter
    pub fn fetch_where<T: DeserializeOwned>(
        &self,
        collection: &str,
        column: &str,
        value: &str,
    ) -> Result<Vec<T>, DbError> {
        let url = format!(
            "{}?select=*&{}=eq.{}",
            self.endpoint(collection),
            column,
            value
        );

        let response = self
            .agent
            .get(&url)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .call()
            .map_err(request_error)?;

        response
            .into_json()
            .map_err(|e| DbError::Malformed(e.to_string()))
    }

    /// Insert a full record, returning the created row
    pub fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<R, DbError> {
        let response = self
            .agent
            .post(&self.endpoint(collection))
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Prefer", "return=representation")
            .send_json(record)
            .map_err(request_error)?;

        // The service answers inserts with an array of created rows
        let mut rows: Vec<R> = response
            .into_json()
            .map_err(|e| DbError::Malformed(e.to_string()))?;

        rows.pop()
            .ok_or_else(|| DbError::Malformed("insert returned no rows".to_string()))
    }

    /// Apply a partial field set to the record with the given primary key
    pub fn update(
        &self,
        collection: &str,
        id: Uuid,
        patch: &serde_json::Value,
    ) -> Result<(), DbError> {
        let url = format!("{}?id=eq.{}", self.endpoint(collection), id);

        self.agent
            .request("PATCH", &url)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(patch)
            .map_err(request_error)?;

        Ok(())
    }

    /// Delete the record with the given primary key
    pub fn delete(&self, collection: &str, id: Uuid) -> Result<(), DbError> {
        let url = format!("{}?id=eq.{}", self.endpoint(collection), id);

        self.agent
            .delete(&url)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .call()
            .map_err(request_error)?;

        Ok(())
    }
}

/// Convert a ureq failure into the service's error descriptor.
///
/// Non-2xx responses carry a JSON body with a `message` field; fall back to
/// the bare status code when the body is not in that shape.
fn request_error(err: ureq::Error) -> DbError {
    match err {
        ureq::Error::Status(code, response) => {
            #[derive(serde::Deserialize)]
            struct ErrorBody {
                message: String,
            }

            match response.into_json::<ErrorBody>() {
                Ok(body) => DbError::Service(body.message),
                Err(_) => DbError::Service(format!("request failed with status {}", code)),
            }
        }
        ureq::Error::Transport(t) => DbError::Transport(t.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = DbClient::new("http://db.example/", "key");
        assert_eq!(client.endpoint("notices"), "http://db.example/rest/v1/notices");
    }

    #[test]
    fn test_service_from_env_missing_key_is_descriptive() {
        std::env::remove_var(SERVICE_KEY_VAR);
        let err = DbClient::service_from_env("http://db.example").unwrap_err();
        assert!(err.to_string().contains(SERVICE_KEY_VAR));
    }

    #[test]
    fn test_read_only_from_env_missing_key_is_none() {
        std::env::remove_var(ANON_KEY_VAR);
        assert!(DbClient::read_only_from_env("http://db.example").is_none());
    }

    #[test]
    fn test_error_display_carries_message() {
        let err = DbError::Service("duplicate key value".to_string());
        assert_eq!(err.to_string(), "database service error: duplicate key value");
    }
}
