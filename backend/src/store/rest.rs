use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{RecordStore, StoreError};

/// Adapter for a remote REST document store in the Firebase RTDB style:
/// documents live at `{base_url}/{namespace}/{key}.json`, absent keys answer
/// a JSON `null`, and PATCH merges top-level fields.
#[derive(Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    namespace: String,
    auth_token: Option<String>,
}

impl RestStore {
    pub fn new(
        base_url: impl Into<String>,
        namespace: impl Into<String>,
        auth_token: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            namespace: namespace.into(),
            auth_token,
        }
    }

    fn key_url(&self, key: &str) -> String {
        format!("{}/{}/{}.json", self.base_url, self.namespace, key)
    }

    fn root_url(&self) -> String {
        format!("{}/{}.json", self.base_url, self.namespace)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.query(&[("auth", token.as_str())]),
            None => request,
        }
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let value: Value = self
            .with_auth(self.client.get(self.key_url(key)))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.with_auth(self.client.put(self.key_url(key)))
            .json(&value)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn merge(&self, key: &str, partial: Value) -> Result<(), StoreError> {
        self.with_auth(self.client.patch(self.key_url(key)))
            .json(&partial)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.with_auth(self.client.delete(self.key_url(key)))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn get_all(&self) -> Result<Map<String, Value>, StoreError> {
        let value: Value = self
            .with_auth(self.client.get(self.root_url()))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match value {
            Value::Null => Ok(Map::new()),
            Value::Object(map) => Ok(map),
            other => Err(StoreError::Unexpected(format!(
                "expected an object at the namespace root, got: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_urls() {
        let store = RestStore::new("https://db.example/", "members", None);

        assert_eq!(store.key_url("AB12"), "https://db.example/members/AB12.json");
        assert_eq!(store.root_url(), "https://db.example/members.json");
    }

    #[test]
    fn test_namespace_in_urls() {
        let store = RestStore::new("http://localhost:9000", "test-members", None);

        assert_eq!(
            store.key_url("X"),
            "http://localhost:9000/test-members/X.json"
        );
    }
}
