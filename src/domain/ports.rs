use crate::domain::model::ResourceKind;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn extra_headers(&self) -> &HashMap<String, String>;
    fn output_path(&self) -> &str;

    fn endpoint_path(&self, kind: ResourceKind) -> String {
        kind.default_path().to_string()
    }
}

/// 送出前會先 `normalized()` 再 `validate()`
pub trait FormInput: Validate + Serialize + Clone + Send + Sync {
    fn normalized(&self) -> Self {
        self.clone()
    }
}

/// 一筆 API 實體與其表單、端點的對應
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    type Input: FormInput;
    const KIND: ResourceKind;

    fn id(&self) -> i64;
}

#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// 帶查詢參數的列表，例如 `event_id` 或 `cyclus_id`
    async fn fetch_filtered<R: Resource>(&self, query: &[(&'static str, String)])
        -> Result<Vec<R>>;

    async fn fetch_all<R: Resource>(&self) -> Result<Vec<R>> {
        self.fetch_filtered(&[]).await
    }
}
