use crate::core::{ConfigProvider, FormInput, Resource, ResourceKind, ResourceSource};
use crate::domain::model::VluchtCyclusStatus;
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{validate_positive_id, Validate};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// 錯誤訊息裡 response body 最多保留的字元數
const BODY_EXCERPT_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Fetch,
    Add,
    Update,
    Delete,
}

impl Action {
    fn verb(&self) -> &'static str {
        match self {
            Action::Fetch => "fetch",
            Action::Add => "add",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// 所有資源共用的 REST 客戶端
pub struct ApiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ApiClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        for (name, value) in config.extra_headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                FleetError::InvalidConfigValueError {
                    field: format!("api.headers.{}", name),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| FleetError::InvalidConfigValueError {
                    field: format!("api.headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!(
            "{}/{}",
            self.config.api_base_url().trim_end_matches('/'),
            self.config.endpoint_path(kind).trim_matches('/')
        )
    }

    pub fn item_url(&self, kind: ResourceKind, id: i64) -> String {
        format!("{}/{}", self.collection_url(kind), id)
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        self.list_filtered::<R>(&[]).await
    }

    /// GET 列表，可帶 `event_id` / `cyclus_id` 等查詢參數
    pub async fn list_filtered<R: Resource>(&self, query: &[(&str, String)]) -> Result<Vec<R>> {
        let url = self.collection_url(R::KIND);
        tracing::debug!("📡 Fetching {} from {} {:?}", R::KIND.plural(), url, query);

        let response = self.client.get(&url).query(query).send().await?;
        tracing::debug!("📡 Fetch response status from {}: {}", url, response.status());

        let response = check(response, Action::Fetch, R::KIND, None).await?;
        ensure_json(&response)?;
        let items: Vec<R> = read_json(response).await?;

        tracing::info!("📥 Fetched {} {}", items.len(), R::KIND.plural());
        Ok(items)
    }

    pub async fn get<R: Resource>(&self, id: i64) -> Result<R> {
        let url = self.item_url(R::KIND, id);
        tracing::debug!("📡 Fetching {} from {}", R::KIND.label(), url);

        let response = self.client.get(&url).send().await?;
        let response = check(response, Action::Fetch, R::KIND, Some(id)).await?;
        ensure_json(&response)?;
        read_json(response).await
    }

    pub async fn create<R: Resource>(&self, input: &R::Input) -> Result<R> {
        let body = input.normalized();
        body.validate()?;

        let url = self.collection_url(R::KIND);
        tracing::debug!("📤 Adding {} at {}", R::KIND.label(), url);

        let response = self.client.post(&url).json(&body).send().await?;
        let response = check(response, Action::Add, R::KIND, None).await?;
        let created: R = read_json(response).await?;

        tracing::info!("✅ {} {} added", R::KIND.label(), created.id());
        Ok(created)
    }

    pub async fn update<R: Resource>(&self, id: i64, input: &R::Input) -> Result<R> {
        let body = input.normalized();
        body.validate()?;

        let url = self.item_url(R::KIND, id);
        tracing::debug!("📤 Updating {} at {}", R::KIND.label(), url);

        let response = self.client.put(&url).json(&body).send().await?;
        let response = check(response, Action::Update, R::KIND, Some(id)).await?;
        let updated: R = read_json(response).await?;

        tracing::info!("✅ {} {} updated", R::KIND.label(), id);
        Ok(updated)
    }

    pub async fn delete<R: Resource>(&self, id: i64) -> Result<()> {
        let url = self.item_url(R::KIND, id);
        tracing::debug!("🗑️ Deleting {} at {}", R::KIND.label(), url);

        let response = self.client.delete(&url).send().await?;
        check(response, Action::Delete, R::KIND, Some(id)).await?;

        tracing::info!("✅ {} {} deleted", R::KIND.label(), id);
        Ok(())
    }

    pub async fn update_vlucht_cyclus_status(
        &self,
        id: i64,
        status: &VluchtCyclusStatus,
    ) -> Result<()> {
        if let VluchtCyclusStatus::Unknown(raw) = status {
            return Err(FleetError::validation(
                "status",
                format!(
                    "Invalid status '{}'. Must be one of: {}",
                    raw,
                    VluchtCyclusStatus::VALID.join(", ")
                ),
            ));
        }

        let url = format!("{}/status", self.item_url(ResourceKind::VluchtCyclus, id));
        tracing::debug!("📤 Setting status {} on {}", status, url);

        let response = self
            .client
            .put(&url)
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        check(response, Action::Update, ResourceKind::VluchtCyclus, Some(id)).await?;

        tracing::info!("✅ vlucht cyclus {} is now {}", id, status);
        Ok(())
    }

    pub async fn attach_verslag(&self, vlucht_cyclus_id: i64, verslag_id: i64) -> Result<()> {
        validate_positive_id("vluchtCyclusId", Some(vlucht_cyclus_id), "Please select a flight cycle")?;
        validate_positive_id("verslagId", Some(verslag_id), "Please select a report")?;

        let url = format!(
            "{}/verslag",
            self.item_url(ResourceKind::VluchtCyclus, vlucht_cyclus_id)
        );
        tracing::debug!("📤 Attaching verslag {} via {}", verslag_id, url);

        let response = self
            .client
            .put(&url)
            .json(&serde_json::json!({ "verslagId": verslag_id }))
            .send()
            .await?;
        check(
            response,
            Action::Update,
            ResourceKind::VluchtCyclus,
            Some(vlucht_cyclus_id),
        )
        .await?;

        tracing::info!(
            "✅ verslag {} attached to vlucht cyclus {}",
            verslag_id,
            vlucht_cyclus_id
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> ResourceSource for ApiClient<C> {
    async fn fetch_filtered<R: Resource>(
        &self,
        query: &[(&'static str, String)],
    ) -> Result<Vec<R>> {
        self.list_filtered::<R>(query).await
    }
}

async fn check(
    response: Response,
    action: Action,
    kind: ResourceKind,
    id: Option<i64>,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!("❌ Failed to {} {}: {}", action.verb(), kind.label(), status);
    tracing::error!("Response body: {}...", excerpt(&body));

    Err(classify_failure(status, &body, action, kind, id))
}

fn classify_failure(
    status: StatusCode,
    body: &str,
    action: Action,
    kind: ResourceKind,
    id: Option<i64>,
) -> FleetError {
    // Flask 端用 {"error": ...}，少數路由用 {"message": ...}
    let server_message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return FleetError::NotFound {
                label: kind.label().to_string(),
                id,
            };
        }
    }

    if action == Action::Delete {
        if let Some(message) = &server_message {
            let lowered = message.to_lowercase();
            if lowered.contains("in progress") {
                return FleetError::Conflict {
                    message: format!("Cannot delete a {} that is in progress.", kind.label()),
                };
            }
            if lowered.contains("references exist") {
                return FleetError::Conflict {
                    message: format!(
                        "This {} cannot be deleted because it is still in use.",
                        kind.label()
                    ),
                };
            }
        }
    }

    let message = server_message.unwrap_or_else(|| match (action, id) {
        (Action::Fetch, None) => format!("Failed to fetch {} ({})", kind.plural(), status.as_u16()),
        _ => format!(
            "Failed to {} {} ({})",
            action.verb(),
            kind.label(),
            status.as_u16()
        ),
    });

    FleetError::ApiError {
        status: status.as_u16(),
        message,
    }
}

fn ensure_json(response: &Response) -> Result<()> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.contains("application/json") {
        Ok(())
    } else {
        Err(FleetError::UnexpectedContentType {
            content_type: if content_type.is_empty() {
                "no content type".to_string()
            } else {
                content_type.to_string()
            },
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FleetSettings;

    #[test]
    fn test_urls_join_without_double_slashes() {
        let settings = FleetSettings::new("http://localhost:5328/api/")
            .with_endpoint(ResourceKind::DockingCyclus, "/docking-cyclus/");
        let client = ApiClient::new(settings).unwrap();

        assert_eq!(
            client.collection_url(ResourceKind::Drone),
            "http://localhost:5328/api/drones"
        );
        assert_eq!(
            client.item_url(ResourceKind::DockingCyclus, 4),
            "http://localhost:5328/api/docking-cyclus/4"
        );
    }

    #[test]
    fn test_invalid_extra_header_is_rejected() {
        let mut settings = FleetSettings::new("http://localhost:5328/api");
        settings
            .headers
            .insert("bad header".to_string(), "x".to_string());
        assert!(matches!(
            ApiClient::new(settings),
            Err(FleetError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_failure_prefers_server_error_field() {
        let err = classify_failure(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Battery level must be between 0 and 100."}"#,
            Action::Add,
            ResourceKind::Drone,
            None,
        );
        assert_eq!(err.to_string(), "Battery level must be between 0 and 100.");

        let err = classify_failure(
            StatusCode::BAD_REQUEST,
            r#"{"message": "naam is verplicht"}"#,
            Action::Add,
            ResourceKind::Event,
            None,
        );
        assert_eq!(err.to_string(), "naam is verplicht");
    }

    #[test]
    fn test_failure_falls_back_to_status_message() {
        let err = classify_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>boom</html>",
            Action::Fetch,
            ResourceKind::Drone,
            None,
        );
        assert_eq!(err.to_string(), "Failed to fetch drones (500)");

        let err = classify_failure(
            StatusCode::BAD_GATEWAY,
            "",
            Action::Update,
            ResourceKind::Zone,
            Some(3),
        );
        assert_eq!(err.to_string(), "Failed to update zone (502)");
    }

    #[test]
    fn test_not_found_only_for_single_records() {
        let err = classify_failure(
            StatusCode::NOT_FOUND,
            r#"{"error": "Drone not found"}"#,
            Action::Delete,
            ResourceKind::Drone,
            Some(9),
        );
        assert!(matches!(err, FleetError::NotFound { id: 9, .. }));

        let err = classify_failure(
            StatusCode::NOT_FOUND,
            "",
            Action::Fetch,
            ResourceKind::Docking,
            None,
        );
        assert!(matches!(err, FleetError::ApiError { status: 404, .. }));
    }

    #[test]
    fn test_delete_conflicts_get_friendly_messages() {
        let err = classify_failure(
            StatusCode::CONFLICT,
            r#"{"error": "Flight cycle is IN PROGRESS"}"#,
            Action::Delete,
            ResourceKind::VluchtCyclus,
            Some(2),
        );
        assert_eq!(
            err.to_string(),
            "Cannot delete a vlucht cyclus that is in progress."
        );

        let err = classify_failure(
            StatusCode::CONFLICT,
            r#"{"error": "references exist in Verslag"}"#,
            Action::Delete,
            ResourceKind::VluchtCyclus,
            Some(2),
        );
        assert!(matches!(err, FleetError::Conflict { .. }));
    }

    #[test]
    fn test_excerpt_is_char_safe() {
        let body = "é".repeat(BODY_EXCERPT_CHARS + 10);
        assert_eq!(excerpt(&body).chars().count(), BODY_EXCERPT_CHARS);
    }
}
