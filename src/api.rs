use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use crate::config::{Config, normalize_base_url};
use crate::constants::*;
use crate::error::ClientError;
use crate::models::*;
use crate::resources::Resource;

/// The four round-trips every resource screen relies on.
///
/// `update` takes the resource's partial payload: a full form edit sends every
/// field, a toggle sends only the field it flips, and the backend merges.
#[allow(async_fn_in_trait)]
pub trait ResourceApi<R: Resource> {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError>;
    async fn create(&self, payload: &R::Create) -> Result<R::Record, ClientError>;
    async fn update(&self, id: &str, payload: &R::Update) -> Result<(), ClientError>;
    async fn delete(&self, id: &str) -> Result<(), ClientError>;

    /// Read-only aggregates shown next to the list; `Default` for most resources.
    async fn summary(&self) -> Result<R::Summary, ClientError>;
}

/// HTTP client bound to one backend origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ClientError> {
        debug!("{} {}", method, path);

        let mut request = self.http.request(method, self.url(path));
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Request failed".to_string());
            return Err(ClientError::Status { status, body });
        }

        Ok(response)
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let response = self.send(method, path, body).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn request_no_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError> {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    // Summary endpoints

    pub async fn revenue_monthly_summary(&self) -> Result<Vec<MonthlyRevenue>, ClientError> {
        self.get(REVENUE_MONTHLY_PATH).await
    }

    pub async fn revenue_category_summary(&self) -> Result<Vec<CategoryRevenue>, ClientError> {
        self.get(REVENUE_CATEGORY_PATH).await
    }

    pub async fn top_content(&self) -> Result<TopContent, ClientError> {
        self.get(TOP_CONTENT_PATH).await
    }

    pub async fn performance_trends(&self) -> Result<Vec<TrendPoint>, ClientError> {
        self.get(TRENDS_PATH).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get(DASHBOARD_STATS_PATH).await
    }

    /// Backend-side idea search. Screens filter the fetched list locally instead.
    pub async fn search_ideas(&self, query: &str) -> Result<Vec<Idea>, ClientError> {
        self.get(&format!("{}/{}", IDEA_SEARCH_PATH, encode(query)))
            .await
    }

    // Recurring task generation

    pub async fn generate_from_recurring(&self, id: &str) -> Result<Task, ClientError> {
        self.request::<Task, ()>(
            Method::POST,
            &format!("{}/{}/generate", RECURRING_TASKS_PATH, encode(id)),
            None,
        )
        .await
    }

    pub async fn auto_generate_recurring(&self) -> Result<AutoGenerateResult, ClientError> {
        self.request::<AutoGenerateResult, ()>(Method::POST, AUTO_GENERATE_PATH, None)
            .await
    }
}

impl<R: Resource> ResourceApi<R> for ApiClient {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError> {
        self.get(R::PATH).await
    }

    async fn create(&self, payload: &R::Create) -> Result<R::Record, ClientError> {
        self.request(Method::POST, R::PATH, Some(payload)).await
    }

    async fn update(&self, id: &str, payload: &R::Update) -> Result<(), ClientError> {
        self.request_no_body(
            Method::PUT,
            &format!("{}/{}", R::PATH, encode(id)),
            Some(payload),
        )
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.request_no_body::<()>(Method::DELETE, &format!("{}/{}", R::PATH, encode(id)), None)
            .await
    }

    async fn summary(&self) -> Result<R::Summary, ClientError> {
        R::fetch_summary(self).await
    }
}

/// Aggregate counters for the dashboard screen.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn stats(&self) -> Result<DashboardStats, ClientError>;
}

impl DashboardApi for ApiClient {
    async fn stats(&self) -> Result<DashboardStats, ClientError> {
        self.dashboard_stats().await
    }
}

/// Task generation from recurring templates.
#[allow(async_fn_in_trait)]
pub trait RecurringApi {
    async fn generate(&self, id: &str) -> Result<Task, ClientError>;
    async fn auto_generate(&self) -> Result<AutoGenerateResult, ClientError>;
}

impl RecurringApi for ApiClient {
    async fn generate(&self, id: &str) -> Result<Task, ClientError> {
        self.generate_from_recurring(id).await
    }

    async fn auto_generate(&self) -> Result<AutoGenerateResult, ClientError> {
        self.auto_generate_recurring().await
    }
}
