#![allow(dead_code)]

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::{Duration, Utc};
use manpharma::{
    ApiClient, ClientError, DashboardApi, RecurringApi, Resource, ResourceApi, constants::*,
    models::*,
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use uuid::Uuid;

/// Backend collections as loose JSON documents, merged on update like the real store.
#[derive(Default)]
pub struct Store {
    collections: HashMap<String, Vec<Value>>,
    list_calls: HashMap<String, usize>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl Store {
    pub fn list(&mut self, collection: &str) -> Vec<Value> {
        *self.list_calls.entry(collection.to_string()).or_default() += 1;
        self.records(collection)
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.collections.get(collection).cloned().unwrap_or_default()
    }

    pub fn list_calls(&self, collection: &str) -> usize {
        self.list_calls.get(collection).copied().unwrap_or(0)
    }

    pub fn find(&self, collection: &str, id: &str) -> Option<Value> {
        self.collections
            .get(collection)?
            .iter()
            .find(|doc| doc["_id"] == id)
            .cloned()
    }

    pub fn insert(&mut self, collection: &str, body: Value) -> Value {
        let mut doc = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        doc.retain(|_, value| !value.is_null());

        doc.insert("_id".into(), json!(Uuid::new_v4().to_string()));
        doc.insert("created_date".into(), json!(now()));
        match collection {
            "videos" if !doc.contains_key("stages") => {
                let stages: Vec<Value> = DEFAULT_VIDEO_STAGES
                    .iter()
                    .map(|name| json!({ "name": name, "completed": false, "completed_date": null }))
                    .collect();
                doc.insert("stages".into(), Value::Array(stages));
            }
            "tasks" if !doc.contains_key("status") => {
                doc.insert("status".into(), json!("pending"));
            }
            _ => {}
        }

        let doc = Value::Object(doc);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        doc
    }

    /// Sets every field present in `patch`; fields it omits keep their values.
    pub fn update(&mut self, collection: &str, id: &str, patch: Value) -> Option<Value> {
        let doc = self
            .collections
            .get_mut(collection)?
            .iter_mut()
            .find(|doc| doc["_id"] == id)?;

        if let (Value::Object(target), Value::Object(fields)) = (&mut *doc, patch) {
            for (key, value) in fields {
                if !value.is_null() {
                    target.insert(key, value);
                }
            }
            target.insert("updated_date".into(), json!(now()));
        }
        Some(doc.clone())
    }

    pub fn remove(&mut self, collection: &str, id: &str) -> bool {
        let Some(docs) = self.collections.get_mut(collection) else {
            return false;
        };
        let before = docs.len();
        docs.retain(|doc| doc["_id"] != id);
        docs.len() < before
    }

    pub fn generate_from_recurring(&mut self, id: &str) -> Option<Value> {
        let template = self.find("recurring-tasks", id)?;
        let task = self.insert(
            "tasks",
            json!({
                "title": template["title"],
                "description": template["description"],
                "priority": template["priority"],
                "status": "pending",
                "due_date": template["next_due_date"],
                "category": template["category"],
            }),
        );

        let current = template["next_due_date"]
            .as_str()
            .and_then(parse_timestamp)
            .unwrap_or_else(Utc::now);
        let step = match template["frequency"].as_str() {
            Some("daily") => Duration::days(1),
            Some("monthly") => Duration::days(30),
            _ => Duration::weeks(1),
        };
        self.update(
            "recurring-tasks",
            id,
            json!({
                "next_due_date": format_timestamp(&(current + step)),
                "last_generated_date": now(),
            }),
        );
        Some(task)
    }

    pub fn auto_generate(&mut self) -> Value {
        let due: Vec<String> = self
            .records("recurring-tasks")
            .iter()
            .filter(|t| t["is_active"].as_bool().unwrap_or(true))
            .filter(|t| {
                t["next_due_date"]
                    .as_str()
                    .and_then(parse_timestamp)
                    .is_some_and(|d| d <= Utc::now())
            })
            .filter_map(|t| t["_id"].as_str().map(str::to_string))
            .collect();

        for id in &due {
            self.generate_from_recurring(id);
        }
        json!({ "message": format!("Generated {} tasks", due.len()), "count": due.len() })
    }
}

fn now() -> String {
    format_timestamp(&Utc::now())
}

/// Collection name as it appears after `/api/`.
pub fn collection_of<R: Resource>() -> &'static str {
    R::PATH.trim_start_matches("/api/")
}

/// Shared handle to a [`Store`]; clones see the same data.
#[derive(Clone, Default)]
pub struct Backend(Arc<Mutex<Store>>);

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.0.lock().unwrap()
    }

    /// Inserts a document as if another client had created it.
    pub fn seed<R: Resource>(&self, body: Value) -> String {
        let doc = self.store().insert(collection_of::<R>(), body);
        doc["_id"].as_str().unwrap().to_string()
    }

    pub fn records<R: Resource>(&self) -> Vec<R::Record> {
        self.store()
            .records(collection_of::<R>())
            .into_iter()
            .map(|doc| serde_json::from_value(doc).unwrap())
            .collect()
    }

    pub fn list_calls<R: Resource>(&self) -> usize {
        self.store().list_calls(collection_of::<R>())
    }

    pub fn fail_reads(&self, fail: bool) {
        self.store().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.store().fail_writes = fail;
    }
}

// In-process resource client

fn injected_failure() -> ClientError {
    ClientError::Status {
        status: 500,
        body: "injected failure".to_string(),
    }
}

fn not_found() -> ClientError {
    ClientError::Status {
        status: 404,
        body: "Not found".to_string(),
    }
}

fn to_value<T: Serialize>(payload: &T) -> Result<Value, ClientError> {
    Ok(serde_json::to_value(payload)?)
}

/// `ResourceApi` backed directly by a [`Backend`], with no HTTP in between.
pub struct FakeApi<R> {
    backend: Backend,
    _resource: PhantomData<R>,
}

impl<R> FakeApi<R> {
    pub fn new(backend: &Backend) -> Self {
        Self {
            backend: backend.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceApi<R> for FakeApi<R> {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError> {
        let mut store = self.backend.store();
        let docs = store.list(collection_of::<R>());
        if store.fail_reads {
            return Err(injected_failure());
        }
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(ClientError::from))
            .collect()
    }

    async fn create(&self, payload: &R::Create) -> Result<R::Record, ClientError> {
        let mut store = self.backend.store();
        if store.fail_writes {
            return Err(injected_failure());
        }
        let doc = store.insert(collection_of::<R>(), to_value(payload)?);
        Ok(serde_json::from_value(doc)?)
    }

    async fn update(&self, id: &str, payload: &R::Update) -> Result<(), ClientError> {
        let mut store = self.backend.store();
        if store.fail_writes {
            return Err(injected_failure());
        }
        store
            .update(collection_of::<R>(), id, to_value(payload)?)
            .map(|_| ())
            .ok_or_else(not_found)
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let mut store = self.backend.store();
        if store.fail_writes {
            return Err(injected_failure());
        }
        if store.remove(collection_of::<R>(), id) {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    async fn summary(&self) -> Result<R::Summary, ClientError> {
        if self.backend.store().fail_reads {
            return Err(injected_failure());
        }
        Ok(R::Summary::default())
    }
}

impl<R> RecurringApi for FakeApi<R> {
    async fn generate(&self, id: &str) -> Result<Task, ClientError> {
        let mut store = self.backend.store();
        if store.fail_writes {
            return Err(injected_failure());
        }
        let task = store.generate_from_recurring(id).ok_or_else(not_found)?;
        Ok(serde_json::from_value(task)?)
    }

    async fn auto_generate(&self) -> Result<AutoGenerateResult, ClientError> {
        let mut store = self.backend.store();
        if store.fail_writes {
            return Err(injected_failure());
        }
        Ok(serde_json::from_value(store.auto_generate())?)
    }
}

/// Dashboard source that returns fixed stats, or fails.
pub struct FakeDashboard {
    pub stats: Option<DashboardStats>,
}

impl DashboardApi for FakeDashboard {
    async fn stats(&self) -> Result<DashboardStats, ClientError> {
        self.stats.clone().ok_or_else(injected_failure)
    }
}

// HTTP stub backend

type ApiResult = Result<Json<Value>, StatusCode>;

fn guard_read(store: &Store) -> Result<(), StatusCode> {
    if store.fail_reads {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(())
}

fn guard_write(store: &Store) -> Result<(), StatusCode> {
    if store.fail_writes {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(())
}

async fn list_handler(State(backend): State<Backend>, Path(collection): Path<String>) -> ApiResult {
    let mut store = backend.store();
    let docs = store.list(&collection);
    guard_read(&store)?;
    Ok(Json(Value::Array(docs)))
}

async fn create_handler(
    State(backend): State<Backend>,
    Path(collection): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = backend.store();
    guard_write(&store)?;
    Ok(Json(store.insert(&collection, body)))
}

async fn update_handler(
    State(backend): State<Backend>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = backend.store();
    guard_write(&store)?;
    store
        .update(&collection, &id, body)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_handler(
    State(backend): State<Backend>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult {
    let mut store = backend.store();
    guard_write(&store)?;
    if store.remove(&collection, &id) {
        Ok(Json(json!({ "message": "Deleted successfully" })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

fn month_of(doc: &Value, field: &str) -> Option<String> {
    doc[field].as_str().map(|d| d.chars().take(7).collect())
}

async fn revenue_monthly_handler(State(backend): State<Backend>) -> ApiResult {
    let store = backend.store();
    guard_read(&store)?;

    let mut months: HashMap<String, (f64, f64, u32)> = HashMap::new();
    for doc in store.records("revenue") {
        let Some(month) = month_of(&doc, "payment_date") else {
            continue;
        };
        let amount = doc["amount"].as_f64().unwrap_or(0.0);
        let entry = months.entry(month).or_default();
        if doc["payment_status"] == "Received" {
            entry.0 += amount;
        } else {
            entry.1 += amount;
        }
        entry.2 += 1;
    }

    let mut rows: Vec<Value> = months
        .into_iter()
        .map(|(month, (received, pending, count))| {
            json!({ "month": month, "total_received": received, "total_pending": pending, "count": count })
        })
        .collect();
    rows.sort_by(|a, b| b["month"].as_str().cmp(&a["month"].as_str()));
    Ok(Json(Value::Array(rows)))
}

async fn revenue_category_handler(State(backend): State<Backend>) -> ApiResult {
    let store = backend.store();
    guard_read(&store)?;

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (f64, u32)> = HashMap::new();
    for doc in store.records("revenue") {
        if doc["payment_status"] != "Received" {
            continue;
        }
        let category = doc["source_category"].as_str().unwrap_or("Other").to_string();
        if !totals.contains_key(&category) {
            order.push(category.clone());
        }
        let entry = totals.entry(category).or_default();
        entry.0 += doc["amount"].as_f64().unwrap_or(0.0);
        entry.1 += 1;
    }

    let rows: Vec<Value> = order
        .into_iter()
        .map(|category| {
            let (total, count) = totals[&category];
            json!({ "category": category, "total": total, "count": count })
        })
        .collect();
    Ok(Json(Value::Array(rows)))
}

fn engagement_rate(doc: &Value) -> f64 {
    let views = doc["views"].as_f64().unwrap_or(0.0);
    if views == 0.0 {
        return 0.0;
    }
    let engaged = ["likes", "comments", "shares"]
        .iter()
        .map(|k| doc[*k].as_f64().unwrap_or(0.0))
        .sum::<f64>();
    (engaged / views * 10000.0).round() / 100.0
}

async fn top_content_handler(State(backend): State<Backend>) -> ApiResult {
    let store = backend.store();
    guard_read(&store)?;

    let ranked: Vec<Value> = store
        .records("performance")
        .into_iter()
        .map(|mut doc| {
            doc["engagement_rate"] = json!(engagement_rate(&doc));
            doc
        })
        .collect();

    let mut by_views = ranked.clone();
    by_views.sort_by_key(|d| std::cmp::Reverse(d["views"].as_u64().unwrap_or(0)));
    by_views.truncate(5);

    let mut by_engagement = ranked;
    by_engagement.sort_by(|a, b| {
        b["engagement_rate"]
            .as_f64()
            .unwrap_or(0.0)
            .total_cmp(&a["engagement_rate"].as_f64().unwrap_or(0.0))
    });
    by_engagement.truncate(5);

    Ok(Json(json!({ "top_by_views": by_views, "top_by_engagement": by_engagement })))
}

async fn trends_handler(State(backend): State<Backend>) -> ApiResult {
    let store = backend.store();
    guard_read(&store)?;

    let points: Vec<Value> = store
        .records("performance")
        .iter()
        .map(|doc| {
            json!({
                "date": doc["recorded_date"].as_str().map(|d| d.chars().take(10).collect::<String>()).unwrap_or_default(),
                "title": doc["content_title"],
                "platform": doc["platform"],
                "views": doc["views"],
                "likes": doc["likes"],
                "comments": doc["comments"],
            })
        })
        .collect();
    Ok(Json(Value::Array(points)))
}

async fn idea_search_handler(State(backend): State<Backend>, Path(query): Path<String>) -> ApiResult {
    let store = backend.store();
    guard_read(&store)?;

    let needle = query.to_lowercase();
    let contains = |v: &Value| v.as_str().is_some_and(|s| s.to_lowercase().contains(&needle));
    let hits: Vec<Value> = store
        .records("ideas")
        .into_iter()
        .filter(|doc| {
            contains(&doc["title"])
                || contains(&doc["content"])
                || doc["tags"].as_array().is_some_and(|tags| tags.iter().any(contains))
        })
        .collect();
    Ok(Json(Value::Array(hits)))
}

async fn generate_handler(State(backend): State<Backend>, Path(id): Path<String>) -> ApiResult {
    let mut store = backend.store();
    guard_write(&store)?;
    store
        .generate_from_recurring(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn auto_generate_handler(State(backend): State<Backend>) -> ApiResult {
    let mut store = backend.store();
    guard_write(&store)?;
    Ok(Json(store.auto_generate()))
}

async fn dashboard_handler(State(backend): State<Backend>) -> ApiResult {
    let store = backend.store();
    guard_read(&store)?;

    let videos = store.records("videos");
    let in_progress = videos
        .iter()
        .filter(|v| {
            !v["stages"]
                .as_array()
                .is_some_and(|s| s.iter().all(|stage| stage["completed"] == true))
        })
        .count();
    let pending_tasks = store
        .records("tasks")
        .iter()
        .filter(|t| t["status"] != "completed")
        .count();

    Ok(Json(json!({
        "videos_in_progress": in_progress,
        "upcoming_calendar_items": store.records("calendar").iter().filter(|c| c["status"] != "posted").count(),
        "pending_tasks": pending_tasks,
        "urgent_tasks": [],
        "total_videos": videos.len(),
        "total_study_notes": store.records("study-notes").len(),
        "monthly_income": 0.0,
        "pending_payments": 0.0,
    })))
}

pub fn stub_router(backend: Backend) -> Router {
    Router::new()
        .route("/api/dashboard/stats", get(dashboard_handler))
        .route("/api/revenue/summary/monthly", get(revenue_monthly_handler))
        .route("/api/revenue/summary/category", get(revenue_category_handler))
        .route("/api/performance/analytics/top-content", get(top_content_handler))
        .route("/api/performance/analytics/trends", get(trends_handler))
        .route("/api/ideas/search/{query}", get(idea_search_handler))
        .route("/api/recurring-tasks/auto-generate", post(auto_generate_handler))
        .route("/api/recurring-tasks/{id}/generate", post(generate_handler))
        .route("/api/{collection}", get(list_handler).post(create_handler))
        .route(
            "/api/{collection}/{id}",
            put(update_handler).delete(delete_handler),
        )
        .with_state(backend)
}

pub struct TestServer {
    pub backend: Backend,
    pub client: ApiClient,
}

/// Serves the stub backend on an ephemeral local port.
pub async fn spawn_stub_backend() -> anyhow::Result<TestServer> {
    let backend = Backend::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = stub_router(backend.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    let client = ApiClient::new(&format!("http://{}", addr))?;
    Ok(TestServer { backend, client })
}
