//! Per-screen state and the list / form / mutate / reload lifecycle.
//!
//! A controller owns a transient copy of one backend collection. After every
//! successful mutation it reloads the whole collection and replaces its copy;
//! it never patches records locally.

use chrono::Utc;
use tracing::{debug, error};

use crate::api::{ApiClient, DashboardApi, RecurringApi, ResourceApi};
use crate::constants::*;
use crate::derived;
use crate::error::{ClientError, ControllerError};
use crate::forms::Form;
use crate::models::*;
use crate::resources::*;

/// Blocking message the presentation layer must show until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: ALERT_TITLE_ERROR.to_string(),
            message: message.into(),
        }
    }
}

pub struct ScreenController<R: Resource, C> {
    api: C,
    records: Vec<R::Record>,
    summary: R::Summary,
    loading: bool,
    refreshing: bool,
    draft: R::Draft,
    /// `None` while creating, the record being edited otherwise
    selected: Option<R::Record>,
    modal_open: bool,
    pending_delete: Option<String>,
    alert: Option<Alert>,
    filter: R::Filter,
}

pub type TaskScreen<C = ApiClient> = ScreenController<Tasks, C>;
pub type VideoScreen<C = ApiClient> = ScreenController<Videos, C>;
pub type StudyNoteScreen<C = ApiClient> = ScreenController<StudyNotes, C>;
pub type CalendarScreen<C = ApiClient> = ScreenController<Calendar, C>;
pub type IdeaScreen<C = ApiClient> = ScreenController<Ideas, C>;
pub type RevenueScreen<C = ApiClient> = ScreenController<Revenue, C>;
pub type PerformanceScreen<C = ApiClient> = ScreenController<Performance, C>;
pub type RecurringTaskScreen<C = ApiClient> = ScreenController<RecurringTasks, C>;

impl<R: Resource, C: ResourceApi<R>> ScreenController<R, C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            records: Vec::new(),
            summary: R::Summary::default(),
            loading: false,
            refreshing: false,
            draft: R::Draft::default(),
            selected: None,
            modal_open: false,
            pending_delete: None,
            alert: None,
            filter: R::Filter::default(),
        }
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn summary(&self) -> &R::Summary {
        &self.summary
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn selected(&self) -> Option<&R::Record> {
        self.selected.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn filter(&self) -> &R::Filter {
        &self.filter
    }

    pub fn find(&self, id: &str) -> Option<&R::Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Records that pass the current filter, in list order.
    pub fn visible(&self) -> Vec<&R::Record> {
        self.records
            .iter()
            .filter(|r| R::matches(r, &self.filter))
            .collect()
    }

    pub fn set_filter(&mut self, filter: R::Filter) {
        self.filter = filter;
    }

    // Reads

    pub async fn initial_load(&mut self) {
        self.loading = true;
        self.fetch().await;
        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.refreshing = true;
        self.fetch().await;
        self.refreshing = false;
    }

    /// Replaces the list (and summary) with what the backend returns.
    /// Failures keep whatever was shown before.
    async fn fetch(&mut self) {
        let (list, summary) = tokio::join!(self.api.list(), self.api.summary());

        match list {
            Ok(mut records) => {
                R::arrange(&mut records);
                debug!("fetched {} {} records", records.len(), R::NAME);
                self.records = records;
            }
            Err(e) => error!("Error fetching {} list: {}", R::NAME, e),
        }

        match summary {
            Ok(summary) => self.summary = summary,
            Err(e) => error!("Error fetching {} summary: {}", R::NAME, e),
        }
    }

    // Form

    pub fn open_create(&mut self) {
        self.selected = None;
        self.draft = R::Draft::default();
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, record: &R::Record) {
        self.draft = R::Draft::from_record(record);
        self.selected = Some(record.clone());
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected = None;
    }

    pub fn update_draft_field(&mut self, field: <R::Draft as Form>::Field) {
        self.draft.apply(field);
    }

    /// Validates the draft, then creates or replaces the record and reloads.
    /// On any failure the modal stays open with the draft intact.
    pub async fn submit(&mut self) -> Result<(), ControllerError> {
        let payload = match self.draft.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.alert = Some(Alert::error(e.to_string()));
                return Err(e.into());
            }
        };

        let result = match self.selected.as_ref().map(|r| r.id().to_string()) {
            None => self.api.create(&payload).await.map(|_| ()),
            Some(id) => self.api.update(&id, &R::Update::from(payload)).await,
        };

        if let Err(e) = result {
            return Err(self.fail(&format!("Failed to save {}", R::NAME), e));
        }

        self.modal_open = false;
        self.selected = None;
        self.draft = R::Draft::default();
        self.refresh().await;
        Ok(())
    }

    // Delete, behind a confirmation step

    pub fn request_remove(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn cancel_remove(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_remove(&mut self) -> Result<(), ControllerError> {
        let id = self
            .pending_delete
            .take()
            .ok_or(ControllerError::NothingToConfirm)?;

        if let Err(e) = self.api.delete(&id).await {
            return Err(self.fail(&format!("Failed to delete {}", R::NAME), e));
        }

        self.refresh().await;
        Ok(())
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Sends a narrow update outside the form, then reloads.
    async fn patch(
        &mut self,
        id: &str,
        payload: R::Update,
        failure: &str,
    ) -> Result<(), ControllerError> {
        if let Err(e) = self.api.update(id, &payload).await {
            return Err(self.fail(failure, e));
        }
        self.refresh().await;
        Ok(())
    }

    fn fail(&mut self, message: &str, e: ClientError) -> ControllerError {
        error!("{}: {}", message, e);
        self.alert = Some(Alert::error(message));
        e.into()
    }

    fn missing(&mut self, id: &str) -> ControllerError {
        self.alert = Some(Alert::error(ERR_UNKNOWN_RECORD));
        ControllerError::UnknownRecord(id.to_string())
    }
}

impl<C: ResourceApi<Tasks>> ScreenController<Tasks, C> {
    /// Flips a task between pending and completed.
    pub async fn toggle_complete(&mut self, id: &str) -> Result<(), ControllerError> {
        let Some(status) = self.find(id).map(|t| t.status.toggled()) else {
            return Err(self.missing(id));
        };

        let update = TaskUpdate {
            status: Some(status),
            ..TaskUpdate::default()
        };
        self.patch(id, update, ERR_TASK_STATUS).await
    }
}

impl<C: ResourceApi<Videos>> ScreenController<Videos, C> {
    /// Flips one stage and sends the whole stage list; the rest of the video is untouched.
    pub async fn toggle_stage(&mut self, id: &str, index: usize) -> Result<(), ControllerError> {
        let Some(current) = self.find(id).map(|v| v.stages.clone()) else {
            return Err(self.missing(id));
        };

        let Some(stages) = derived::toggle_stage(&current, index, Utc::now()) else {
            return Err(ControllerError::UnknownStage {
                id: id.to_string(),
                index,
            });
        };

        let update = VideoUpdate {
            stages: Some(stages),
            ..VideoUpdate::default()
        };
        self.patch(id, update, ERR_VIDEO_STAGE).await
    }
}

impl<C: ResourceApi<RecurringTasks> + RecurringApi> ScreenController<RecurringTasks, C> {
    /// Creates a task from the template and advances its next due date.
    pub async fn generate(&mut self, id: &str) -> Result<Task, ControllerError> {
        match self.api.generate(id).await {
            Ok(task) => {
                self.refresh().await;
                Ok(task)
            }
            Err(e) => Err(self.fail(ERR_GENERATE_TASK, e)),
        }
    }

    /// Generates tasks for every active template that is due.
    pub async fn auto_generate(&mut self) -> Result<AutoGenerateResult, ControllerError> {
        match self.api.auto_generate().await {
            Ok(result) => {
                self.refresh().await;
                Ok(result)
            }
            Err(e) => Err(self.fail(ERR_GENERATE_TASK, e)),
        }
    }
}

/// Read-only counters screen.
pub struct DashboardScreen<C = ApiClient> {
    api: C,
    stats: DashboardStats,
    loading: bool,
    refreshing: bool,
}

impl<C: DashboardApi> DashboardScreen<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            stats: DashboardStats::default(),
            loading: false,
            refreshing: false,
        }
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub async fn initial_load(&mut self) {
        self.loading = true;
        self.fetch().await;
        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.refreshing = true;
        self.fetch().await;
        self.refreshing = false;
    }

    async fn fetch(&mut self) {
        match self.api.stats().await {
            Ok(stats) => self.stats = stats,
            Err(e) => error!("Error fetching dashboard stats: {}", e),
        }
    }
}
