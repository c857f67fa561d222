//! Editable drafts behind each screen's modal form.
//!
//! A draft holds values in the shape the inputs bind to (amounts and counters
//! as text, dates as structured values). Coercion back to wire types happens
//! only in [`Form::validate`], at the submit boundary.

use std::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::constants::*;
use crate::error::ValidationError;
use crate::models::*;

pub trait Form: Default + Clone + Debug {
    type Record;
    /// One edit to a single input
    type Field;
    /// Create payload produced by a valid draft
    type Output;

    fn from_record(record: &Self::Record) -> Self;

    fn apply(&mut self, field: Self::Field);

    fn validate(&self) -> Result<Self::Output, ValidationError>;
}

fn require(value: &str, message: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(message));
    }
    Ok(trimmed.to_string())
}

/// Leading digits of the input, or zero when there are none.
pub fn parse_count(value: &str) -> u64 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

// Tasks

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskField {
    Title(String),
    Description(String),
    Priority(Priority),
    Status(TaskStatus),
    DueDate(Option<DateTime<Utc>>),
    Category(String),
}

impl Form for TaskDraft {
    type Record = Task;
    type Field = TaskField;
    type Output = NewTask;

    fn from_record(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
            due_date: task.due_date,
            category: task.category.clone(),
        }
    }

    fn apply(&mut self, field: TaskField) {
        match field {
            TaskField::Title(v) => self.title = v,
            TaskField::Description(v) => self.description = v,
            TaskField::Priority(v) => self.priority = v,
            TaskField::Status(v) => self.status = v,
            TaskField::DueDate(v) => self.due_date = v,
            TaskField::Category(v) => self.category = v,
        }
    }

    fn validate(&self) -> Result<NewTask, ValidationError> {
        Ok(NewTask {
            title: require(&self.title, ERR_TASK_TITLE)?,
            description: self.description.clone(),
            priority: self.priority,
            status: self.status,
            due_date: self.due_date,
            category: self.category.clone(),
        })
    }
}

// Videos

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VideoField {
    Title(String),
    Description(String),
    DueDate(Option<DateTime<Utc>>),
}

impl Form for VideoDraft {
    type Record = Video;
    type Field = VideoField;
    type Output = NewVideo;

    fn from_record(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            description: video.description.clone(),
            due_date: video.due_date,
        }
    }

    fn apply(&mut self, field: VideoField) {
        match field {
            VideoField::Title(v) => self.title = v,
            VideoField::Description(v) => self.description = v,
            VideoField::DueDate(v) => self.due_date = v,
        }
    }

    fn validate(&self) -> Result<NewVideo, ValidationError> {
        Ok(NewVideo {
            title: require(&self.title, ERR_VIDEO_TITLE)?,
            description: self.description.clone(),
            due_date: self.due_date,
        })
    }
}

// Study notes

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyNoteDraft {
    pub title: String,
    pub subject: String,
    pub content: String,
    pub progress_percentage: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudyNoteField {
    Title(String),
    Subject(String),
    Content(String),
    Progress(u32),
}

impl Form for StudyNoteDraft {
    type Record = StudyNote;
    type Field = StudyNoteField;
    type Output = NewStudyNote;

    fn from_record(note: &StudyNote) -> Self {
        Self {
            title: note.title.clone(),
            subject: note.subject.clone(),
            content: note.content.clone(),
            progress_percentage: note.progress_percentage,
        }
    }

    fn apply(&mut self, field: StudyNoteField) {
        match field {
            StudyNoteField::Title(v) => self.title = v,
            StudyNoteField::Subject(v) => self.subject = v,
            StudyNoteField::Content(v) => self.content = v,
            StudyNoteField::Progress(v) => self.progress_percentage = v,
        }
    }

    fn validate(&self) -> Result<NewStudyNote, ValidationError> {
        let title = require(&self.title, ERR_NOTE_FIELDS)?;
        let subject = require(&self.subject, ERR_NOTE_FIELDS)?;
        if self.progress_percentage > u32::from(MAX_PROGRESS_PERCENTAGE) {
            return Err(ValidationError::new(ERR_NOTE_PROGRESS));
        }

        Ok(NewStudyNote {
            title,
            subject,
            content: self.content.clone(),
            progress_percentage: self.progress_percentage,
        })
    }
}

// Content calendar

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDraft {
    pub title: String,
    pub content_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub status: CalendarStatus,
    pub platform: String,
    pub description: String,
}

impl Default for CalendarDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            scheduled_date: Utc::now(),
            status: CalendarStatus::Draft,
            platform: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarField {
    Title(String),
    ContentType(String),
    ScheduledDate(DateTime<Utc>),
    Status(CalendarStatus),
    Platform(String),
    Description(String),
}

impl Form for CalendarDraft {
    type Record = CalendarItem;
    type Field = CalendarField;
    type Output = NewCalendarItem;

    fn from_record(item: &CalendarItem) -> Self {
        Self {
            title: item.title.clone(),
            content_type: item.content_type.clone(),
            scheduled_date: item.scheduled_date,
            status: item.status,
            platform: item.platform.clone(),
            description: item.description.clone(),
        }
    }

    fn apply(&mut self, field: CalendarField) {
        match field {
            CalendarField::Title(v) => self.title = v,
            CalendarField::ContentType(v) => self.content_type = v,
            CalendarField::ScheduledDate(v) => self.scheduled_date = v,
            CalendarField::Status(v) => self.status = v,
            CalendarField::Platform(v) => self.platform = v,
            CalendarField::Description(v) => self.description = v,
        }
    }

    fn validate(&self) -> Result<NewCalendarItem, ValidationError> {
        Ok(NewCalendarItem {
            title: require(&self.title, ERR_CALENDAR_TITLE)?,
            content_type: self.content_type.clone(),
            scheduled_date: self.scheduled_date,
            status: self.status,
            platform: self.platform.clone(),
            description: self.description.clone(),
        })
    }
}

// Idea bank

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: String,
    pub links: Vec<String>,
    pub priority: Priority,
    pub status: IdeaStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IdeaField {
    Title(String),
    Content(String),
    /// Trimmed; blank or duplicate tags are ignored
    AddTag(String),
    RemoveTag(String),
    Category(String),
    AddLink(String),
    RemoveLink(String),
    Priority(Priority),
    Status(IdeaStatus),
}

impl Form for IdeaDraft {
    type Record = Idea;
    type Field = IdeaField;
    type Output = NewIdea;

    fn from_record(idea: &Idea) -> Self {
        Self {
            title: idea.title.clone(),
            content: idea.content.clone(),
            tags: idea.tags.clone(),
            category: idea.category.clone(),
            links: idea.links.clone(),
            priority: idea.priority,
            status: idea.status,
        }
    }

    fn apply(&mut self, field: IdeaField) {
        match field {
            IdeaField::Title(v) => self.title = v,
            IdeaField::Content(v) => self.content = v,
            IdeaField::AddTag(v) => push_unique(&mut self.tags, &v),
            IdeaField::RemoveTag(v) => self.tags.retain(|t| t != &v),
            IdeaField::Category(v) => self.category = v,
            IdeaField::AddLink(v) => push_unique(&mut self.links, &v),
            IdeaField::RemoveLink(v) => self.links.retain(|l| l != &v),
            IdeaField::Priority(v) => self.priority = v,
            IdeaField::Status(v) => self.status = v,
        }
    }

    fn validate(&self) -> Result<NewIdea, ValidationError> {
        Ok(NewIdea {
            title: require(&self.title, ERR_IDEA_TITLE)?,
            content: self.content.clone(),
            tags: self.tags.clone(),
            category: self.category.clone(),
            links: self.links.clone(),
            priority: self.priority,
            status: self.status,
        })
    }
}

// Revenue

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueDraft {
    /// Text as typed; parsed on submit
    pub amount: String,
    pub source_category: RevenueCategory,
    pub source_detail: String,
    pub platform: String,
    pub payment_status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
    pub description: String,
}

impl Default for RevenueDraft {
    fn default() -> Self {
        Self {
            amount: String::new(),
            source_category: RevenueCategory::CourseSales,
            source_detail: String::new(),
            platform: String::new(),
            payment_status: PaymentStatus::Pending,
            payment_date: Utc::now(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevenueField {
    Amount(String),
    SourceCategory(RevenueCategory),
    SourceDetail(String),
    Platform(String),
    PaymentStatus(PaymentStatus),
    PaymentDate(DateTime<Utc>),
    Description(String),
}

impl Form for RevenueDraft {
    type Record = RevenueEntry;
    type Field = RevenueField;
    type Output = NewRevenueEntry;

    fn from_record(entry: &RevenueEntry) -> Self {
        Self {
            amount: entry.amount.to_string(),
            source_category: entry.source_category,
            source_detail: entry.source_detail.clone(),
            platform: entry.platform.clone(),
            payment_status: entry.payment_status,
            payment_date: entry.payment_date,
            description: entry.description.clone(),
        }
    }

    fn apply(&mut self, field: RevenueField) {
        match field {
            RevenueField::Amount(v) => self.amount = v,
            RevenueField::SourceCategory(v) => self.source_category = v,
            RevenueField::SourceDetail(v) => self.source_detail = v,
            RevenueField::Platform(v) => self.platform = v,
            RevenueField::PaymentStatus(v) => self.payment_status = v,
            RevenueField::PaymentDate(v) => self.payment_date = v,
            RevenueField::Description(v) => self.description = v,
        }
    }

    fn validate(&self) -> Result<NewRevenueEntry, ValidationError> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| ValidationError::new(ERR_REVENUE_AMOUNT))?;

        Ok(NewRevenueEntry {
            amount,
            source_category: self.source_category,
            source_detail: self.source_detail.clone(),
            platform: self.platform.clone(),
            payment_status: self.payment_status,
            payment_date: self.payment_date,
            description: self.description.clone(),
        })
    }
}

// Content performance

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceDraft {
    pub content_title: String,
    pub content_type: String,
    pub platform: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub shares: String,
    pub reach: String,
    pub recorded_date: DateTime<Utc>,
}

impl Default for PerformanceDraft {
    fn default() -> Self {
        Self {
            content_title: String::new(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            platform: DEFAULT_PERFORMANCE_PLATFORM.to_string(),
            views: String::new(),
            likes: String::new(),
            comments: String::new(),
            shares: String::new(),
            reach: String::new(),
            recorded_date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PerformanceField {
    ContentTitle(String),
    ContentType(String),
    Platform(String),
    Views(String),
    Likes(String),
    Comments(String),
    Shares(String),
    Reach(String),
    RecordedDate(DateTime<Utc>),
}

impl Form for PerformanceDraft {
    type Record = PerformanceEntry;
    type Field = PerformanceField;
    type Output = NewPerformanceEntry;

    fn from_record(entry: &PerformanceEntry) -> Self {
        Self {
            content_title: entry.content_title.clone(),
            content_type: entry.content_type.clone(),
            platform: entry.platform.clone(),
            views: entry.views.to_string(),
            likes: entry.likes.to_string(),
            comments: entry.comments.to_string(),
            shares: entry.shares.to_string(),
            reach: entry.reach.to_string(),
            recorded_date: entry.recorded_date,
        }
    }

    fn apply(&mut self, field: PerformanceField) {
        match field {
            PerformanceField::ContentTitle(v) => self.content_title = v,
            PerformanceField::ContentType(v) => self.content_type = v,
            PerformanceField::Platform(v) => self.platform = v,
            PerformanceField::Views(v) => self.views = v,
            PerformanceField::Likes(v) => self.likes = v,
            PerformanceField::Comments(v) => self.comments = v,
            PerformanceField::Shares(v) => self.shares = v,
            PerformanceField::Reach(v) => self.reach = v,
            PerformanceField::RecordedDate(v) => self.recorded_date = v,
        }
    }

    fn validate(&self) -> Result<NewPerformanceEntry, ValidationError> {
        Ok(NewPerformanceEntry {
            content_title: require(&self.content_title, ERR_PERFORMANCE_TITLE)?,
            content_type: self.content_type.clone(),
            platform: self.platform.clone(),
            views: parse_count(&self.views),
            likes: parse_count(&self.likes),
            comments: parse_count(&self.comments),
            shares: parse_count(&self.shares),
            reach: parse_count(&self.reach),
            recorded_date: self.recorded_date,
        })
    }
}

// Recurring tasks

#[derive(Debug, Clone, PartialEq)]
pub struct RecurringTaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub frequency: Frequency,
    pub frequency_detail: String,
    pub next_due_date: DateTime<Utc>,
    pub is_active: bool,
}

impl Default for RecurringTaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            category: String::new(),
            frequency: Frequency::Weekly,
            frequency_detail: String::new(),
            next_due_date: Utc::now(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecurringTaskField {
    Title(String),
    Description(String),
    Priority(Priority),
    Category(String),
    Frequency(Frequency),
    FrequencyDetail(String),
    NextDueDate(DateTime<Utc>),
    Active(bool),
}

impl Form for RecurringTaskDraft {
    type Record = RecurringTask;
    type Field = RecurringTaskField;
    type Output = NewRecurringTask;

    fn from_record(task: &RecurringTask) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            category: task.category.clone(),
            frequency: task.frequency,
            frequency_detail: task.frequency_detail.clone(),
            next_due_date: task.next_due_date,
            is_active: task.is_active,
        }
    }

    fn apply(&mut self, field: RecurringTaskField) {
        match field {
            RecurringTaskField::Title(v) => self.title = v,
            RecurringTaskField::Description(v) => self.description = v,
            RecurringTaskField::Priority(v) => self.priority = v,
            RecurringTaskField::Category(v) => self.category = v,
            RecurringTaskField::Frequency(v) => self.frequency = v,
            RecurringTaskField::FrequencyDetail(v) => self.frequency_detail = v,
            RecurringTaskField::NextDueDate(v) => self.next_due_date = v,
            RecurringTaskField::Active(v) => self.is_active = v,
        }
    }

    fn validate(&self) -> Result<NewRecurringTask, ValidationError> {
        Ok(NewRecurringTask {
            title: require(&self.title, ERR_RECURRING_TITLE)?,
            description: self.description.clone(),
            priority: self.priority,
            category: self.category.clone(),
            frequency: self.frequency,
            frequency_detail: self.frequency_detail.clone(),
            next_due_date: self.next_due_date,
            is_active: self.is_active,
        })
    }
}
