use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Records carry the backend-assigned identifier under `_id`.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

// Timestamps

/// Parses the backend's timestamps: RFC 3339, or naive ISO-8601 (stored as UTC),
/// or a bare calendar date.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Canonical wire form: millisecond precision with a `Z` suffix.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub mod iso_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

pub mod iso_date_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_str(&super::format_timestamp(v)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", raw))),
        }
    }
}

// Optional backend fields may come back as `null`
fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

// Vocabularies

macro_rules! string_enum {
    ($name:ident { $($variant:ident => $text:literal),* $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| {
                        let options: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        format!("'{}' is not one of: {}", s, options.join(", "))
                    })
            }
        }

        /// Values outside the vocabulary, and null, read as the default variant.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let Some(raw) = Option::<String>::deserialize(d)? else {
                    return Ok($name::default());
                };
                Ok(raw.parse().unwrap_or_else(|_| {
                    debug!("unknown {} '{}', reading as {}", stringify!($name), raw, $name::default());
                    $name::default()
                }))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

string_enum!(Priority { Low => "low", Medium => "medium", High => "high" });

/// Legacy records may still say `in_progress`; they read as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

string_enum!(TaskStatus { Pending => "pending", Completed => "completed" });

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarStatus {
    #[default]
    Draft,
    Scheduled,
    Posted,
}

string_enum!(CalendarStatus { Draft => "draft", Scheduled => "scheduled", Posted => "posted" });

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Idea,
    Researching,
    Ready,
    Used,
}

string_enum!(IdeaStatus {
    Idea => "idea",
    Researching => "researching",
    Ready => "ready",
    Used => "used",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RevenueCategory {
    #[default]
    #[serde(rename = "Course Sales")]
    CourseSales,
    Freelance,
    Other,
}

string_enum!(RevenueCategory {
    CourseSales => "Course Sales",
    Freelance => "Freelance",
    Other => "Other",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Received,
}

string_enum!(PaymentStatus { Pending => "Pending", Received => "Received" });

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

string_enum!(Frequency { Daily => "daily", Weekly => "weekly", Monthly => "monthly" });

// Tasks

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, with = "iso_date_opt")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<NewTask> for TaskUpdate {
    fn from(task: NewTask) -> Self {
        Self {
            title: Some(task.title),
            description: Some(task.description),
            priority: Some(task.priority),
            status: Some(task.status),
            due_date: task.due_date,
            category: Some(task.category),
        }
    }
}

// Videos

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoStage {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default)]
    pub stages: Vec<VideoStage>,
    #[serde(default, with = "iso_date_opt")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
}

/// Stages are left to the backend, which assigns the default set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<VideoStage>>,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl From<NewVideo> for VideoUpdate {
    fn from(video: NewVideo) -> Self {
        Self {
            title: Some(video.title),
            description: Some(video.description),
            stages: None,
            due_date: video.due_date,
        }
    }
}

// Study notes

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyNote {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub subject: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default)]
    pub progress_percentage: u32,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, with = "iso_date_opt")]
    pub updated_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStudyNote {
    pub title: String,
    pub subject: String,
    pub content: String,
    pub progress_percentage: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudyNoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<u32>,
}

impl From<NewStudyNote> for StudyNoteUpdate {
    fn from(note: NewStudyNote) -> Self {
        Self {
            title: Some(note.title),
            subject: Some(note.subject),
            content: Some(note.content),
            progress_percentage: Some(note.progress_percentage),
        }
    }
}

// Content calendar

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content_type: String,
    #[serde(with = "iso_date")]
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub status: CalendarStatus,
    #[serde(default, deserialize_with = "nullable")]
    pub platform: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCalendarItem {
    pub title: String,
    pub content_type: String,
    #[serde(with = "iso_date")]
    pub scheduled_date: DateTime<Utc>,
    pub status: CalendarStatus,
    pub platform: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalendarItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CalendarStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<NewCalendarItem> for CalendarItemUpdate {
    fn from(item: NewCalendarItem) -> Self {
        Self {
            title: Some(item.title),
            content_type: Some(item.content_type),
            scheduled_date: Some(item.scheduled_date),
            status: Some(item.status),
            platform: Some(item.platform),
            description: Some(item.description),
        }
    }
}

// Idea bank

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub links: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: IdeaStatus,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, with = "iso_date_opt")]
    pub updated_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewIdea {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: String,
    pub links: Vec<String>,
    pub priority: Priority,
    pub status: IdeaStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IdeaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IdeaStatus>,
}

impl From<NewIdea> for IdeaUpdate {
    fn from(idea: NewIdea) -> Self {
        Self {
            title: Some(idea.title),
            content: Some(idea.content),
            tags: Some(idea.tags),
            category: Some(idea.category),
            links: Some(idea.links),
            priority: Some(idea.priority),
            status: Some(idea.status),
        }
    }
}

// Revenue

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub source_category: RevenueCategory,
    #[serde(default, deserialize_with = "nullable")]
    pub source_detail: String,
    #[serde(default, deserialize_with = "nullable")]
    pub platform: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(with = "iso_date")]
    pub payment_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRevenueEntry {
    pub amount: f64,
    pub source_category: RevenueCategory,
    pub source_detail: String,
    pub platform: String,
    pub payment_status: PaymentStatus,
    #[serde(with = "iso_date")]
    pub payment_date: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RevenueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_category: Option<RevenueCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<NewRevenueEntry> for RevenueUpdate {
    fn from(entry: NewRevenueEntry) -> Self {
        Self {
            amount: Some(entry.amount),
            source_category: Some(entry.source_category),
            source_detail: Some(entry.source_detail),
            platform: Some(entry.platform),
            payment_status: Some(entry.payment_status),
            payment_date: Some(entry.payment_date),
            description: Some(entry.description),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`
    pub month: String,
    #[serde(default)]
    pub total_received: f64,
    #[serde(default)]
    pub total_pending: f64,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryRevenue {
    pub category: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u32,
}

/// Pre-aggregated revenue figures, fetched alongside the entry list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueSummary {
    /// Newest month first
    pub monthly: Vec<MonthlyRevenue>,
    pub by_category: Vec<CategoryRevenue>,
}

// Content performance

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content_id: String,
    pub content_title: String,
    pub content_type: String,
    pub platform: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub reach: u64,
    #[serde(with = "iso_date")]
    pub recorded_date: DateTime<Utc>,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPerformanceEntry {
    pub content_title: String,
    pub content_type: String,
    pub platform: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub reach: u64,
    #[serde(with = "iso_date")]
    pub recorded_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PerformanceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<DateTime<Utc>>,
}

impl From<NewPerformanceEntry> for PerformanceUpdate {
    fn from(entry: NewPerformanceEntry) -> Self {
        Self {
            content_title: Some(entry.content_title),
            content_type: Some(entry.content_type),
            platform: Some(entry.platform),
            views: Some(entry.views),
            likes: Some(entry.likes),
            comments: Some(entry.comments),
            shares: Some(entry.shares),
            reach: Some(entry.reach),
            recorded_date: Some(entry.recorded_date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedContent {
    #[serde(flatten)]
    pub entry: PerformanceEntry,
    /// Percentage of views that produced a like, comment or share
    #[serde(default)]
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TopContent {
    #[serde(default)]
    pub top_by_views: Vec<RankedContent>,
    #[serde(default)]
    pub top_by_engagement: Vec<RankedContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// `YYYY-MM-DD`, empty when the entry had no recorded date
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
}

// Recurring tasks

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTask {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, deserialize_with = "nullable")]
    pub frequency_detail: String,
    #[serde(with = "iso_date")]
    pub next_due_date: DateTime<Utc>,
    #[serde(default, with = "iso_date_opt")]
    pub last_generated_date: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, with = "iso_date_opt")]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecurringTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub frequency: Frequency,
    pub frequency_detail: String,
    #[serde(with = "iso_date")]
    pub next_due_date: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecurringTaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_detail: Option<String>,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<NewRecurringTask> for RecurringTaskUpdate {
    fn from(task: NewRecurringTask) -> Self {
        Self {
            title: Some(task.title),
            description: Some(task.description),
            priority: Some(task.priority),
            category: Some(task.category),
            frequency: Some(task.frequency),
            frequency_detail: Some(task.frequency_detail),
            next_due_date: Some(task.next_due_date),
            is_active: Some(task.is_active),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AutoGenerateResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: u32,
}

// Dashboard

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub videos_in_progress: u32,
    #[serde(default)]
    pub upcoming_calendar_items: u32,
    #[serde(default)]
    pub pending_tasks: u32,
    /// Open tasks due within the next three days, at most five
    #[serde(default)]
    pub urgent_tasks: Vec<Task>,
    #[serde(default)]
    pub total_videos: u32,
    #[serde(default)]
    pub total_study_notes: u32,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub pending_payments: f64,
}

impl_identified!(
    Task,
    Video,
    StudyNote,
    CalendarItem,
    Idea,
    RevenueEntry,
    PerformanceEntry,
    RecurringTask,
);
