//! Binds each backend collection to its record, payload and draft types.
//!
//! Every screen is the same controller instantiated with one of the marker
//! types below; the differences between screens live in these impls.

use std::fmt::Debug;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::ApiClient;
use crate::constants::*;
use crate::derived;
use crate::error::ClientError;
use crate::forms::*;
use crate::models::*;

#[allow(async_fn_in_trait)]
pub trait Resource: Sized {
    /// Collection path, relative to the backend origin
    const PATH: &'static str;
    /// Singular noun used in alerts and logs
    const NAME: &'static str;

    type Record: DeserializeOwned + Serialize + Identified + Clone + Debug;
    type Create: Serialize + Clone + Debug;
    type Update: Serialize + From<Self::Create> + Default + Debug;
    type Draft: Form<Record = Self::Record, Output = Self::Create>;
    type Summary: Default + Clone + Debug;
    type Filter: Default + Clone + Debug;

    /// Ordering applied to every list the backend returns.
    fn arrange(_records: &mut Vec<Self::Record>) {}

    fn matches(_record: &Self::Record, _filter: &Self::Filter) -> bool {
        true
    }

    async fn fetch_summary(_api: &ApiClient) -> Result<Self::Summary, ClientError> {
        Ok(Self::Summary::default())
    }
}

pub struct Tasks;
pub struct Videos;
pub struct StudyNotes;
pub struct Calendar;
pub struct Ideas;
pub struct Revenue;
pub struct Performance;
pub struct RecurringTasks;

impl Resource for Tasks {
    const PATH: &'static str = TASKS_PATH;
    const NAME: &'static str = "task";

    type Record = Task;
    type Create = NewTask;
    type Update = TaskUpdate;
    type Draft = TaskDraft;
    type Summary = ();
    type Filter = ();

    fn arrange(records: &mut Vec<Task>) {
        derived::order_tasks(records);
    }
}

impl Resource for Videos {
    const PATH: &'static str = VIDEOS_PATH;
    const NAME: &'static str = "video";

    type Record = Video;
    type Create = NewVideo;
    type Update = VideoUpdate;
    type Draft = VideoDraft;
    type Summary = ();
    type Filter = ();
}

impl Resource for StudyNotes {
    const PATH: &'static str = STUDY_NOTES_PATH;
    const NAME: &'static str = "note";

    type Record = StudyNote;
    type Create = NewStudyNote;
    type Update = StudyNoteUpdate;
    type Draft = StudyNoteDraft;
    type Summary = ();
    type Filter = ();
}

impl Resource for Calendar {
    const PATH: &'static str = CALENDAR_PATH;
    const NAME: &'static str = "calendar item";

    type Record = CalendarItem;
    type Create = NewCalendarItem;
    type Update = CalendarItemUpdate;
    type Draft = CalendarDraft;
    type Summary = ();
    /// Selected day; `None` shows every item
    type Filter = Option<NaiveDate>;

    fn matches(record: &CalendarItem, day: &Option<NaiveDate>) -> bool {
        day.is_none_or(|d| derived::day_key(record) == d)
    }
}

impl Resource for Ideas {
    const PATH: &'static str = IDEAS_PATH;
    const NAME: &'static str = "idea";

    type Record = Idea;
    type Create = NewIdea;
    type Update = IdeaUpdate;
    type Draft = IdeaDraft;
    type Summary = ();
    /// Search query
    type Filter = String;

    fn matches(record: &Idea, query: &String) -> bool {
        derived::idea_matches(record, query)
    }
}

impl Resource for Revenue {
    const PATH: &'static str = REVENUE_PATH;
    const NAME: &'static str = "revenue";

    type Record = RevenueEntry;
    type Create = NewRevenueEntry;
    type Update = RevenueUpdate;
    type Draft = RevenueDraft;
    type Summary = RevenueSummary;
    type Filter = ();

    async fn fetch_summary(api: &ApiClient) -> Result<RevenueSummary, ClientError> {
        let (monthly, by_category) = tokio::try_join!(
            api.revenue_monthly_summary(),
            api.revenue_category_summary()
        )?;
        Ok(RevenueSummary {
            monthly,
            by_category,
        })
    }
}

impl Resource for Performance {
    const PATH: &'static str = PERFORMANCE_PATH;
    const NAME: &'static str = "performance data";

    type Record = PerformanceEntry;
    type Create = NewPerformanceEntry;
    type Update = PerformanceUpdate;
    type Draft = PerformanceDraft;
    type Summary = TopContent;
    type Filter = ();

    async fn fetch_summary(api: &ApiClient) -> Result<TopContent, ClientError> {
        api.top_content().await
    }
}

impl Resource for RecurringTasks {
    const PATH: &'static str = RECURRING_TASKS_PATH;
    const NAME: &'static str = "recurring task";

    type Record = RecurringTask;
    type Create = NewRecurringTask;
    type Update = RecurringTaskUpdate;
    type Draft = RecurringTaskDraft;
    type Summary = ();
    type Filter = ();
}
