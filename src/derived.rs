//! Views computed from an already-fetched list. Nothing here touches the network.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::*;

/// Open tasks first, completed tasks last. The sort is stable, so each group
/// keeps the order the backend returned.
pub fn order_tasks(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| t.status == TaskStatus::Completed);
}

pub fn completed_stages(video: &Video) -> usize {
    video.stages.iter().filter(|s| s.completed).count()
}

/// Fraction of stages completed, in `[0, 1]`. A video without stages has no progress.
pub fn progress(video: &Video) -> f64 {
    if video.stages.is_empty() {
        return 0.0;
    }
    completed_stages(video) as f64 / video.stages.len() as f64
}

/// Flips stage `index` and stamps (or clears) its completion time.
/// Returns `None` when the index is out of range.
pub fn toggle_stage(
    stages: &[VideoStage],
    index: usize,
    now: DateTime<Utc>,
) -> Option<Vec<VideoStage>> {
    if index >= stages.len() {
        return None;
    }

    let mut updated = stages.to_vec();
    let stage = &mut updated[index];
    stage.completed = !stage.completed;
    stage.completed_date = stage.completed.then_some(now);
    Some(updated)
}

/// Calendar bucket of an item: the UTC calendar date of its scheduled time.
pub fn day_key(item: &CalendarItem) -> NaiveDate {
    item.scheduled_date.date_naive()
}

pub fn items_on(items: &[CalendarItem], day: NaiveDate) -> Vec<&CalendarItem> {
    items.iter().filter(|i| day_key(i) == day).collect()
}

/// One marker per day that has items. When several items share a day the
/// last one in list order decides the marker's status.
pub fn marked_days(items: &[CalendarItem]) -> BTreeMap<NaiveDate, CalendarStatus> {
    items
        .iter()
        .map(|item| (day_key(item), item.status))
        .collect()
}

/// Case-insensitive substring match over title, content, tags and category.
/// A blank query matches everything.
pub fn idea_matches(idea: &Idea, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    idea.title.to_lowercase().contains(&needle)
        || idea.content.to_lowercase().contains(&needle)
        || idea
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
        || idea.category.to_lowercase().contains(&needle)
}

pub fn search_ideas<'a>(ideas: &'a [Idea], query: &str) -> Vec<&'a Idea> {
    ideas.iter().filter(|i| idea_matches(i, query)).collect()
}

/// The most recent month in the summary, or zeros when there is none.
pub fn current_month(summary: &RevenueSummary) -> MonthlyRevenue {
    summary.monthly.first().cloned().unwrap_or_default()
}

/// Received revenue across all categories.
pub fn total_received(summary: &RevenueSummary) -> f64 {
    summary.by_category.iter().map(|c| c.total).sum()
}

