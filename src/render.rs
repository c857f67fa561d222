//! Plain-text cards for the command-line screens.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::controller::Alert;
use crate::derived;
use crate::models::*;
use crate::utils::*;

const RULE: &str = "----------------------------------------";

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

fn push_optional(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        push_line(out, format!("  {}: {}", label, value));
    }
}

/// Joins cards with a rule; an empty list renders `empty`.
pub fn list<T>(items: &[T], empty: &str, card: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return format!("{}\n", empty);
    }
    items
        .iter()
        .map(card)
        .collect::<Vec<_>>()
        .join(&format!("{}\n", RULE))
}

pub fn alert(alert: &Alert) -> String {
    format!("{}: {}", alert.title, alert.message)
}

pub fn task(task: &Task) -> String {
    let mut out = String::new();
    let check = if task.status == TaskStatus::Completed {
        "[x]"
    } else {
        "[ ]"
    };
    push_line(&mut out, format!("{} {}  ({})", check, task.title, task.id));
    push_line(
        &mut out,
        format!("  priority: {}  status: {}", task.priority, task.status),
    );
    push_optional(&mut out, "category", &task.category);
    push_optional(&mut out, "description", &task.description);
    if let Some(due) = &task.due_date {
        push_line(&mut out, format!("  due: {}", format_date_full(due)));
    }
    out
}

pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn video(video: &Video) -> String {
    let mut out = String::new();
    let progress = derived::progress(video);
    push_line(&mut out, format!("{}  ({})", video.title, video.id));
    push_line(
        &mut out,
        format!(
            "  {} {}/{} stages ({:.0}%)",
            progress_bar(progress, 20),
            derived::completed_stages(video),
            video.stages.len(),
            progress * 100.0
        ),
    );
    for (i, stage) in video.stages.iter().enumerate() {
        let done = match &stage.completed_date {
            Some(date) if stage.completed => format!("  done {}", format_date_short(date)),
            _ => String::new(),
        };
        let check = if stage.completed { "x" } else { " " };
        push_line(&mut out, format!("  {}. [{}] {}{}", i, check, stage.name, done));
    }
    push_optional(&mut out, "description", &video.description);
    if let Some(due) = &video.due_date {
        push_line(&mut out, format!("  due: {}", format_date_full(due)));
    }
    out
}

pub fn study_note(note: &StudyNote) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("{}  ({})", note.title, note.id));
    push_line(&mut out, format!("  subject: {}", note.subject));
    push_line(
        &mut out,
        format!(
            "  {} {}%",
            progress_bar(f64::from(note.progress_percentage) / 100.0, 20),
            note.progress_percentage
        ),
    );
    push_optional(&mut out, "notes", &note.content);
    out
}

pub fn calendar_item(item: &CalendarItem) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("{}  ({})", item.title, item.id));
    push_line(
        &mut out,
        format!(
            "  {}  {}  {}",
            format_date_full(&item.scheduled_date),
            item.content_type,
            item.status
        ),
    );
    push_optional(&mut out, "platform", &item.platform);
    push_optional(&mut out, "description", &item.description);
    out
}

/// One line per marked day, e.g. `2024-03-15  scheduled`.
pub fn calendar_markers(markers: &BTreeMap<NaiveDate, CalendarStatus>) -> String {
    markers
        .iter()
        .map(|(day, status)| format!("{}  {}\n", day.format("%Y-%m-%d"), status))
        .collect()
}

pub fn idea(idea: &Idea) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("{}  ({})", idea.title, idea.id));
    push_line(
        &mut out,
        format!("  priority: {}  status: {}", idea.priority, idea.status),
    );
    push_optional(&mut out, "category", &idea.category);
    push_optional(&mut out, "content", &idea.content);
    if !idea.tags.is_empty() {
        let tags: Vec<String> = idea.tags.iter().map(|t| format!("#{}", t)).collect();
        push_line(&mut out, format!("  tags: {}", tags.join(" ")));
    }
    for link in &idea.links {
        push_line(&mut out, format!("  link: {}", link));
    }
    out
}

pub fn revenue_entry(entry: &RevenueEntry) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        format!("{}  {}  ({})", format_amount(entry.amount), entry.source_category, entry.id),
    );
    push_line(
        &mut out,
        format!(
            "  {}  {}",
            entry.payment_status,
            format_date_full(&entry.payment_date)
        ),
    );
    push_optional(&mut out, "source", &entry.source_detail);
    push_optional(&mut out, "platform", &entry.platform);
    push_optional(&mut out, "description", &entry.description);
    out
}

pub fn revenue_summary(summary: &RevenueSummary) -> String {
    let mut out = String::new();
    let month = derived::current_month(summary);
    let label = if month.month.is_empty() {
        "This month".to_string()
    } else {
        format_month_key(&month.month)
    };
    push_line(
        &mut out,
        format!(
            "{}: received {}  pending {}  ({} entries)",
            label,
            format_amount(month.total_received),
            format_amount(month.total_pending),
            month.count
        ),
    );
    push_line(
        &mut out,
        format!(
            "Total received: {}",
            format_amount(derived::total_received(summary))
        ),
    );
    for category in &summary.by_category {
        push_line(
            &mut out,
            format!(
                "  {}: {} ({})",
                category.category,
                format_amount(category.total),
                category.count
            ),
        );
    }
    out
}

pub fn performance_entry(entry: &PerformanceEntry) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("{}  ({})", entry.content_title, entry.id));
    push_line(
        &mut out,
        format!(
            "  {} on {}  {}",
            entry.content_type,
            entry.platform,
            format_date_full(&entry.recorded_date)
        ),
    );
    push_line(
        &mut out,
        format!(
            "  views {}  likes {}  comments {}  shares {}  reach {}",
            format_count(entry.views),
            format_count(entry.likes),
            format_count(entry.comments),
            format_count(entry.shares),
            format_count(entry.reach)
        ),
    );
    out
}

pub fn top_content(top: &TopContent) -> String {
    let mut out = String::new();
    push_line(&mut out, "Top by views:");
    for (rank, item) in top.top_by_views.iter().enumerate() {
        push_line(
            &mut out,
            format!(
                "  {}. {}  {} views",
                rank + 1,
                item.entry.content_title,
                format_count(item.entry.views)
            ),
        );
    }
    push_line(&mut out, "Top by engagement:");
    for (rank, item) in top.top_by_engagement.iter().enumerate() {
        push_line(
            &mut out,
            format!(
                "  {}. {}  {:.2}%",
                rank + 1,
                item.entry.content_title,
                item.engagement_rate
            ),
        );
    }
    out
}

pub fn trend_point(point: &TrendPoint) -> String {
    format!(
        "{}  {}  {}  views {}  likes {}  comments {}\n",
        if point.date.is_empty() { "-" } else { point.date.as_str() },
        point.title,
        point.platform,
        format_count(point.views),
        format_count(point.likes),
        format_count(point.comments)
    )
}

pub fn recurring_task(task: &RecurringTask) -> String {
    let mut out = String::new();
    let state = if task.is_active { "active" } else { "paused" };
    push_line(&mut out, format!("{}  ({})", task.title, task.id));
    push_line(
        &mut out,
        format!(
            "  {} {}  priority: {}  {}",
            task.frequency, task.frequency_detail, task.priority, state
        ),
    );
    push_line(
        &mut out,
        format!("  next due: {}", format_date_full(&task.next_due_date)),
    );
    if let Some(last) = &task.last_generated_date {
        push_line(&mut out, format!("  last generated: {}", format_date_full(last)));
    }
    push_optional(&mut out, "category", &task.category);
    push_optional(&mut out, "description", &task.description);
    out
}

pub fn dashboard(stats: &DashboardStats) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("Videos in progress:   {}", stats.videos_in_progress));
    push_line(
        &mut out,
        format!("Upcoming posts:       {}", stats.upcoming_calendar_items),
    );
    push_line(&mut out, format!("Pending tasks:        {}", stats.pending_tasks));
    push_line(&mut out, format!("Total videos:         {}", stats.total_videos));
    push_line(&mut out, format!("Study notes:          {}", stats.total_study_notes));
    push_line(
        &mut out,
        format!("Income this month:    {}", format_amount(stats.monthly_income)),
    );
    push_line(
        &mut out,
        format!("Pending payments:     {}", format_amount(stats.pending_payments)),
    );
    if !stats.urgent_tasks.is_empty() {
        push_line(&mut out, "Urgent:");
        for task in &stats.urgent_tasks {
            let due = format_optional_date(task.due_date.as_ref());
            push_line(&mut out, format!("  {} (due {})", task.title, due));
        }
    }
    out
}
