use chrono::{TimeZone, Utc};
use manpharma::models::*;
use serde_json::json;

#[test]
fn test_task_reads_backend_shape() -> anyhow::Result<()> {
    let task: Task = serde_json::from_value(json!({
        "_id": "65f0c2",
        "title": "Edit intro",
        "description": null,
        "priority": "high",
        "status": "in_progress",
        "due_date": "2024-03-15T10:30:00",
        "category": "Editing",
        "created_date": "2024-03-01T08:00:00.123Z"
    }))?;

    assert_eq!(task.id(), "65f0c2");
    assert_eq!(task.description, "");
    assert_eq!(task.priority, Priority::High);
    // Legacy status reads as pending
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(
        task.due_date,
        Some(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap())
    );
    Ok(())
}

#[test]
fn test_missing_optional_fields_use_defaults() -> anyhow::Result<()> {
    let task: Task = serde_json::from_value(json!({ "_id": "1", "title": "Bare" }))?;
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.due_date, None);

    let recurring: RecurringTask = serde_json::from_value(json!({
        "_id": "2",
        "title": "Weekly upload",
        "next_due_date": "2024-03-18"
    }))?;
    assert!(recurring.is_active);
    assert_eq!(recurring.frequency, Frequency::Weekly);
    assert_eq!(
        recurring.next_due_date,
        Utc.with_ymd_and_hms(2024, 3, 18, 0, 0, 0).unwrap()
    );

    let stats: DashboardStats = serde_json::from_value(json!({ "pending_tasks": 4 }))?;
    assert_eq!(stats.pending_tasks, 4);
    assert!(stats.urgent_tasks.is_empty());
    assert_eq!(stats.monthly_income, 0.0);
    Ok(())
}

#[test]
fn test_dates_are_written_with_millis_and_z() -> anyhow::Result<()> {
    let payload = NewCalendarItem {
        title: "Launch reel".to_string(),
        content_type: "Reel".to_string(),
        scheduled_date: Utc.with_ymd_and_hms(2024, 3, 15, 22, 0, 0).unwrap(),
        status: CalendarStatus::Scheduled,
        platform: "Instagram".to_string(),
        description: String::new(),
    };

    let value = serde_json::to_value(&payload)?;
    assert_eq!(value["scheduled_date"], "2024-03-15T22:00:00.000Z");
    assert_eq!(value["status"], "scheduled");
    Ok(())
}

#[test]
fn test_partial_updates_carry_only_set_fields() -> anyhow::Result<()> {
    let update = TaskUpdate {
        status: Some(TaskStatus::Completed),
        ..TaskUpdate::default()
    };
    assert_eq!(serde_json::to_value(&update)?, json!({ "status": "completed" }));

    let full = TaskUpdate::from(NewTask {
        title: "Edit intro".to_string(),
        description: String::new(),
        priority: Priority::High,
        status: TaskStatus::Pending,
        due_date: None,
        category: String::new(),
    });
    let value = serde_json::to_value(&full)?;
    assert_eq!(value["title"], "Edit intro");
    assert!(value.get("due_date").is_none());
    Ok(())
}

#[test]
fn test_new_video_leaves_stages_to_backend() -> anyhow::Result<()> {
    let video = NewVideo {
        title: "Diuretics".to_string(),
        description: String::new(),
        due_date: None,
    };
    let value = serde_json::to_value(&video)?;
    assert!(value.get("stages").is_none());

    let update = VideoUpdate::from(video);
    assert_eq!(update.stages, None);
    Ok(())
}

#[test]
fn test_revenue_enums_use_display_labels() -> anyhow::Result<()> {
    let entry: RevenueEntry = serde_json::from_value(json!({
        "_id": "r1",
        "amount": 1499.0,
        "source_category": "Course Sales",
        "payment_status": "Received",
        "payment_date": "2024-03-02T00:00:00Z"
    }))?;
    assert_eq!(entry.source_category, RevenueCategory::CourseSales);
    assert_eq!(entry.payment_status, PaymentStatus::Received);
    assert_eq!(entry.source_category.to_string(), "Course Sales");
    Ok(())
}

#[test]
fn test_enum_parsing_is_case_insensitive() {
    assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
    assert_eq!("course sales".parse::<RevenueCategory>(), Ok(RevenueCategory::CourseSales));
    assert_eq!("Posted".parse::<CalendarStatus>(), Ok(CalendarStatus::Posted));
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn test_ranked_content_flattens_entry() -> anyhow::Result<()> {
    let top: TopContent = serde_json::from_value(json!({
        "top_by_views": [{
            "_id": "p1",
            "content_title": "Antibiotics 101",
            "content_type": "Video",
            "platform": "YouTube",
            "views": 12000,
            "likes": 900,
            "recorded_date": "2024-03-10T00:00:00Z",
            "engagement_rate": 8.5
        }]
    }))?;

    assert_eq!(top.top_by_views[0].entry.content_title, "Antibiotics 101");
    assert_eq!(top.top_by_views[0].entry.comments, 0);
    assert_eq!(top.top_by_views[0].engagement_rate, 8.5);
    assert!(top.top_by_engagement.is_empty());
    Ok(())
}

#[test]
fn test_unparseable_date_is_rejected() {
    let result: Result<CalendarItem, _> = serde_json::from_value(json!({
        "_id": "c1",
        "title": "Broken",
        "content_type": "Post",
        "scheduled_date": "next tuesday"
    }));
    assert!(result.is_err());
}

#[test]
fn test_unknown_or_null_enum_values_fall_back_to_defaults() -> anyhow::Result<()> {
    let idea: Idea = serde_json::from_value(json!({
        "_id": "i1",
        "title": "Mnemonics",
        "priority": null,
        "status": "archived"
    }))?;
    assert_eq!(idea.priority, Priority::Medium);
    assert_eq!(idea.status, IdeaStatus::Idea);

    let item: CalendarItem = serde_json::from_value(json!({
        "_id": "c1",
        "title": "Launch reel",
        "content_type": "Reel",
        "scheduled_date": "2024-03-15T22:00:00Z",
        "status": "SCHEDULED"
    }))?;
    assert_eq!(item.status, CalendarStatus::Scheduled);

    let recurring: RecurringTask = serde_json::from_value(json!({
        "_id": "r1",
        "title": "Upload",
        "frequency": "fortnightly",
        "next_due_date": "2024-03-18"
    }))?;
    assert_eq!(recurring.frequency, Frequency::Weekly);
    Ok(())
}
