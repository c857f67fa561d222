use chrono::{TimeZone, Utc};
use manpharma::constants::*;
use manpharma::forms::*;
use manpharma::models::*;

#[test]
fn test_task_draft_defaults_and_validation() {
    let draft = TaskDraft::default();
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.status, TaskStatus::Pending);
    assert_eq!(draft.due_date, None);

    let err = draft.validate().unwrap_err();
    assert_eq!(err.to_string(), ERR_TASK_TITLE);

    let mut draft = TaskDraft::default();
    draft.apply(TaskField::Title("   ".to_string()));
    assert!(draft.validate().is_err());

    draft.apply(TaskField::Title("  Edit intro ".to_string()));
    draft.apply(TaskField::Priority(Priority::High));
    let task = draft.validate().unwrap();
    assert_eq!(task.title, "Edit intro");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.status, TaskStatus::Pending);
}

#[test]
fn test_task_draft_round_trips_a_record() {
    let due = Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap();
    let record = Task {
        id: "t1".to_string(),
        title: "Thumbnail".to_string(),
        description: "Red background".to_string(),
        priority: Priority::Low,
        status: TaskStatus::Completed,
        due_date: Some(due),
        category: "Content".to_string(),
        created_date: None,
    };

    let payload = TaskDraft::from_record(&record).validate().unwrap();
    assert_eq!(payload.title, record.title);
    assert_eq!(payload.status, TaskStatus::Completed);
    assert_eq!(payload.due_date, Some(due));
    assert_eq!(payload.category, "Content");
}

#[test]
fn test_study_note_requires_title_and_subject() {
    let mut draft = StudyNoteDraft::default();
    draft.apply(StudyNoteField::Title("Autonomic drugs".to_string()));
    assert_eq!(draft.validate().unwrap_err().to_string(), ERR_NOTE_FIELDS);

    draft.apply(StudyNoteField::Subject("Pharmacology".to_string()));
    draft.apply(StudyNoteField::Progress(100));
    assert_eq!(draft.validate().unwrap().progress_percentage, 100);

    draft.apply(StudyNoteField::Progress(101));
    assert_eq!(draft.validate().unwrap_err().to_string(), ERR_NOTE_PROGRESS);
}

#[test]
fn test_revenue_amount_must_be_positive_number() {
    let mut draft = RevenueDraft::default();
    assert_eq!(draft.source_category, RevenueCategory::CourseSales);
    assert_eq!(draft.payment_status, PaymentStatus::Pending);

    for bad in ["", "abc", "0", "-20", "NaN", "inf"] {
        draft.apply(RevenueField::Amount(bad.to_string()));
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            ERR_REVENUE_AMOUNT,
            "amount {:?} should be rejected",
            bad
        );
    }

    draft.apply(RevenueField::Amount(" 1499.50 ".to_string()));
    assert_eq!(draft.validate().unwrap().amount, 1499.5);
}

#[test]
fn test_revenue_amount_becomes_text_when_editing() {
    let record = RevenueEntry {
        id: "r1".to_string(),
        amount: 250.0,
        source_category: RevenueCategory::Freelance,
        source_detail: "Lecture".to_string(),
        platform: "Direct".to_string(),
        payment_status: PaymentStatus::Received,
        payment_date: Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap(),
        description: String::new(),
        created_date: None,
    };

    let draft = RevenueDraft::from_record(&record);
    assert_eq!(draft.amount, "250");
    assert_eq!(draft.validate().unwrap().amount, 250.0);
}

#[test]
fn test_performance_counters_parse_leniently() {
    assert_eq!(parse_count("1200"), 1200);
    assert_eq!(parse_count(" 42 "), 42);
    assert_eq!(parse_count("15k"), 15);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("many"), 0);

    let mut draft = PerformanceDraft::default();
    assert_eq!(draft.content_type, DEFAULT_CONTENT_TYPE);
    assert_eq!(draft.platform, DEFAULT_PERFORMANCE_PLATFORM);
    assert_eq!(draft.validate().unwrap_err().to_string(), ERR_PERFORMANCE_TITLE);

    draft.apply(PerformanceField::ContentTitle("Antibiotics 101".to_string()));
    draft.apply(PerformanceField::Views("12000".to_string()));
    draft.apply(PerformanceField::Likes("abc".to_string()));
    let entry = draft.validate().unwrap();
    assert_eq!(entry.views, 12000);
    assert_eq!(entry.likes, 0);
}

#[test]
fn test_idea_tags_and_links() {
    let mut draft = IdeaDraft::default();
    draft.apply(IdeaField::AddTag(" cardio ".to_string()));
    draft.apply(IdeaField::AddTag("cardio".to_string()));
    draft.apply(IdeaField::AddTag("   ".to_string()));
    draft.apply(IdeaField::AddTag("exam".to_string()));
    assert_eq!(draft.tags, vec!["cardio", "exam"]);

    draft.apply(IdeaField::RemoveTag("cardio".to_string()));
    assert_eq!(draft.tags, vec!["exam"]);

    draft.apply(IdeaField::AddLink("https://example.org/ref".to_string()));
    draft.apply(IdeaField::RemoveLink("https://example.org/other".to_string()));
    assert_eq!(draft.links.len(), 1);

    assert_eq!(draft.validate().unwrap_err().to_string(), ERR_IDEA_TITLE);
    draft.apply(IdeaField::Title("Mnemonics for antiarrhythmics".to_string()));
    let idea = draft.validate().unwrap();
    assert_eq!(idea.status, IdeaStatus::Idea);
    assert_eq!(idea.tags, vec!["exam"]);
}

#[test]
fn test_calendar_and_recurring_defaults() {
    let calendar = CalendarDraft::default();
    assert_eq!(calendar.content_type, "Video");
    assert_eq!(calendar.status, CalendarStatus::Draft);
    assert_eq!(calendar.validate().unwrap_err().to_string(), ERR_CALENDAR_TITLE);

    let recurring = RecurringTaskDraft::default();
    assert_eq!(recurring.frequency, Frequency::Weekly);
    assert!(recurring.is_active);
    assert_eq!(recurring.validate().unwrap_err().to_string(), ERR_RECURRING_TITLE);

    let video = VideoDraft::default();
    assert_eq!(video.validate().unwrap_err().to_string(), ERR_VIDEO_TITLE);
}
