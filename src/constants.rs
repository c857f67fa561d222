// Backend configuration
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const LEGACY_BACKEND_URL_VAR: &str = "EXPO_PUBLIC_BACKEND_URL";
pub const DEFAULT_LOG_FILTER: &str = "manpharma=info";

// API paths
pub const TASKS_PATH: &str = "/api/tasks";
pub const VIDEOS_PATH: &str = "/api/videos";
pub const STUDY_NOTES_PATH: &str = "/api/study-notes";
pub const CALENDAR_PATH: &str = "/api/calendar";
pub const IDEAS_PATH: &str = "/api/ideas";
pub const REVENUE_PATH: &str = "/api/revenue";
pub const PERFORMANCE_PATH: &str = "/api/performance";
pub const RECURRING_TASKS_PATH: &str = "/api/recurring-tasks";
pub const DASHBOARD_STATS_PATH: &str = "/api/dashboard/stats";
pub const REVENUE_MONTHLY_PATH: &str = "/api/revenue/summary/monthly";
pub const REVENUE_CATEGORY_PATH: &str = "/api/revenue/summary/category";
pub const TOP_CONTENT_PATH: &str = "/api/performance/analytics/top-content";
pub const TRENDS_PATH: &str = "/api/performance/analytics/trends";
pub const IDEA_SEARCH_PATH: &str = "/api/ideas/search";
pub const AUTO_GENERATE_PATH: &str = "/api/recurring-tasks/auto-generate";

// Video stages assigned by the backend on creation
pub const DEFAULT_VIDEO_STAGES: [&str; 6] =
    ["Idea", "Script", "PPT", "Recording", "Editing", "Upload"];

// Option vocabularies
pub const TASK_CATEGORIES: [&str; 5] = ["Content", "Editing", "Research", "Admin", "Other"];
pub const IDEA_CATEGORIES: [&str; 5] =
    ["Pharmacology", "Pathology", "Clinical", "Anatomy", "Other"];
pub const CALENDAR_CONTENT_TYPES: [&str; 6] =
    ["Video", "Post", "Story", "Reel", "Article", "Other"];
pub const CALENDAR_PLATFORMS: [&str; 6] = [
    "YouTube",
    "Instagram",
    "Facebook",
    "LinkedIn",
    "Twitter",
    "TikTok",
];
pub const REVENUE_PLATFORMS: [&str; 6] =
    ["Udemy", "YouTube", "Instagram", "Direct", "Coursera", "Other"];
pub const PERFORMANCE_CONTENT_TYPES: [&str; 5] = ["Video", "Post", "Story", "Reel", "Course"];
pub const PERFORMANCE_PLATFORMS: [&str; 5] =
    ["YouTube", "Instagram", "Facebook", "LinkedIn", "Udemy"];

// Form defaults
pub const DEFAULT_CONTENT_TYPE: &str = "Video";
pub const DEFAULT_PERFORMANCE_PLATFORM: &str = "YouTube";
pub const MAX_PROGRESS_PERCENTAGE: u8 = 100;

// Alert texts
pub const ALERT_TITLE_ERROR: &str = "Error";
pub const ERR_TASK_TITLE: &str = "Please enter a task title";
pub const ERR_VIDEO_TITLE: &str = "Please enter a video title";
pub const ERR_NOTE_FIELDS: &str = "Please enter title and subject";
pub const ERR_NOTE_PROGRESS: &str = "Progress must be between 0 and 100";
pub const ERR_CALENDAR_TITLE: &str = "Please enter a title";
pub const ERR_IDEA_TITLE: &str = "Please enter an idea title";
pub const ERR_REVENUE_AMOUNT: &str = "Please enter a valid amount";
pub const ERR_PERFORMANCE_TITLE: &str = "Please enter content title";
pub const ERR_RECURRING_TITLE: &str = "Please enter a recurring task title";
pub const ERR_TASK_STATUS: &str = "Failed to update task status";
pub const ERR_VIDEO_STAGE: &str = "Failed to update video stage";
pub const ERR_GENERATE_TASK: &str = "Failed to generate task";
pub const ERR_UNKNOWN_RECORD: &str = "Record is no longer available";
