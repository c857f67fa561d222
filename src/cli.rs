use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::api::{ApiClient, ResourceApi};
use crate::constants::*;
use crate::controller::*;
use crate::derived;
use crate::error::ControllerError;
use crate::forms::*;
use crate::models::*;
use crate::render;
use crate::resources::*;
use crate::utils::{parse_date_input, parse_day};

#[derive(Parser)]
#[command(name = "manpharma")]
#[command(about = "ManPharma Tutorials - content creator workspace")]
#[command(version)]
pub struct Cli {
    /// Backend origin; overrides BACKEND_URL
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Overview counters and urgent tasks
    Dashboard,
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Video production pipeline
    Videos {
        #[command(subcommand)]
        action: VideoAction,
    },
    /// Study notes
    Notes {
        #[command(subcommand)]
        action: NoteAction,
    },
    /// Content calendar
    Calendar {
        #[command(subcommand)]
        action: CalendarAction,
    },
    /// Idea bank
    Ideas {
        #[command(subcommand)]
        action: IdeaAction,
    },
    Revenue {
        #[command(subcommand)]
        action: RevenueAction,
    },
    /// Content performance
    Analytics {
        #[command(subcommand)]
        action: AnalyticsAction,
    },
    /// Recurring task templates
    Recurring {
        #[command(subcommand)]
        action: RecurringAction,
    },
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

fn parse_date_arg(value: &str) -> Result<DateTime<Utc>, String> {
    parse_date_input(value).ok_or_else(|| format!("'{}' is not a date (YYYY-MM-DD)", value))
}

fn parse_day_arg(value: &str) -> Result<NaiveDate, String> {
    parse_day(value).ok_or_else(|| format!("'{}' is not a date (YYYY-MM-DD)", value))
}

// Tasks

#[derive(Subcommand)]
pub enum TaskAction {
    List,
    Add(TaskFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    Delete(DeleteArgs),
    /// Flip between pending and completed
    Toggle { id: String },
}

#[derive(Args, Debug, Default)]
pub struct TaskFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long)]
    pub status: Option<TaskStatus>,
    /// Due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub due: Option<DateTime<Utc>>,
    #[arg(long, value_parser = PossibleValuesParser::new(TASK_CATEGORIES))]
    pub category: Option<String>,
}

impl TaskFields {
    pub fn into_fields(self) -> Vec<TaskField> {
        let mut fields = Vec::new();
        if let Some(v) = self.title {
            fields.push(TaskField::Title(v));
        }
        if let Some(v) = self.description {
            fields.push(TaskField::Description(v));
        }
        if let Some(v) = self.priority {
            fields.push(TaskField::Priority(v));
        }
        if let Some(v) = self.status {
            fields.push(TaskField::Status(v));
        }
        if let Some(v) = self.due {
            fields.push(TaskField::DueDate(Some(v)));
        }
        if let Some(v) = self.category {
            fields.push(TaskField::Category(v));
        }
        fields
    }
}

// Videos

#[derive(Subcommand)]
pub enum VideoAction {
    List,
    Add(VideoFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: VideoFields,
    },
    Delete(DeleteArgs),
    /// Mark a production stage done or not done
    Stage {
        id: String,
        /// Zero-based stage position
        index: usize,
    },
}

#[derive(Args, Debug, Default)]
pub struct VideoFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    pub due: Option<DateTime<Utc>>,
}

impl VideoFields {
    pub fn into_fields(self) -> Vec<VideoField> {
        let mut fields = Vec::new();
        if let Some(v) = self.title {
            fields.push(VideoField::Title(v));
        }
        if let Some(v) = self.description {
            fields.push(VideoField::Description(v));
        }
        if let Some(v) = self.due {
            fields.push(VideoField::DueDate(Some(v)));
        }
        fields
    }
}

// Study notes

#[derive(Subcommand)]
pub enum NoteAction {
    List,
    Add(NoteFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: NoteFields,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct NoteFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    /// Percent complete, 0-100
    #[arg(long)]
    pub progress: Option<u32>,
}

impl NoteFields {
    pub fn into_fields(self) -> Vec<StudyNoteField> {
        let mut fields = Vec::new();
        if let Some(v) = self.title {
            fields.push(StudyNoteField::Title(v));
        }
        if let Some(v) = self.subject {
            fields.push(StudyNoteField::Subject(v));
        }
        if let Some(v) = self.content {
            fields.push(StudyNoteField::Content(v));
        }
        if let Some(v) = self.progress {
            fields.push(StudyNoteField::Progress(v));
        }
        fields
    }
}

// Calendar

#[derive(Subcommand)]
pub enum CalendarAction {
    List {
        /// Only items scheduled on this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day_arg)]
        day: Option<NaiveDate>,
    },
    Add(CalendarFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: CalendarFields,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct CalendarFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "type", value_parser = PossibleValuesParser::new(CALENDAR_CONTENT_TYPES))]
    pub content_type: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<DateTime<Utc>>,
    #[arg(long)]
    pub status: Option<CalendarStatus>,
    #[arg(long, value_parser = PossibleValuesParser::new(CALENDAR_PLATFORMS))]
    pub platform: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl CalendarFields {
    pub fn into_fields(self) -> Vec<CalendarField> {
        let mut fields = Vec::new();
        if let Some(v) = self.title {
            fields.push(CalendarField::Title(v));
        }
        if let Some(v) = self.content_type {
            fields.push(CalendarField::ContentType(v));
        }
        if let Some(v) = self.date {
            fields.push(CalendarField::ScheduledDate(v));
        }
        if let Some(v) = self.status {
            fields.push(CalendarField::Status(v));
        }
        if let Some(v) = self.platform {
            fields.push(CalendarField::Platform(v));
        }
        if let Some(v) = self.description {
            fields.push(CalendarField::Description(v));
        }
        fields
    }
}

// Ideas

#[derive(Subcommand)]
pub enum IdeaAction {
    List {
        #[arg(long)]
        search: Option<String>,
        /// Search on the backend instead of the fetched list
        #[arg(long, requires = "search")]
        remote: bool,
    },
    Add(IdeaFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: IdeaFields,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct IdeaFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(IDEA_CATEGORIES))]
    pub category: Option<String>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long)]
    pub status: Option<IdeaStatus>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long = "untag")]
    pub removed_tags: Vec<String>,
    #[arg(long = "link")]
    pub links: Vec<String>,
    #[arg(long = "unlink")]
    pub removed_links: Vec<String>,
}

impl IdeaFields {
    pub fn into_fields(self) -> Vec<IdeaField> {
        let mut fields = Vec::new();
        if let Some(v) = self.title {
            fields.push(IdeaField::Title(v));
        }
        if let Some(v) = self.content {
            fields.push(IdeaField::Content(v));
        }
        if let Some(v) = self.category {
            fields.push(IdeaField::Category(v));
        }
        if let Some(v) = self.priority {
            fields.push(IdeaField::Priority(v));
        }
        if let Some(v) = self.status {
            fields.push(IdeaField::Status(v));
        }
        fields.extend(self.removed_tags.into_iter().map(IdeaField::RemoveTag));
        fields.extend(self.tags.into_iter().map(IdeaField::AddTag));
        fields.extend(self.removed_links.into_iter().map(IdeaField::RemoveLink));
        fields.extend(self.links.into_iter().map(IdeaField::AddLink));
        fields
    }
}

// Revenue

#[derive(Subcommand)]
pub enum RevenueAction {
    List,
    Add(RevenueFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: RevenueFields,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct RevenueFields {
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub category: Option<RevenueCategory>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(REVENUE_PLATFORMS))]
    pub platform: Option<String>,
    #[arg(long)]
    pub status: Option<PaymentStatus>,
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<DateTime<Utc>>,
    #[arg(long)]
    pub description: Option<String>,
}

impl RevenueFields {
    pub fn into_fields(self) -> Vec<RevenueField> {
        let mut fields = Vec::new();
        if let Some(v) = self.amount {
            fields.push(RevenueField::Amount(v));
        }
        if let Some(v) = self.category {
            fields.push(RevenueField::SourceCategory(v));
        }
        if let Some(v) = self.source {
            fields.push(RevenueField::SourceDetail(v));
        }
        if let Some(v) = self.platform {
            fields.push(RevenueField::Platform(v));
        }
        if let Some(v) = self.status {
            fields.push(RevenueField::PaymentStatus(v));
        }
        if let Some(v) = self.date {
            fields.push(RevenueField::PaymentDate(v));
        }
        if let Some(v) = self.description {
            fields.push(RevenueField::Description(v));
        }
        fields
    }
}

// Analytics

#[derive(Subcommand)]
pub enum AnalyticsAction {
    List,
    Add(PerformanceFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: PerformanceFields,
    },
    Delete(DeleteArgs),
    /// Views, likes and comments over time
    Trends,
}

#[derive(Args, Debug, Default)]
pub struct PerformanceFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "type", value_parser = PossibleValuesParser::new(PERFORMANCE_CONTENT_TYPES))]
    pub content_type: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(PERFORMANCE_PLATFORMS))]
    pub platform: Option<String>,
    #[arg(long)]
    pub views: Option<String>,
    #[arg(long)]
    pub likes: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
    #[arg(long)]
    pub shares: Option<String>,
    #[arg(long)]
    pub reach: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<DateTime<Utc>>,
}

impl PerformanceFields {
    pub fn into_fields(self) -> Vec<PerformanceField> {
        let mut fields = Vec::new();
        if let Some(v) = self.title {
            fields.push(PerformanceField::ContentTitle(v));
        }
        if let Some(v) = self.content_type {
            fields.push(PerformanceField::ContentType(v));
        }
        if let Some(v) = self.platform {
            fields.push(PerformanceField::Platform(v));
        }
        if let Some(v) = self.views {
            fields.push(PerformanceField::Views(v));
        }
        if let Some(v) = self.likes {
            fields.push(PerformanceField::Likes(v));
        }
        if let Some(v) = self.comments {
            fields.push(PerformanceField::Comments(v));
        }
        if let Some(v) = self.shares {
            fields.push(PerformanceField::Shares(v));
        }
        if let Some(v) = self.reach {
            fields.push(PerformanceField::Reach(v));
        }
        if let Some(v) = self.date {
            fields.push(PerformanceField::RecordedDate(v));
        }
        fields
    }
}

// Recurring tasks

#[derive(Subcommand)]
pub enum RecurringAction {
    List,
    Add(RecurringFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: RecurringFields,
    },
    Delete(DeleteArgs),
    /// Create a task from one template now
    Generate { id: String },
    /// Create tasks for every active template that is due
    AutoGenerate,
}

#[derive(Args, Debug, Default)]
pub struct RecurringFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long, value_parser = PossibleValuesParser::new(TASK_CATEGORIES))]
    pub category: Option<String>,
    #[arg(long)]
    pub frequency: Option<Frequency>,
    /// e.g. "Monday" or "15th"
    #[arg(long)]
    pub detail: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    pub next_due: Option<DateTime<Utc>>,
    #[arg(long, conflicts_with = "paused")]
    pub active: bool,
    #[arg(long)]
    pub paused: bool,
}

impl RecurringFields {
    pub fn into_fields(self) -> Vec<RecurringTaskField> {
        let mut fields = Vec::new();
        if let Some(v) = self.title {
            fields.push(RecurringTaskField::Title(v));
        }
        if let Some(v) = self.description {
            fields.push(RecurringTaskField::Description(v));
        }
        if let Some(v) = self.priority {
            fields.push(RecurringTaskField::Priority(v));
        }
        if let Some(v) = self.category {
            fields.push(RecurringTaskField::Category(v));
        }
        if let Some(v) = self.frequency {
            fields.push(RecurringTaskField::Frequency(v));
        }
        if let Some(v) = self.detail {
            fields.push(RecurringTaskField::FrequencyDetail(v));
        }
        if let Some(v) = self.next_due {
            fields.push(RecurringTaskField::NextDueDate(v));
        }
        if self.active {
            fields.push(RecurringTaskField::Active(true));
        } else if self.paused {
            fields.push(RecurringTaskField::Active(false));
        }
        fields
    }
}

// Dispatch

pub async fn run(command: Commands, api: ApiClient) -> Result<()> {
    match command {
        Commands::Dashboard => {
            let mut screen = DashboardScreen::new(api);
            screen.initial_load().await;
            print!("{}", render::dashboard(screen.stats()));
        }
        Commands::Tasks { action } => match action {
            TaskAction::List => {
                let screen = load::<Tasks>(api).await;
                print!("{}", render::list(screen.records(), "No tasks yet", render::task));
            }
            TaskAction::Add(fields) => add::<Tasks>(api, fields.into_fields()).await?,
            TaskAction::Edit { id, fields } => edit::<Tasks>(api, &id, fields.into_fields()).await?,
            TaskAction::Delete(args) => delete::<Tasks>(api, args).await?,
            TaskAction::Toggle { id } => {
                let mut screen = load::<Tasks>(api).await;
                let result = screen.toggle_complete(&id).await;
                settle(&screen, result)?;
                print!("{}", render::list(screen.records(), "No tasks yet", render::task));
            }
        },
        Commands::Videos { action } => match action {
            VideoAction::List => {
                let screen = load::<Videos>(api).await;
                print!("{}", render::list(screen.records(), "No videos yet", render::video));
            }
            VideoAction::Add(fields) => add::<Videos>(api, fields.into_fields()).await?,
            VideoAction::Edit { id, fields } => {
                edit::<Videos>(api, &id, fields.into_fields()).await?
            }
            VideoAction::Delete(args) => delete::<Videos>(api, args).await?,
            VideoAction::Stage { id, index } => {
                let mut screen = load::<Videos>(api).await;
                let result = screen.toggle_stage(&id, index).await;
                settle(&screen, result)?;
                if let Some(video) = screen.find(&id) {
                    print!("{}", render::video(video));
                }
            }
        },
        Commands::Notes { action } => match action {
            NoteAction::List => {
                let screen = load::<StudyNotes>(api).await;
                print!(
                    "{}",
                    render::list(screen.records(), "No study notes yet", render::study_note)
                );
            }
            NoteAction::Add(fields) => add::<StudyNotes>(api, fields.into_fields()).await?,
            NoteAction::Edit { id, fields } => {
                edit::<StudyNotes>(api, &id, fields.into_fields()).await?
            }
            NoteAction::Delete(args) => delete::<StudyNotes>(api, args).await?,
        },
        Commands::Calendar { action } => match action {
            CalendarAction::List { day } => {
                let mut screen = load::<Calendar>(api).await;
                print!("{}", render::calendar_markers(&derived::marked_days(screen.records())));
                screen.set_filter(day);
                let empty = match day {
                    Some(_) => "Nothing scheduled for this day",
                    None => "No content scheduled",
                };
                print!(
                    "{}",
                    render::list(&screen.visible(), empty, |item| render::calendar_item(item))
                );
            }
            CalendarAction::Add(fields) => add::<Calendar>(api, fields.into_fields()).await?,
            CalendarAction::Edit { id, fields } => {
                edit::<Calendar>(api, &id, fields.into_fields()).await?
            }
            CalendarAction::Delete(args) => delete::<Calendar>(api, args).await?,
        },
        Commands::Ideas { action } => match action {
            IdeaAction::List { search, remote } => {
                if remote {
                    let ideas = api.search_ideas(search.as_deref().unwrap_or_default()).await?;
                    print!("{}", render::list(&ideas, "No ideas found", render::idea));
                    return Ok(());
                }
                let mut screen = load::<Ideas>(api).await;
                screen.set_filter(search.unwrap_or_default());
                print!(
                    "{}",
                    render::list(&screen.visible(), "No ideas found", |idea| render::idea(idea))
                );
            }
            IdeaAction::Add(fields) => add::<Ideas>(api, fields.into_fields()).await?,
            IdeaAction::Edit { id, fields } => edit::<Ideas>(api, &id, fields.into_fields()).await?,
            IdeaAction::Delete(args) => delete::<Ideas>(api, args).await?,
        },
        Commands::Revenue { action } => match action {
            RevenueAction::List => {
                let screen = load::<Revenue>(api).await;
                print!("{}", render::revenue_summary(screen.summary()));
                println!();
                print!(
                    "{}",
                    render::list(screen.records(), "No revenue entries yet", render::revenue_entry)
                );
            }
            RevenueAction::Add(fields) => add::<Revenue>(api, fields.into_fields()).await?,
            RevenueAction::Edit { id, fields } => {
                edit::<Revenue>(api, &id, fields.into_fields()).await?
            }
            RevenueAction::Delete(args) => delete::<Revenue>(api, args).await?,
        },
        Commands::Analytics { action } => match action {
            AnalyticsAction::List => {
                let screen = load::<Performance>(api).await;
                print!("{}", render::top_content(screen.summary()));
                println!();
                print!(
                    "{}",
                    render::list(
                        screen.records(),
                        "No performance data yet",
                        render::performance_entry
                    )
                );
            }
            AnalyticsAction::Add(fields) => add::<Performance>(api, fields.into_fields()).await?,
            AnalyticsAction::Edit { id, fields } => {
                edit::<Performance>(api, &id, fields.into_fields()).await?
            }
            AnalyticsAction::Delete(args) => delete::<Performance>(api, args).await?,
            AnalyticsAction::Trends => {
                let points = api.performance_trends().await?;
                print!("{}", render::list(&points, "No trend data yet", render::trend_point));
            }
        },
        Commands::Recurring { action } => match action {
            RecurringAction::List => {
                let screen = load::<RecurringTasks>(api).await;
                print!(
                    "{}",
                    render::list(screen.records(), "No recurring tasks", render::recurring_task)
                );
            }
            RecurringAction::Add(fields) => {
                add::<RecurringTasks>(api, fields.into_fields()).await?
            }
            RecurringAction::Edit { id, fields } => {
                edit::<RecurringTasks>(api, &id, fields.into_fields()).await?
            }
            RecurringAction::Delete(args) => delete::<RecurringTasks>(api, args).await?,
            RecurringAction::Generate { id } => {
                let mut screen = RecurringTaskScreen::new(api);
                let result = screen.generate(&id).await;
                let task = settle(&screen, result)?;
                println!("Task generated");
                print!("{}", render::task(&task));
            }
            RecurringAction::AutoGenerate => {
                let mut screen = RecurringTaskScreen::new(api);
                let result = screen.auto_generate().await;
                let outcome = settle(&screen, result)?;
                println!("{} ({} tasks)", outcome.message, outcome.count);
            }
        },
    }

    Ok(())
}

async fn load<R: Resource>(api: ApiClient) -> ScreenController<R, ApiClient> {
    let mut screen = ScreenController::new(api);
    screen.initial_load().await;
    screen
}

async fn add<R: Resource>(api: ApiClient, fields: Vec<<R::Draft as Form>::Field>) -> Result<()> {
    let mut screen = ScreenController::<R, ApiClient>::new(api);
    screen.open_create();
    for field in fields {
        screen.update_draft_field(field);
    }
    let result = screen.submit().await;
    settle(&screen, result)?;
    println!("Created {}", R::NAME);
    Ok(())
}

async fn edit<R: Resource>(
    api: ApiClient,
    id: &str,
    fields: Vec<<R::Draft as Form>::Field>,
) -> Result<()> {
    let mut screen = load::<R>(api).await;
    let record = screen
        .find(id)
        .cloned()
        .ok_or_else(|| anyhow!("No {} with id {}", R::NAME, id))?;

    screen.open_edit(&record);
    for field in fields {
        screen.update_draft_field(field);
    }
    let result = screen.submit().await;
    settle(&screen, result)?;
    println!("Updated {}", R::NAME);
    Ok(())
}

async fn delete<R: Resource>(api: ApiClient, args: DeleteArgs) -> Result<()> {
    let mut screen = ScreenController::<R, ApiClient>::new(api);
    screen.request_remove(&args.id);

    if !args.yes && !confirm(&format!("Delete this {}? [y/N] ", R::NAME))? {
        screen.cancel_remove();
        println!("Cancelled");
        return Ok(());
    }

    let result = screen.confirm_remove().await;
    settle(&screen, result)?;
    println!("Deleted {}", R::NAME);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Turns a failed controller operation into the alert the user should see.
fn settle<R: Resource, C: ResourceApi<R>, T>(
    screen: &ScreenController<R, C>,
    result: Result<T, ControllerError>,
) -> Result<T> {
    result.map_err(|e| {
        debug!("{:?}", e);
        match screen.alert() {
            Some(alert) => anyhow!(render::alert(alert)),
            None => e.into(),
        }
    })
}
