pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod controller;
pub mod derived;
pub mod error;
pub mod forms;
pub mod models;
pub mod render;
pub mod resources;
pub mod utils;

// Re-export types at crate root for convenient importing
pub use crate::api::{ApiClient, DashboardApi, RecurringApi, ResourceApi};
pub use crate::config::Config;
pub use crate::controller::{Alert, DashboardScreen, ScreenController};
pub use crate::error::{ClientError, ConfigError, ControllerError, ValidationError};
pub use crate::resources::Resource;
