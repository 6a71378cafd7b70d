pub mod browser;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod run;
pub mod tui;

pub use error::AppError;
