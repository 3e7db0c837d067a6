//! Client for the Mi Fit cloud that logs in the way the mobile app does and
//! records a step count for the current day.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod login;
pub mod payload;
pub mod settings;
pub mod steps;
pub mod walker;

pub use config::{Credentials, Platform, WalkerConfig};
pub use error::{Stage, WalkError};
pub use settings::Settings;
pub use walker::Walker;
