#![warn(clippy::unwrap_used)]

pub mod rest;
pub mod server;
pub mod state;

pub use server::ApiServer;
pub use state::{spawn_delayed_load, DashboardState, FeedSnapshot};
