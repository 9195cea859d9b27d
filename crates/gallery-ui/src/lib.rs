pub mod api;
pub mod config;
pub mod downloads;
pub mod error;
pub mod page;
pub mod state;
pub mod store;

pub use config::Config;
pub use state::AppState;
