pub mod config;
pub mod core;
pub mod run;
pub mod terminal;
pub mod user_config;
