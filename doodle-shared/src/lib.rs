pub mod config;

pub use config::ConfigTable;
