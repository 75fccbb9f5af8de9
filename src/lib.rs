// Library for tests to access modules

pub mod collector;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod provider;
pub mod rate_tracker;
pub mod routes;
pub mod sysinfo_repo;
pub mod version;
