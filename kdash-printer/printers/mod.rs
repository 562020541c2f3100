pub mod config_map;
pub mod deployment;
pub mod job;
pub mod replication_controller;
pub mod secret;
pub mod service_account;
