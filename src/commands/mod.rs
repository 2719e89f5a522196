// Backend command handlers exposed through the /api/invoke proxy

pub mod chat;
pub mod config;
pub mod dashboard;
