pub mod checklist;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod report;
pub mod session;
pub mod status;
pub mod user;
