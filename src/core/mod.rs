pub mod log;
pub mod login;
pub mod registry;
pub mod report;
pub mod session;
pub mod status;
pub mod submit;
