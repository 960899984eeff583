pub mod auth;
pub mod dashboard;
pub mod init;
pub mod issues;
pub mod options;
pub mod projects;
pub mod timeline;
