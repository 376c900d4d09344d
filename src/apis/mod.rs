pub mod backup;
pub mod branch;
pub mod database;
pub mod deploy_request;
pub mod oauth_application;
pub mod organization;
pub mod password;
pub mod user;

// Re-export all APIs and their response enums
pub use backup::*;
pub use branch::*;
pub use database::*;
pub use deploy_request::*;
pub use oauth_application::*;
pub use organization::*;
pub use password::*;
pub use user::*;
