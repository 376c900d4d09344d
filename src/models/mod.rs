//! Request and response bodies.
//!
//! Response types derive `Default` and decode missing or `null` fields to
//! their zero value. Numbers are `f64` because the API does not promise
//! integers on the wire; timestamps and enumerated fields stay as strings.

mod backup;
mod branch;
mod common;
mod database;
mod deploy_request;
mod oauth;
mod organization;
mod password;
mod user;

pub use backup::*;
pub use branch::*;
pub use common::*;
pub use database::*;
pub use deploy_request::*;
pub use oauth::*;
pub use organization::*;
pub use password::*;
pub use user::*;
