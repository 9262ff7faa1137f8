//! Page modules

pub mod admin;

pub use admin::AdminPage;
