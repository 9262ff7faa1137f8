//! UI Components

pub mod navbar;

pub use navbar::Navbar;
