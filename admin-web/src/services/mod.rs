//! Chain and network services

pub mod buyback;
pub mod contracts;
pub mod provider;
pub mod ticker;
