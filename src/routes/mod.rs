//! Route definitions for the deiscan API.

pub mod health;
pub mod scan;
