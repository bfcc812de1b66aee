//! Request and response DTOs for the scan API.

pub mod scan;
