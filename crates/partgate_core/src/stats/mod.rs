//! Derived aggregate statistics.
//!
//! Every function here is pure over a repository snapshot, so the numbers a
//! view shows can be tested without rendering anything. Nothing is cached;
//! callers recompute on every render.

pub mod budget;
pub mod dashboard;
pub mod records;
