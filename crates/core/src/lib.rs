//! Domain logic for the student project management service.
//!
//! Everything here is free of database and HTTP concerns so it can be unit
//! tested in isolation and shared by the `db` and `api` crates.

pub mod approval;
pub mod cpi;
pub mod error;
pub mod meeting;
pub mod roles;
pub mod types;
pub mod validation;
