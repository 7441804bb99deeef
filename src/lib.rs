//! Personalized short-form video feed service.
//!
//! The ranking core lives in [`services`]: a pure scorer, the category
//! relation table, and the composer that interleaves mix-ins and revisit
//! nudges into a paginated feed. [`api`] exposes it over HTTP.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
