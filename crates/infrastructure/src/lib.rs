//! Cinder CDN Infrastructure Layer
//!
//! SQLite-backed repositories, the HTTP edge deleter and database setup.
pub mod database;
pub mod edge;
pub mod repositories;
