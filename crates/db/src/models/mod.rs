//! Row types for the database tables.

pub mod kv_entry;
