//! HTTP handler modules for tagkeep-api.

pub mod tags;
