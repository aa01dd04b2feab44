//! Centrist News Hub
//!
//! This crate provides a news dashboard that fetches RSS feeds from two
//! groups with opposing editorial leanings and asks a hosted language model
//! for a neutral synthesis of their coverage.

pub mod config;
pub mod fetcher;
pub mod prompt;
pub mod routes;
pub mod synthesis;
