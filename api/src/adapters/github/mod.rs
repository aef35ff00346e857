//! GitHub adapter
//!
//! Implementation of the hosting client over the GitHub REST API.

pub mod client;

pub use client::GitHubClientImpl;
