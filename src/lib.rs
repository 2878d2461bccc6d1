//! CafeHub API Library
//!
//! This library provides the core functionality for the CafeHub API,
//! including domain models, repositories, and the identity-provider client.

pub mod api;
pub mod config;
pub mod domain;
pub mod identity;
pub mod infrastructure;
