//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod catalog_service;
pub mod classifier;
pub mod notifier;
