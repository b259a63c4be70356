//! sd-step - habitat wrapper library
//!
//! This library provides the core functionality for running a habitat
//! package inside a build step:
//! - Paginated version listing from the habitat depot
//! - Semantic-version range resolution of `--pkg-version`
//! - Install and exec through the hab binary

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod package_manager;
pub mod progress;
pub mod registry;
pub mod resolver;
