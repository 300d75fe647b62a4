//! # UAV Configurator CLI
//!
//! Evaluates a UAV configuration file either against a running
//! `uav-api` instance or in-process, and renders the result.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod report;

pub use client::{configure_local, load_configuration, ClientError, ConfiguratorClient};
