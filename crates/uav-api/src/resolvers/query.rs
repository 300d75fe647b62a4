//! # GraphQL Query Resolver
//!
//! Evaluation is read-only, so the configurator lives on the query root.

use async_graphql::{ErrorExtensions, Object, Result};
use uav_domain::UavInput;

use crate::error::ApiError;
use crate::schema::*;

/// GraphQL Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Evaluate cruise thrust, power, propeller speed and endurance
    ///
    /// Fails with `SCHEMA_ERROR` when a value is outside its declared range
    /// and `VALIDATION_ERROR` when a domain rule is violated.
    async fn configure(&self, input: UavConfigurationInput) -> Result<UavPerformance> {
        let input = UavInput::from(input);

        tracing::debug!(system_type = %input.system_type, "Evaluating configuration");

        let result = uav_domain::configure_input(&input).map_err(|err| {
            tracing::info!(kind = err.kind(), error = %err, "Configuration rejected");
            ApiError::from(err).extend()
        })?;

        Ok(result.into())
    }

    /// API version
    async fn version(&self) -> &'static str {
        crate::VERSION
    }
}
