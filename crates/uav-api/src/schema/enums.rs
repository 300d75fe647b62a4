//! # GraphQL Enum Types

use async_graphql::Enum;
use uav_domain as domain;

/// Propulsion system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
#[graphql(rename_items = "SCREAMING_SNAKE_CASE")]
pub enum SystemType {
    /// Battery-electric
    Electric,
    /// Internal combustion engine
    Ice,
}

impl From<domain::SystemType> for SystemType {
    fn from(s: domain::SystemType) -> Self {
        match s {
            domain::SystemType::Electric => Self::Electric,
            domain::SystemType::Ice => Self::Ice,
        }
    }
}
