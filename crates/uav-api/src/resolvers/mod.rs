//! # GraphQL Resolvers Module

pub mod query;

pub use query::QueryRoot;
