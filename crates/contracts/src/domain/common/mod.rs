//! Common types shared by all entities

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
