//! Catalog domain: records, value objects, the dashboard aggregate and its events.
pub mod aggregates;
pub mod events;
pub mod value_objects;
