#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # walkmap-entities
//!
//! Reusable, agnostic domain entities for walkmap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod color;
pub mod geo;
pub mod geometry;
pub mod render;
pub mod walkability;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
