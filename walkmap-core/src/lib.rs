pub mod color;
pub mod gateways;
pub mod geometry;
pub mod icons;
pub mod layers;
pub mod suggestion;
pub mod usecases;

pub use walkmap_entities as entities;
