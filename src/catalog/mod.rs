//! Action catalog: definitions, effect specs, and the validated registry.
//!
//! A scenario is described entirely as data here. The engine only ever
//! sees `ActionDef`s through a [`Catalog`], so every name, cost, and
//! difficulty has already been validated by the time an action runs.

pub mod action;
pub mod registry;

pub use action::{ActionDef, ComputedEffect, CostMap, EffectSpec};
pub use registry::{ActionId, Catalog, CatalogError};
