//! Catalog sources, the description generator client and the
//! request-level recommendation service around `rigpick-core`.

pub mod catalog;
pub mod common;
pub mod describe;
pub mod modules;
pub mod service;

pub use chrono;
pub use rigpick_core::{
    Build, BuildError, BuildSpec, Category, Component, ReducerCaps, WeightTable,
    PSU_HEADROOM, REQUIRED_CATEGORIES,
};
