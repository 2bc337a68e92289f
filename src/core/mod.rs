//! Core data types for reagent loading.
//!
//! This module provides the types the rest of the library is built on:
//!
//! - [`Reagent`](reagent::Reagent): a candidate reagent with the seed values
//!   for a Bayesian prior over its unknown mean score
//! - [`PriorSettings`](settings::PriorSettings): the two scalars
//!   (minimum uncertainty, known standard deviation) applied to every record
//!   in a load
//!
//! The prior itself is never updated here. Records hand their seed values to
//! a downstream selection engine, which owns the sampling and update
//! arithmetic.

pub mod reagent;
pub mod settings;
