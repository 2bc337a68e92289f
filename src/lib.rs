//! # reagent-prep
//!
//! A library for loading candidate reagents from SMILES files and seeding
//! each with a Bayesian prior for downstream reagent selection.
//!
//! Combinatorial library enumeration starts from per-component reagent lists:
//! one file per reaction component slot, one `<smiles> <name>` pair per line.
//! Selection strategies such as Thompson sampling need every candidate to
//! carry a prior belief about its unknown mean score before any evaluations
//! happen. `reagent-prep` parses the files and constructs [`Reagent`] records
//! seeded with that prior, leaving all prior-update arithmetic to the
//! selection engine.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use reagent_prep::{read_reagent_files, PriorSettings};
//!
//! let settings = PriorSettings::new(0.1, 2.5);
//! let files = vec![PathBuf::from("acids.smi"), PathBuf::from("amines.smi")];
//!
//! // One reagent list per reaction component, in file order
//! let slots = read_reagent_files(&files, &settings, Some(1000)).unwrap();
//! assert_eq!(slots.len(), 2);
//!
//! for reagent in &slots[0] {
//!     println!("{} {}", reagent.smiles(), reagent.name());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: the `Reagent` record and prior seed settings
//! - [`parsing`]: the SMILES reagent-file parser
//! - [`loader`]: batch loading across component slots
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod loader;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::reagent::Reagent;
pub use crate::core::settings::PriorSettings;
pub use crate::loader::read_reagent_files;
pub use crate::parsing::smi::{parse_reagent_file, parse_reagent_text, ParseError};
