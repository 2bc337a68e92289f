//! Parser for reagent SMILES files.
//!
//! A reagent file holds one candidate per line, as two whitespace-separated
//! fields. Any run of whitespace delimits; there is no header row and no
//! comment syntax.
//!
//! | Field  | Description | Required |
//! |--------|-------------|----------|
//! | smiles | Structure descriptor (SMILES line notation) | Yes |
//! | name   | Reagent identifier | Yes |
//!
//! ## Example
//!
//! ```rust,no_run
//! use reagent_prep::parsing::smi::parse_reagent_file;
//! use reagent_prep::PriorSettings;
//! use std::path::Path;
//!
//! let settings = PriorSettings::new(0.1, 2.5);
//!
//! // Parse a full file
//! let reagents = parse_reagent_file(Path::new("acids.smi"), &settings, None).unwrap();
//!
//! // Or keep only the first 100 lines
//! let subset = parse_reagent_file(Path::new("acids.smi"), &settings, Some(100)).unwrap();
//! ```

pub mod smi;
