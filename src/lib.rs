//! stepgen - Cucumber step-definition skeletons from Gherkin steps
//!
//! stepgen reads Gherkin step lines (`Given`/`When`/`Then`/`And`/`But`) and
//! writes a Java step-definition class: one annotated, documented method stub
//! per distinct step, wrapped in a class header and footer.
//!
//! # Architecture
//!
//! - **core**: The pure pipeline (classify, parse, name, render, assemble, format)
//! - **templates**: Boilerplate snippets for the generated class
//! - **host**: The I/O boundary (document text, clipboard, files, prompts)
//! - **commands**: CLI command implementations (generate, preview, init)
//! - **models**: Data structures (config, framework, step records)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod host;
pub mod models;
pub mod templates;

pub use crate::core::{generate, generate_report, Generation};
pub use error::{Result, StepgenError};
pub use models::Config;
