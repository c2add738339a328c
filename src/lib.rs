//! npm-sbom - SBOM generation tool for npm projects
//!
//! This library turns the installed dependency tree reported by
//! `npm ls --json --long` into a CycloneDX Software Bill of Materials,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case
//! let use_case = GenerateSbomUseCase::new(NpmCliReader::new(), StderrProgressReporter::new());
//!
//! // Execute
//! let request = SbomRequest::new(
//!     PathBuf::from("."),
//!     BuildOptions::default(),
//!     ListingOptions::default(),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let read_model = SbomReadModelBuilder::build(&response);
//! let output = CycloneDxFormatter::new().format(&read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::npm::NpmCliReader;
    pub use crate::application::dto::{SbomRequest, SbomResponse};
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        DependencyTreeReader, ListingOptions, OutputPresenter, ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        BuildOptions, Component, ComponentType, DependencyGraph, OmitType, SbomMetadata,
    };
    pub use crate::sbom_generation::services::{
        DependencyGraphBuilder, PathTrieNester, SbomGenerator, TreeAssembler,
    };
    pub use crate::shared::Result;
}
