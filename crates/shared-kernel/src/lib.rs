// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, BundleError, DomainError, DomainResult, ErrorContext, InfrastructureError, PresentationError,
    Result,
};

pub mod error;
pub mod path;
