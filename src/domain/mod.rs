// src/domain/mod.rs
pub mod error;
pub mod export;
pub mod normalize;
pub mod note;

pub use error::DomainError;
pub use export::Export;
pub use normalize::{normalize, normalized};
pub use note::{Field, Note};
