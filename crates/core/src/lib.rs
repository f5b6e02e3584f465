//! Domain logic for the sattva wellness platform.
//!
//! Pure types, vocabularies, and validation shared by the persistence and
//! API layers. This crate performs no IO.

pub mod center;
pub mod enquiry;
pub mod error;
pub mod pagination;
pub mod payment;
pub mod program;
pub mod types;
