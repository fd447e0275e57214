//! Infrastructure layer: concrete implementations of domain ports and
//! wire-format DTOs.

pub mod dto;
pub mod registry;
