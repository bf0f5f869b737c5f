//! Data layer: wire DTOs, HTTP endpoints and repository implementations.

pub mod dto;
pub mod remote;
pub mod repository;
