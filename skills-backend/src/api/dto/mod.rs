// src/api/dto/mod.rs
pub mod analytics_dto;
pub mod auth_dto;
pub mod common;
pub mod department_dto;
pub mod employee_dto;
pub mod evaluation_dto;
pub mod skill_dto;

// Re-export common response types
pub use common::{CountEntry, MessageResponse, PagedResult};
