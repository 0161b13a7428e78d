// src/repository/mod.rs

pub mod analytics_repository;
pub mod department_repository;
pub mod employee_repository;
pub mod evaluation_repository;
pub mod skill_repository;
pub mod user_repository;
