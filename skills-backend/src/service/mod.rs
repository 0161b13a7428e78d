// src/service/mod.rs
pub mod analytics_service;
pub mod auth_service;
pub mod department_service;
pub mod employee_service;
pub mod evaluation_service;
pub mod skill_service;
