// src/api/handlers/mod.rs
pub mod analytics_handler;
pub mod auth_handler;
pub mod department_handler;
pub mod employee_handler;
pub mod evaluation_handler;
pub mod skill_handler;
