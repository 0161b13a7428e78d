// src/domain/mod.rs
pub mod department_model;
pub mod employee_model;
pub mod employee_summary;
pub mod growth_series;
pub mod quarter;
pub mod skill_category_model;
pub mod skill_evaluation_model;
pub mod skill_level;
pub mod skill_model;
pub mod user_model;
