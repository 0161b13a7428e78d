// tests/integration/employees/mod.rs

pub mod employee_query_tests;
pub mod employee_write_tests;
