// tests/integration/departments/mod.rs
