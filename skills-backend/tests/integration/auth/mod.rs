// tests/integration/auth/mod.rs

pub mod login_tests;
pub mod token_guard_tests;
