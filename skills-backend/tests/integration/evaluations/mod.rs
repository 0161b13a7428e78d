// tests/integration/evaluations/mod.rs

pub mod evaluation_query_tests;
