// tests/integration/skills/mod.rs

pub mod rescale_tests;
pub mod skill_tests;
