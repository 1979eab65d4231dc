// consent-backend/src/features/mod.rs

pub mod consent;
