// consent-backend/src/features/consent/dto/mod.rs

pub mod requests;
pub mod responses;
