// consent-backend/src/features/consent/mod.rs

pub mod dto;
pub mod handler;
pub mod service;
