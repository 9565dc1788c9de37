pub mod error;
pub mod logger;
pub mod presentation;
pub mod validation;
