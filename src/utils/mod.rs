/// Utility modules for common functionality
pub mod clock;
pub mod datetime;
pub mod timezone;
pub mod validation;
