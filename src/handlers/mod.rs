// Handler modules
pub mod validate;

// Re-export all handler functions
pub use validate::handle_validate;
