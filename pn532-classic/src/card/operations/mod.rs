pub mod auth;
pub mod read;
pub mod write;

// Re-export the block operations at the operations root so callers can use
// `crate::card::operations::read_block(...)` directly.
pub use auth::authenticate_block;
pub use read::read_block;
pub use write::write_block;
