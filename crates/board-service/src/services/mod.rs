//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod reaction;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{Operation, ServiceError, ServiceResult};
pub use reaction::ReactionService;
