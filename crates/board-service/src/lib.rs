//! # board-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CommentService, Operation, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
