//! Model to entity mappers
//!
//! Converts database rows into `board-core` domain objects. Comment rows
//! carry a raw timestamp, so their conversion is fallible.

mod comment;
mod reaction;
