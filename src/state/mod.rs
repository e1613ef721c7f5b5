//! State module for tracking pagination progress
//!
//! # Components
//!
//! - `PaginationState`: two-state machine (`ExpectMore`, `Done`) for a listing page
//! - `StopReason`: why a listing stopped paginating

mod pagination_state;

// Re-export main types
pub use pagination_state::{PaginationState, StopReason};
