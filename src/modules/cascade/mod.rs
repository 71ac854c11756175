//! Operations that span several aggregates and the object store: cascading
//! deletes of posts and users, and image replacement.

pub mod adapter;
pub mod application;
