pub mod admin;
pub mod auth;
pub mod cascade;
pub mod category;
pub mod comment;
pub mod email;
pub mod multimedia;
pub mod post;
