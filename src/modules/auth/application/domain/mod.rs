pub mod entities;
pub mod guard;
