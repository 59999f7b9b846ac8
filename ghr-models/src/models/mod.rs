//! Domain object definitions, one module per upstream resource family.

pub mod actions;
pub mod gist;
pub mod gitignore;
pub mod issue;
pub mod permissions;
pub mod pull;
pub mod repository;
pub mod user;
pub mod webhook;
