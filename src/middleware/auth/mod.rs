pub mod access;
pub mod cookie;
