pub mod application;
pub mod draft;
pub mod identity;
pub mod job;
