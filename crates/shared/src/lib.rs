pub mod content;
pub mod domain;
pub mod error;
pub mod protocol;
