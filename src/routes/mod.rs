pub mod articles;
pub mod ask;
pub mod fallback;
pub mod health_checks;
pub mod project;

pub use health_checks::*;
