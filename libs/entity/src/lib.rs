pub mod content;
pub mod prelude;
