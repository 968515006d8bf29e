mod entry;
pub mod extract;
pub mod todos;

pub use entry::{API_PREFIX, app, router};
