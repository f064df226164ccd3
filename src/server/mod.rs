pub mod listener;

pub use listener::{ServeMode, Server};
