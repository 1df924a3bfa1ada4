mod app;
mod dom;
mod hook;
mod listener;
mod render;
mod state;
mod util;

pub use app::{run, stop};
