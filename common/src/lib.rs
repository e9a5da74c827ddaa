pub mod config;
mod defaults;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::ultimate;
