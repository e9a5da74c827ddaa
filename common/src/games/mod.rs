mod session_rng;

pub mod ultimate;

pub use session_rng::SessionRng;
