// Adapters layer: concrete implementations for external systems (http, randomness, clock).

pub mod http;
pub mod random;

pub use http::{HttpClient, HttpSession};
pub use random::{RandomChooser, TokioSleeper};
