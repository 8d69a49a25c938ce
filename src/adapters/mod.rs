// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod gemini;
pub mod lazy;

pub use gemini::GeminiModel;
pub use lazy::LazyModel;
