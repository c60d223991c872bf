// Adapters layer: concrete implementations for external systems (http, terminal).

pub mod openai;
pub mod terminal;
