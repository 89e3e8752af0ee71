// Adapters layer: concrete implementations of the domain ports (stores, http clients, clock).

pub mod clock;
pub mod http;
pub mod storage;
