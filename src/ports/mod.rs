//! Ports (trait boundaries) between a game session and its surroundings.

pub mod observer;

pub use observer::SessionObserver;
