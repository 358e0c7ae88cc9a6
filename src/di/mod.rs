mod container;

pub use container::{ServiceContainer, SessionStore};
