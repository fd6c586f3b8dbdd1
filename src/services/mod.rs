//! Table lookups the window manager core performs at runtime

pub mod binding_dispatcher;
pub mod rule_engine;

pub use binding_dispatcher::*;
pub use rule_engine::*;
