//! Data model of the configuration tables

pub mod action;
pub mod binding;
pub mod color_scheme;
pub mod command;
pub mod input;
pub mod layout;
pub mod options;
pub mod tag;
pub mod window_rule;

pub use action::*;
pub use binding::*;
pub use color_scheme::*;
pub use command::*;
pub use input::*;
pub use layout::*;
pub use options::*;
pub use tag::*;
pub use window_rule::*;
