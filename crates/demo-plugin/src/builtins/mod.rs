//! Built-in transforms, each registering itself statically.

mod case;
mod repeat;
mod wrap;

pub use case::{Lowercase, Uppercase};
pub use repeat::Repeat;
pub use wrap::{Prefix, Surround};
