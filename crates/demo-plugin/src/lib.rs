//! Demo plugin: string transforms registered into a static factory.
//!
//! This crate exists to exercise the `kiln-factory` extension surface from a
//! separate crate: it declares [`TransformFactory`], and every transform in
//! [`builtins`] submits itself with `register_in_factory!`. Any crate linked
//! against this one can create transforms by key without naming the concrete
//! types.

use kiln_factory::define_static_factory;

mod builtins;

pub use builtins::{Lowercase, Prefix, Repeat, Surround, Uppercase};

/// A string-to-string transformation selected by key.
pub trait Transform {
	/// Applies the transformation to `input`.
	fn apply(&self, input: &str) -> String;
}

define_static_factory! {
	/// Process-wide registry of [`Transform`] constructors.
	pub TransformFactory {
		product: Box<dyn Transform>,
		key: &'static str,
	}
}
