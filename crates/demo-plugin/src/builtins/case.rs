//! Case-folding transforms.

use kiln_factory::{Construct, Keyed, impl_boxed_product, register_in_factory};

use crate::{Transform, TransformFactory};

/// Uppercases the input.
pub struct Uppercase;

impl Transform for Uppercase {
	fn apply(&self, input: &str) -> String {
		input.to_uppercase()
	}
}

impl Keyed<&'static str> for Uppercase {
	fn key() -> &'static str {
		"uppercase"
	}
}

impl Construct<()> for Uppercase {
	fn construct(_: ()) -> Self {
		Uppercase
	}
}

/// Lowercases the input.
pub struct Lowercase;

impl Transform for Lowercase {
	fn apply(&self, input: &str) -> String {
		input.to_lowercase()
	}
}

impl Keyed<&'static str> for Lowercase {
	fn key() -> &'static str {
		"lowercase"
	}
}

impl Construct<()> for Lowercase {
	fn construct(_: ()) -> Self {
		Lowercase
	}
}

impl_boxed_product!(Transform: Uppercase, Lowercase);

register_in_factory!(TransformFactory, Uppercase);
register_in_factory!(TransformFactory, Lowercase);
