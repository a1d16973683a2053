//! Repetition transform with an overloaded constructor set.

use kiln_factory::{Construct, Keyed, impl_boxed_product, register_in_factory};

use crate::{Transform, TransformFactory};

/// Repeats the input a fixed number of times.
pub struct Repeat {
	count: usize,
}

impl Transform for Repeat {
	fn apply(&self, input: &str) -> String {
		input.repeat(self.count)
	}
}

impl Keyed<&'static str> for Repeat {
	fn key() -> &'static str {
		"repeat"
	}
}

impl Construct<()> for Repeat {
	fn construct(_: ()) -> Self {
		Self { count: 2 }
	}
}

impl Construct<(usize,)> for Repeat {
	fn construct((count,): (usize,)) -> Self {
		Self { count }
	}
}

impl_boxed_product!(Transform: Repeat);

register_in_factory!(TransformFactory, Repeat, () (usize));
