//! Transforms that wrap the input in delimiters.

use kiln_factory::{Construct, Keyed, impl_boxed_product, register_in_factory};

use crate::{Transform, TransformFactory};

/// Prepends a fixed prefix.
pub struct Prefix {
	prefix: String,
}

impl Transform for Prefix {
	fn apply(&self, input: &str) -> String {
		format!("{}{}", self.prefix, input)
	}
}

impl Keyed<&'static str> for Prefix {
	fn key() -> &'static str {
		"prefix"
	}
}

impl Construct<(String,)> for Prefix {
	fn construct((prefix,): (String,)) -> Self {
		Self { prefix }
	}
}

/// Wraps the input in an opening and closing delimiter.
///
/// The one-argument constructor uses the same delimiter on both sides.
pub struct Surround {
	open: String,
	close: String,
}

impl Transform for Surround {
	fn apply(&self, input: &str) -> String {
		format!("{}{}{}", self.open, input, self.close)
	}
}

impl Keyed<&'static str> for Surround {
	fn key() -> &'static str {
		"surround"
	}
}

impl Construct<(String,)> for Surround {
	fn construct((delimiter,): (String,)) -> Self {
		Self {
			open: delimiter.clone(),
			close: delimiter,
		}
	}
}

impl Construct<(String, String)> for Surround {
	fn construct((open, close): (String, String)) -> Self {
		Self { open, close }
	}
}

impl_boxed_product!(Transform: Prefix, Surround);

register_in_factory!(TransformFactory, Prefix, (String));
register_in_factory!(TransformFactory, Surround, (String) (String, String));
