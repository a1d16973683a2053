//! Keyed heterogeneous object factories.
//!
//! A [`Factory`] maps registration keys to constructor overload sets for a
//! common product type, typically `Box<dyn Trait>`. Constructors are selected
//! by the argument tuple handed to [`Factory::create`]; distinct constructors
//! share a key only when their argument signatures differ. Lookup misses and
//! signature mismatches return `None` by contract, while duplicate
//! registration of a (key, signature) pair is rejected and flagged.
//!
//! Two registration styles are supported:
//!
//! - instance factories, registered into explicitly;
//! - process-wide factories declared with [`define_static_factory!`] and
//!   populated from [`register_in_factory!`] submissions collected by
//!   `inventory` at startup.
//!
//! # Example
//!
//! ```
//! use kiln_factory::{Construct, DuplicatePolicy, Factory, Keyed, impl_boxed_product};
//!
//! trait Shape {
//! 	fn area(&self) -> f64;
//! }
//!
//! struct Circle {
//! 	radius: f64,
//! }
//!
//! impl_boxed_product!(Shape: Circle);
//!
//! impl Shape for Circle {
//! 	fn area(&self) -> f64 {
//! 		std::f64::consts::PI * self.radius * self.radius
//! 	}
//! }
//!
//! impl Keyed<&'static str> for Circle {
//! 	fn key() -> &'static str {
//! 		"circle"
//! 	}
//! }
//!
//! impl Construct<(f64,)> for Circle {
//! 	fn construct((radius,): (f64,)) -> Self {
//! 		Self { radius }
//! 	}
//! }
//!
//! let mut factory: Factory<Box<dyn Shape>, &'static str> =
//! 	Factory::with_policy("shapes", DuplicatePolicy::FirstWins);
//! factory.register::<Circle, (f64,)>();
//!
//! let circle = factory.create("circle", (2.0,)).expect("registered");
//! assert!(circle.area() > 12.0);
//! assert!(factory.create("circle", (1, 2)).is_none());
//! assert!(factory.create("hexagon", ()).is_none());
//! ```

mod collision;
mod construct;
mod error;
mod factory;
mod signature;
mod static_factory;

pub use collision::{Collision, DuplicatePolicy};
pub use construct::{Construct, IntoProduct, Keyed};
pub use error::{FactoryError, InsertAction};
pub use factory::{Creator, Factory};
pub use signature::Signature;
pub use static_factory::{FactoryHandle, StaticRegistration};

// Used by the generated output of the public macros; not API.
#[doc(hidden)]
pub mod __private {
	pub use std::sync::LazyLock;

	pub use parking_lot::RwLock;
	pub use tracing;
}
