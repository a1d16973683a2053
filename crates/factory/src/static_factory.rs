//! Process-wide factories populated from link-time registrations.
//!
//! [`define_static_factory!`] declares a handle type whose store is built
//! lazily from every [`StaticRegistration`] submitted for it via `inventory`.
//! [`register_in_factory!`] submits registrations from any crate linked into
//! the final binary; they are applied exactly once, on first access of the
//! store. Nothing registers before `main`, and the store is complete before
//! the first lookup returns, so there is no initialization-order hazard to
//! manage.

use std::fmt;
use std::hash::Hash;

use crate::factory::Factory;
use crate::signature::Signature;

/// Associated types of a factory handle generated by
/// [`define_static_factory!`].
pub trait FactoryHandle: 'static {
	/// Product type every registered constructor yields.
	type Product: 'static;
	/// Registration key type.
	type Key: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static;
	/// Default argument signature.
	type DefaultArgs: Signature;
}

/// A registration collected by `inventory` for a static factory.
///
/// Produced by [`register_in_factory!`]; applied to the factory's store the
/// first time it is accessed.
pub struct StaticRegistration<F: FactoryHandle> {
	/// Name of the registered concrete type.
	pub type_name: &'static str,
	/// Crate that submitted the registration.
	pub crate_name: &'static str,
	/// Applies the registration to the factory store.
	pub apply: fn(&mut Factory<F::Product, F::Key, F::DefaultArgs>),
}

/// Declares a process-wide factory with `inventory`-collected registration.
///
/// ```ignore
/// define_static_factory! {
/// 	/// Factory for [`Shape`] implementations.
/// 	pub ShapeFactory {
/// 		product: Box<dyn Shape>,
/// 		key: &'static str,
/// 		default_args: (f64,),
/// 	}
/// }
/// ```
///
/// `default_args` may be omitted and defaults to the empty signature `()`.
///
/// This generates the `ShapeFactory` handle (an uninhabited type), the
/// `inventory`-collected `ShapeFactoryReg` wrapper, and associated functions
/// mirroring the [`Factory`](crate::Factory) surface: `create`, `register`,
/// `try_register`, `register_default`, `register_with`, `with`, `contains`,
/// `collisions`, `len`, and `is_empty`. The store is created on first access
/// with [`DuplicatePolicy::for_build`](crate::DuplicatePolicy::for_build),
/// after applying every registration submitted by linked crates.
///
/// Crates invoking this macro or [`register_in_factory!`] must depend on
/// `inventory` and `paste`.
#[macro_export]
macro_rules! define_static_factory {
	(
		$(#[$attr:meta])*
		$vis:vis $name:ident {
			product: $product:ty,
			key: $key:ty,
			default_args: $default:ty $(,)?
		}
	) => {
		paste::paste! {
			$(#[$attr])*
			$vis enum $name {}

			#[doc = concat!("Registration wrapper collected by `inventory` for `", stringify!($name), "`.")]
			$vis struct [<$name Reg>]($vis &'static $crate::StaticRegistration<$name>);

			inventory::collect!([<$name Reg>]);

			impl $crate::FactoryHandle for $name {
				type Product = $product;
				type Key = $key;
				type DefaultArgs = $default;
			}

			impl $name {
				/// Wraps a registration entry for `inventory` submission.
				$vis const fn registration(
					entry: &'static $crate::StaticRegistration<$name>,
				) -> [<$name Reg>] {
					[<$name Reg>](entry)
				}

				fn store() -> &'static $crate::__private::RwLock<
					$crate::Factory<$product, $key, $default>,
				> {
					static STORE: $crate::__private::LazyLock<
						$crate::__private::RwLock<
							$crate::Factory<$product, $key, $default>,
						>,
					> = $crate::__private::LazyLock::new(|| {
						let mut factory =
							$crate::Factory::<$product, $key, $default>::new(stringify!($name));
						let mut applied = 0usize;
						for reg in inventory::iter::<[<$name Reg>]> {
							(reg.0.apply)(&mut factory);
							applied += 1;
						}
						$crate::__private::tracing::debug!(
							factory = stringify!($name),
							applied,
							"applied static factory registrations"
						);
						$crate::__private::RwLock::new(factory)
					});
					&STORE
				}

				/// Creates a product registered under `key` whose constructor
				/// accepts the supplied argument tuple. `None` when nothing
				/// matches.
				$vis fn create<Q, A>(key: &Q, args: A) -> ::std::option::Option<$product>
				where
					$key: ::std::borrow::Borrow<Q>,
					Q: ::std::hash::Hash + ::std::cmp::Eq + ?Sized,
					A: $crate::Signature,
				{
					Self::store().read().create(key, args)
				}

				/// Registers `T` with argument signature `A` at runtime,
				/// resolving a duplicate via the store's policy.
				$vis fn register<T, A>() -> $crate::InsertAction
				where
					T: $crate::Construct<A>
						+ $crate::Keyed<$key>
						+ $crate::IntoProduct<$product>
						+ 'static,
					A: $crate::Signature,
				{
					Self::store().write().register::<T, A>()
				}

				/// Registers `T` with argument signature `A` at runtime,
				/// failing on an occupied (key, signature) pair.
				$vis fn try_register<T, A>() -> ::std::result::Result<$crate::InsertAction, $crate::FactoryError>
				where
					T: $crate::Construct<A>
						+ $crate::Keyed<$key>
						+ $crate::IntoProduct<$product>
						+ 'static,
					A: $crate::Signature,
				{
					Self::store().write().try_register::<T, A>()
				}

				/// Registers `T` under the factory's default argument signature.
				$vis fn register_default<T>() -> $crate::InsertAction
				where
					T: $crate::Construct<$default>
						+ $crate::Keyed<$key>
						+ $crate::IntoProduct<$product>
						+ 'static,
				{
					Self::store().write().register_default::<T>()
				}

				/// Registers a raw creator under an explicit key at runtime.
				$vis fn register_with<A>(
					key: $key,
					creator: $crate::Creator<$product, A>,
				) -> $crate::InsertAction
				where
					A: $crate::Signature,
				{
					Self::store().write().register_with(key, creator)
				}

				/// Runs `f` with shared access to the underlying factory.
				$vis fn with<R>(
					f: impl ::std::ops::FnOnce(&$crate::Factory<$product, $key, $default>) -> R,
				) -> R {
					f(&Self::store().read())
				}

				/// Returns true if any constructor is registered under `key`.
				$vis fn contains<Q>(key: &Q) -> bool
				where
					$key: ::std::borrow::Borrow<Q>,
					Q: ::std::hash::Hash + ::std::cmp::Eq + ?Sized,
				{
					Self::store().read().contains(key)
				}

				/// Duplicate registrations flagged so far.
				$vis fn collisions() -> ::std::vec::Vec<$crate::Collision<$key>> {
					Self::store().read().collisions().to_vec()
				}

				/// Number of keys with at least one registered constructor.
				$vis fn len() -> usize {
					Self::store().read().len()
				}

				/// Returns true if nothing is registered.
				$vis fn is_empty() -> bool {
					Self::store().read().is_empty()
				}
			}
		}
	};
	(
		$(#[$attr:meta])*
		$vis:vis $name:ident {
			product: $product:ty,
			key: $key:ty $(,)?
		}
	) => {
		$crate::define_static_factory! {
			$(#[$attr])*
			$vis $name {
				product: $product,
				key: $key,
				default_args: (),
			}
		}
	};
}

/// Submits a static registration of a concrete type into a factory declared
/// with [`define_static_factory!`].
///
/// With no signature list the type registers under the factory's default
/// argument signature; otherwise one constructor per listed tuple:
///
/// ```ignore
/// register_in_factory!(ShapeFactory, Circle);                  // default args
/// register_in_factory!(ShapeFactory, Annulus, (f64, f64) ());  // two overloads
/// ```
///
/// The generated static's name is derived from the type name, so a type can
/// be statically registered once per module. Each submission records the
/// registered type's name and the registering crate's name; duplicates are
/// flagged by the store's policy when registrations are applied.
#[macro_export]
macro_rules! register_in_factory {
	($factory:ty, $ty:ident) => {
		paste::paste! {
			static [<__FACTORY_REG_ $ty:snake:upper>]: $crate::StaticRegistration<$factory> =
				$crate::StaticRegistration {
					type_name: stringify!($ty),
					crate_name: env!("CARGO_PKG_NAME"),
					apply: |factory| {
						factory.register_default::<$ty>();
					},
				};

			inventory::submit! { <$factory>::registration(&[<__FACTORY_REG_ $ty:snake:upper>]) }
		}
	};
	($factory:ty, $ty:ident, $( ( $($arg:ty),* $(,)? ) )+) => {
		paste::paste! {
			static [<__FACTORY_REG_ $ty:snake:upper>]: $crate::StaticRegistration<$factory> =
				$crate::StaticRegistration {
					type_name: stringify!($ty),
					crate_name: env!("CARGO_PKG_NAME"),
					apply: |factory| {
						$( factory.register::<$ty, ( $($arg,)* )>(); )+
					},
				};

			inventory::submit! { <$factory>::registration(&[<__FACTORY_REG_ $ty:snake:upper>]) }
		}
	};
}
