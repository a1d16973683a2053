//! Argument-signature marker for constructor overload dispatch.

use std::any::TypeId;

/// Marker for the argument tuples registered constructors accept.
///
/// Implemented for tuples of arity 0 through 8; the unit type is the empty
/// signature used by zero-argument constructors. The tuple's [`TypeId`] is the
/// overload-dispatch key: two constructors may share a registration key only
/// when their signatures differ.
///
/// Arguments are passed by value, so every element must be `'static`. Borrowed
/// argument types are not supported.
pub trait Signature: 'static {
	/// Number of arguments in the tuple.
	const ARITY: usize;

	/// Dispatch key for this signature.
	fn type_id() -> TypeId {
		TypeId::of::<Self>()
	}

	/// Display name used in collision reports and errors.
	fn name() -> &'static str {
		std::any::type_name::<Self>()
	}
}

macro_rules! impl_signature {
	($arity:expr $(, $ty:ident)*) => {
		impl<$($ty: 'static),*> Signature for ($($ty,)*) {
			const ARITY: usize = $arity;
		}
	};
}

impl_signature!(0);
impl_signature!(1, A);
impl_signature!(2, A, B);
impl_signature!(3, A, B, C);
impl_signature!(4, A, B, C, D);
impl_signature!(5, A, B, C, D, E);
impl_signature!(6, A, B, C, D, E, F);
impl_signature!(7, A, B, C, D, E, F, G);
impl_signature!(8, A, B, C, D, E, F, G, H);
