//! Registration failure types.

/// Result of a successful registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Signature was new for the key; entry inserted.
	InsertedNew,
	/// Pair existed; kept the existing entry (policy chose existing).
	KeptExisting,
	/// Pair existed; replaced with the new entry (policy chose new).
	ReplacedExisting,
}

/// Errors surfaced by the `try_` registration APIs.
///
/// The policy-driven APIs never return these; they resolve conflicts through
/// the factory's [`DuplicatePolicy`](crate::DuplicatePolicy) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
	/// A constructor is already registered for this key and argument signature.
	#[error(
		"duplicate constructor signature: factory={factory} key={key} signature={signature} existing_type={existing} new_type={incoming}"
	)]
	DuplicateSignature {
		factory: &'static str,
		key: String,
		signature: &'static str,
		existing: &'static str,
		incoming: &'static str,
	},
}
