//! Keyed heterogeneous factory.

use std::any::{Any, TypeId, type_name};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use rustc_hash::FxHashMap as HashMap;
use smallvec::SmallVec;

use crate::collision::{Collision, DuplicatePolicy};
use crate::construct::{Construct, IntoProduct, Keyed};
use crate::error::{FactoryError, InsertAction};
use crate::signature::Signature;

/// Raw constructor stored by [`Factory::register_with`].
///
/// Returning `None` makes the corresponding [`Factory::create`] call return
/// `None`: by contract, failed construction is indistinguishable from an
/// unregistered signature.
pub type Creator<P, A> = fn(A) -> Option<P>;

/// One registered constructor: an argument signature plus the erased creator.
struct CreatorSlot<P> {
	signature: TypeId,
	signature_name: &'static str,
	type_name: &'static str,
	creator: Box<dyn Any + Send + Sync>,
	_product: PhantomData<fn() -> P>,
}

impl<P: 'static> CreatorSlot<P> {
	fn new<A: Signature>(type_name: &'static str, creator: Creator<P, A>) -> Self {
		Self {
			signature: A::type_id(),
			signature_name: A::name(),
			type_name,
			creator: Box::new(creator),
			_product: PhantomData,
		}
	}

	fn invoke<A: Signature>(&self, args: A) -> Option<P> {
		let creator = self.creator.downcast_ref::<Creator<P, A>>()?;
		creator(args)
	}
}

fn creator_for<T, A, P>() -> Creator<P, A>
where
	T: Construct<A> + IntoProduct<P> + 'static,
	A: Signature,
	P: 'static,
{
	|args| Some(T::construct(args).into_product())
}

/// Registry mapping keys to constructor overload sets for a common product
/// type `P` (typically `Box<dyn Trait>`).
///
/// `K` is the lookup key; `D` is the default argument signature used by
/// [`Factory::register_default`]. Each key holds one constructor per distinct
/// argument signature, and [`Factory::create`] dispatches on the signature of
/// the argument tuple it is handed. Lookup misses are `None`, never a
/// diagnostic; duplicate registration is rejected and flagged.
pub struct Factory<P, K, D = ()> {
	name: &'static str,
	entries: HashMap<K, SmallVec<[CreatorSlot<P>; 2]>>,
	collisions: Vec<Collision<K>>,
	policy: DuplicatePolicy,
	_default: PhantomData<fn() -> D>,
}

impl<P, K, D> Factory<P, K, D>
where
	P: 'static,
	K: Eq + Hash + Clone + fmt::Debug,
	D: Signature,
{
	/// Creates an empty factory using the build-dependent duplicate policy:
	/// [`DuplicatePolicy::Panic`] in debug builds, first-wins in release.
	pub fn new(name: &'static str) -> Self {
		Self::with_policy(name, DuplicatePolicy::for_build())
	}

	/// Creates an empty factory with an explicit duplicate policy.
	pub fn with_policy(name: &'static str, policy: DuplicatePolicy) -> Self {
		Self {
			name,
			entries: HashMap::default(),
			collisions: Vec::new(),
			policy,
			_default: PhantomData,
		}
	}

	/// Name used in collision reports and errors.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Duplicate policy applied by the non-`try` registration APIs.
	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Registers `T` under its [`Keyed`] key with argument signature `A`,
	/// resolving a duplicate via the factory's policy.
	pub fn register<T, A>(&mut self) -> InsertAction
	where
		T: Construct<A> + Keyed<K> + IntoProduct<P> + 'static,
		A: Signature,
	{
		self.insert::<A>(T::key(), type_name::<T>(), creator_for::<T, A, P>())
	}

	/// Registers `T` under its [`Keyed`] key with argument signature `A`,
	/// failing on an occupied (key, signature) pair.
	pub fn try_register<T, A>(&mut self) -> Result<InsertAction, FactoryError>
	where
		T: Construct<A> + Keyed<K> + IntoProduct<P> + 'static,
		A: Signature,
	{
		self.try_insert::<A>(T::key(), type_name::<T>(), creator_for::<T, A, P>())
	}

	/// Registers `T` under the factory's default argument signature `D`.
	pub fn register_default<T>(&mut self) -> InsertAction
	where
		T: Construct<D> + Keyed<K> + IntoProduct<P> + 'static,
	{
		self.register::<T, D>()
	}

	/// Fallible form of [`Factory::register_default`].
	pub fn try_register_default<T>(&mut self) -> Result<InsertAction, FactoryError>
	where
		T: Construct<D> + Keyed<K> + IntoProduct<P> + 'static,
	{
		self.try_register::<T, D>()
	}

	/// Registers a raw creator under an explicit key, resolving a duplicate
	/// via the factory's policy.
	///
	/// The creator may decline construction by returning `None`.
	pub fn register_with<A: Signature>(&mut self, key: K, creator: Creator<P, A>) -> InsertAction {
		self.insert::<A>(key, type_name::<Creator<P, A>>(), creator)
	}

	/// Fallible form of [`Factory::register_with`].
	pub fn try_register_with<A: Signature>(
		&mut self,
		key: K,
		creator: Creator<P, A>,
	) -> Result<InsertAction, FactoryError> {
		self.try_insert::<A>(key, type_name::<Creator<P, A>>(), creator)
	}

	/// Creates a product registered under `key` whose constructor accepts the
	/// supplied argument tuple.
	///
	/// Returns `None` when the key is unknown, no registered signature matches
	/// `A`, or the matched creator declines construction. Absence is the
	/// contract; nothing is logged on this path.
	pub fn create<Q, A>(&self, key: &Q, args: A) -> Option<P>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
		A: Signature,
	{
		let slots = self.entries.get(key)?;
		let signature = A::type_id();
		slots.iter().find(|s| s.signature == signature)?.invoke(args)
	}

	/// Returns true if any constructor is registered under `key`.
	pub fn contains<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.contains_key(key)
	}

	/// Signature names registered under `key`, in registration order.
	pub fn signatures_for<Q>(&self, key: &Q) -> Vec<&'static str>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries
			.get(key)
			.map(|slots| slots.iter().map(|s| s.signature_name).collect())
			.unwrap_or_default()
	}

	/// Iterates over the registered keys, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &K> {
		self.entries.keys()
	}

	/// Number of keys with at least one registered constructor.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Duplicate registrations flagged by the policy-driven APIs.
	pub fn collisions(&self) -> &[Collision<K>] {
		&self.collisions
	}

	fn try_insert<A: Signature>(
		&mut self,
		key: K,
		type_name: &'static str,
		creator: Creator<P, A>,
	) -> Result<InsertAction, FactoryError> {
		let slots = self.entries.entry(key.clone()).or_default();
		if let Some(existing) = slots.iter().find(|s| s.signature == A::type_id()) {
			return Err(FactoryError::DuplicateSignature {
				factory: self.name,
				key: format!("{key:?}"),
				signature: A::name(),
				existing: existing.type_name,
				incoming: type_name,
			});
		}
		slots.push(CreatorSlot::new::<A>(type_name, creator));
		Ok(InsertAction::InsertedNew)
	}

	fn insert<A: Signature>(
		&mut self,
		key: K,
		type_name: &'static str,
		creator: Creator<P, A>,
	) -> InsertAction {
		let signature = A::type_id();
		let slots = self.entries.entry(key.clone()).or_default();
		let Some(pos) = slots.iter().position(|s| s.signature == signature) else {
			slots.push(CreatorSlot::new::<A>(type_name, creator));
			return InsertAction::InsertedNew;
		};
		let existing = slots[pos].type_name;
		match self.policy {
			DuplicatePolicy::Panic => panic!(
				"factory key conflict: factory={} key={:?} signature={} existing_type={} new_type={}",
				self.name,
				key,
				A::name(),
				existing,
				type_name,
			),
			DuplicatePolicy::FirstWins => {
				self.flag_collision(key, A::name(), existing, type_name);
				InsertAction::KeptExisting
			}
			DuplicatePolicy::LastWins => {
				slots[pos] = CreatorSlot::new::<A>(type_name, creator);
				self.flag_collision(key, A::name(), existing, type_name);
				InsertAction::ReplacedExisting
			}
		}
	}

	fn flag_collision(
		&mut self,
		key: K,
		signature: &'static str,
		existing: &'static str,
		incoming: &'static str,
	) {
		tracing::warn!(
			factory = self.name,
			key = ?key,
			signature,
			existing,
			incoming,
			policy = ?self.policy,
			"duplicate constructor signature"
		);
		self.collisions.push(Collision {
			factory: self.name,
			key,
			signature,
			existing,
			incoming,
			policy: self.policy,
		});
	}
}

impl<P, K, D> fmt::Debug for Factory<P, K, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Factory")
			.field("name", &self.name)
			.field("keys", &self.entries.len())
			.field("collisions", &self.collisions.len())
			.field("policy", &self.policy)
			.finish()
	}
}
