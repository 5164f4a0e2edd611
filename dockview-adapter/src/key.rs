use core::fmt::Debug;

#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;

/// Bound for host element identifiers.
#[cfg(feature = "std")]
pub trait TargetId: Clone + Debug + core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: Clone + Debug + core::hash::Hash + Eq> TargetId for T {}

#[cfg(not(feature = "std"))]
pub trait TargetId: Clone + Debug + Ord {}
#[cfg(not(feature = "std"))]
impl<T: Clone + Debug + Ord> TargetId for T {}

#[cfg(feature = "std")]
pub(crate) type Map<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type Map<K, V> = BTreeMap<K, V>;
