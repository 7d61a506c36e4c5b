//! Content-derived structural hashing.
//!
//! [`StructuralHash`] produces a key from a value's contents, independent of
//! where the value is stored: two separately allocated vectors holding the
//! same elements produce the same key. Deduplication of container-like
//! elements relies on this, since plain value equality cannot see through
//! container wrappers in the general case.
//!
//! Hashing is best-effort. A value whose internal shape cannot be hashed
//! (boxed closures, or a container holding one) reports `None`, and callers
//! fall back to storage identity for that value.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::hash::Hash;
use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Hashes a single value with the crate's content hasher.
pub(crate) fn content_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut state = FxHasher::default();
    value.hash(&mut state);
    state.finish()
}

// =============================================================================
// StructuralHash
// =============================================================================

/// A content-derived identifier for comparing values without relying on
/// storage identity.
///
/// Returns `None` when the value's internal shape cannot be hashed; callers
/// treat such values as only identical to themselves.
///
/// # Examples
///
/// ```rust
/// use kedja::resolve::StructuralHash;
///
/// let first = vec![vec![1, 2], vec![3]];
/// let second = vec![vec![1, 2], vec![3]];
/// assert_eq!(first.structural_hash(), second.structural_hash());
///
/// let unhashable: Box<dyn Fn() -> i32> = Box::new(|| 42);
/// assert_eq!(unhashable.structural_hash(), None);
/// ```
pub trait StructuralHash {
    /// Returns the content-derived hash of this value, or `None` when the
    /// value cannot be hashed.
    fn structural_hash(&self) -> Option<u64>;
}

impl<T: StructuralHash + ?Sized> StructuralHash for &T {
    fn structural_hash(&self) -> Option<u64> {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for Box<T> {
    fn structural_hash(&self) -> Option<u64> {
        (**self).structural_hash()
    }
}

// =============================================================================
// Directly hashable values
// =============================================================================

macro_rules! impl_structural_hash_by_content {
    ($($target:ty),* $(,)?) => {
        $(
            impl StructuralHash for $target {
                fn structural_hash(&self) -> Option<u64> {
                    Some(content_hash(self))
                }
            }
        )*
    };
}

impl_structural_hash_by_content!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String,
);

// Floats hash over their bit pattern. Distinct NaN payloads therefore get
// distinct keys, matching the behavior of bitwise map keys in other runtimes.
impl StructuralHash for f32 {
    fn structural_hash(&self) -> Option<u64> {
        Some(content_hash(&self.to_bits()))
    }
}

impl StructuralHash for f64 {
    fn structural_hash(&self) -> Option<u64> {
        Some(content_hash(&self.to_bits()))
    }
}

// =============================================================================
// Sequences: length-prefixed, order-sensitive combination
// =============================================================================

fn sequence_hash<'a, T, I>(length: usize, elements: I) -> Option<u64>
where
    T: StructuralHash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut state = FxHasher::default();
    state.write_usize(length);
    for element in elements {
        state.write_u64(element.structural_hash()?);
    }
    Some(state.finish())
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    fn structural_hash(&self) -> Option<u64> {
        sequence_hash(self.len(), self)
    }
}

impl<T: StructuralHash> StructuralHash for VecDeque<T> {
    fn structural_hash(&self) -> Option<u64> {
        sequence_hash(self.len(), self)
    }
}

impl<T: StructuralHash> StructuralHash for [T] {
    fn structural_hash(&self) -> Option<u64> {
        sequence_hash(self.len(), self)
    }
}

impl<T: StructuralHash, const N: usize> StructuralHash for [T; N] {
    fn structural_hash(&self) -> Option<u64> {
        sequence_hash(N, self)
    }
}

// =============================================================================
// Aggregates
// =============================================================================

impl<T: StructuralHash> StructuralHash for Option<T> {
    fn structural_hash(&self) -> Option<u64> {
        let mut state = FxHasher::default();
        match self {
            None => state.write_u8(0),
            Some(value) => {
                state.write_u8(1);
                state.write_u64(value.structural_hash()?);
            }
        }
        Some(state.finish())
    }
}

macro_rules! impl_structural_hash_for_tuple {
    ($($member:ident => $field:tt),+) => {
        impl<$($member: StructuralHash),+> StructuralHash for ($($member,)+) {
            fn structural_hash(&self) -> Option<u64> {
                let mut state = FxHasher::default();
                $(state.write_u64(self.$field.structural_hash()?);)+
                Some(state.finish())
            }
        }
    };
}

impl_structural_hash_for_tuple!(A => 0, B => 1);
impl_structural_hash_for_tuple!(A => 0, B => 1, C => 2);
impl_structural_hash_for_tuple!(A => 0, B => 1, C => 2, D => 3);

// =============================================================================
// Mappings and sets: order-independent combination
// =============================================================================

fn entry_hash<K: StructuralHash, V: StructuralHash>(key: &K, value: &V) -> Option<u64> {
    let mut state = FxHasher::default();
    state.write_u64(key.structural_hash()?);
    state.write_u64(value.structural_hash()?);
    Some(state.finish())
}

// Iteration order of hash maps is unspecified, so entry hashes are combined
// with a commutative operation.
fn unordered_hash<I: IntoIterator<Item = Option<u64>>>(length: usize, entries: I) -> Option<u64> {
    let mut combined = content_hash(&length);
    for entry in entries {
        combined = combined.wrapping_add(entry?);
    }
    Some(combined)
}

impl<K: StructuralHash, V: StructuralHash, S> StructuralHash for HashMap<K, V, S> {
    fn structural_hash(&self) -> Option<u64> {
        unordered_hash(self.len(), self.iter().map(|(key, value)| entry_hash(key, value)))
    }
}

impl<K: StructuralHash, V: StructuralHash> StructuralHash for BTreeMap<K, V> {
    fn structural_hash(&self) -> Option<u64> {
        unordered_hash(self.len(), self.iter().map(|(key, value)| entry_hash(key, value)))
    }
}

impl<T: StructuralHash, S> StructuralHash for HashSet<T, S> {
    fn structural_hash(&self) -> Option<u64> {
        unordered_hash(self.len(), self.iter().map(StructuralHash::structural_hash))
    }
}

impl<T: StructuralHash> StructuralHash for BTreeSet<T> {
    fn structural_hash(&self) -> Option<u64> {
        unordered_hash(self.len(), self.iter().map(StructuralHash::structural_hash))
    }
}

// =============================================================================
// Function references
// =============================================================================

macro_rules! impl_structural_hash_for_fn {
    ($($argument:ident),*) => {
        // Function pointers hash by code address; equal pointers are the
        // same function.
        impl<$($argument,)* R> StructuralHash for fn($($argument),*) -> R {
            fn structural_hash(&self) -> Option<u64> {
                Some(content_hash(self))
            }
        }

        // A closure has no hashable content.
        impl<$($argument,)* R> StructuralHash for dyn Fn($($argument),*) -> R {
            fn structural_hash(&self) -> Option<u64> {
                None
            }
        }
    };
}

impl_structural_hash_for_fn!();
impl_structural_hash_for_fn!(A);
impl_structural_hash_for_fn!(A, B);

// =============================================================================
// Tests
// =============================================================================
