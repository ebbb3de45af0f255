use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, mem};

use super::{Iter, Keys, Values, ValuesMut};
use crate::collections::traits::{Clear, Count};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// An unordered map from hashable keys to values, stored in a single flat array of buckets.
///
/// Every key has an ideal bucket, given by its hash. When that bucket is taken, the key goes in the
/// next free bucket after it (linear probing). Removing an entry shifts any entries that probed
/// past it back into the gap, so lookups never need tombstones. The map grows by doubling once it
/// is 4/5 full.
///
/// Keys are only ever handed out by shared reference, since changing a key's hash while it's stored
/// would leave it in the wrong bucket.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` when growing |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`, `O(1)` if the capacity suffices |
/// | `retain` | `O(n)` |
///
/// \* Expected. Keys which hash to the same bucket lengthen the probe run that has to be walked.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

/// Allocates `cap` empty buckets.
fn empty_buckets<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    (0..cap).map(|_| None).collect()
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates an empty map which doesn't allocate until the first insertion.
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_hasher(B::default())
    }

    /// Creates an empty map with `cap` buckets already allocated.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates an empty, unallocated map which hashes keys with `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: empty_buckets(0),
            len: 0,
            hasher,
        }
    }

    /// Creates an empty map with `cap` buckets which hashes keys with `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: empty_buckets(cap),
            len: 0,
            hasher,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, occupied or not.
    pub const fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Returns the hasher builder used by this map.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Associates `value` with `key`, growing first if the map is at its load limit. Returns the
    /// value previously associated with an equal key, in which case the stored key is kept and
    /// `key` is dropped.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.reserve_index_for_key(&key);

        // Probing stops at an empty bucket or an equal key.
        match &mut self.arr[index] {
            Some(existing) => Some(mem::replace(&mut existing.1, value)),
            None => {
                self.arr[index] = Some((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns a mutable reference to the value associated with `key`, inserting the result of
    /// `default` first if there is none.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        let index = self.reserve_index_for_key(&key);

        let bucket = &mut self.arr[index];
        if bucket.is_none() {
            self.len += 1;
        }
        &mut bucket.get_or_insert_with(|| (key, default())).1
    }

    /// Returns the stored key and value for `key`, if present.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key.
        self.arr[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns the value for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns the value for `key` by mutable reference, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        self.arr[index].as_mut().map(|(_, v)| v)
    }

    /// Removes the entry for `key` and returns the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.find_index_for_key(key)?;

        let removed = mem::take(&mut self.arr[index])?;
        self.len -= 1;

        // UNCHECKED: The capacity can't be 0, since a bucket was found.
        let mut next_index = (index + 1) % self.cap();

        // Walk the probe run that follows the removed bucket. Any entry whose ideal bucket doesn't
        // lie cyclically within (index, next_index] would become unreachable behind the gap, so it
        // is moved back into the gap, which then moves forward to where that entry was.
        while let Some(next) = &self.arr[next_index] {
            let ideal = self.ideal_index(&next.0);
            let reachable = if index <= next_index {
                index < ideal && ideal <= next_index
            } else {
                index < ideal || ideal <= next_index
            };

            if !reachable {
                self.arr[index] = mem::take(&mut self.arr[next_index]);
                index = next_index;
            }
            next_index = (next_index + 1) % self.cap();
        }

        Some(removed)
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_index_for_key(key) {
            Some(i) => self.arr[i].is_some(),
            None => false,
        }
    }

    /// Keeps only the entries for which `keep` returns true. The capacity is left unchanged.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut keep: F) {
        let cap = self.cap();
        let old_arr = mem::replace(&mut self.arr, empty_buckets(cap));
        self.len = 0;

        for (key, mut value) in old_arr.into_vec().into_iter().flatten() {
            if keep(&key, &mut value) {
                // UNREACHABLE: The capacity is unchanged and can hold every previous entry.
                let index = self.find_index_for_key(&key)
                    .unwrap_or_else(|| unreachable!());
                self.arr[index] = Some((key, value));
                self.len += 1;
            }
        }
    }

    /// Grows the map, if needed, so that `extra` more entries fit below the load limit.
    ///
    /// # Panics
    /// Panics if the required capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra)
            .and_then(|n| n.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .map(|n| n / LOAD_FACTOR_NUMERATOR + 1)
            .ok_or(CapacityOverflow)
            .throw();
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Returns an iterator over every entry, in bucket order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over every key, in bucket order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator which takes ownership of every key, dropping the values.
    pub fn into_keys(self) -> impl Iterator<Item = K> {
        self.into_iter().map(|(k, _)| k)
    }

    /// Returns an iterator over every value, in bucket order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over every value by mutable reference.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            len: self.len,
            inner: self.arr.iter_mut(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Returns true once the map is at its load limit, which an insertion must not exceed.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len >= self.arr.len() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Multiplies the capacity by the growth factor, allocating at least a couple of buckets.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();

        self.realloc_with_cap(cmp::max(new_cap, MIN_ALLOCATED_CAP))
    }

    /// Moves every entry into `new_cap` fresh buckets. Does nothing if the entries wouldn't fit
    /// below the load limit.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        // Replace the buckets first so that we can consume the old ones.
        let old_arr = mem::replace(&mut self.arr, empty_buckets(new_cap));

        for entry in old_arr.into_vec().into_iter().flatten() {
            // UNREACHABLE: If the new capacity is 0, the old buckets hold no entries and we can't
            // enter this loop.
            let index = self.find_index_for_key(&entry.0).unwrap_or_else(|| unreachable!());

            self.arr[index] = Some(entry);
        }
    }

    /// Grows if needed, then finds the bucket which holds or should hold `key`.
    fn reserve_index_for_key(&mut self, key: &K) -> usize {
        if self.should_grow() {
            self.grow()
        }

        // UNREACHABLE: We've just grown if necessary, so the capacity isn't 0.
        self.find_index_for_key(key).unwrap_or_else(|| unreachable!())
    }

    /// Calculates the ideal index of a bucket for the provided `hashable`. Must only be called
    /// with a non-zero capacity.
    fn ideal_index<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        (self.hasher.hash_one(hashable) % self.cap() as u64) as usize
    }

    /// Walks the probe run from the ideal bucket of `key` to the first bucket which is empty or
    /// holds an equal key. Returns None only when nothing is allocated.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.cap() == 0 {
            return None;
        }
        let mut index = self.ideal_index(key);

        // Terminates because the load limit keeps at least one bucket empty.
        while let Some(existing) = &self.arr[index]
            && Borrow::<Q>::borrow(&existing.0) != key
        {
            index = (index + 1) % self.cap();
        }

        Some(index)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Count for HashMap<K, V, B> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Clear for HashMap<K, V, B> {
    /// Removes every entry while keeping the allocated capacity.
    fn clear(&mut self) {
        self.arr.iter_mut().for_each(|bucket| *bucket = None);
        self.len = 0;
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        // Buckets are copied as-is, so the clone keeps the same layout without rehashing.
        HashMap {
            arr: self.arr.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = HashMap::new();
        map.reserve(iter.size_hint().0);

        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.arr.iter()
            .map(|o| match o {
                Some((k, v)) => format!("({k:?}: {v:?})"),
                None => "-".into(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        f.debug_struct("HashMap")
            .field("buckets", &DebugRaw(format!("[{buckets}]")))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
