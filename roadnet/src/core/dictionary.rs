//! Singly-linked key/value dictionary.
//!
//! Lookup and removal are linear scans. New keys are linked at the head, so
//! iteration currently yields newest-first; callers must not rely on that
//! order. Iterators borrow the dictionary, which rules out mutation while a
//! traversal is alive.

use std::borrow::Borrow;
use std::fmt;

type Link<K, V> = Option<Box<Entry<K, V>>>;

struct Entry<K, V> {
    key: K,
    value: V,
    next: Link<K, V>,
}

/// Mapping from unique keys to values backed by a singly-linked chain.
pub struct Dictionary<K, V> {
    head: Link<K, V>,
    len: usize,
}

impl<K, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut entry) = link {
            link = entry.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|(_, value)| value)
    }
}

impl<K: Eq, V> Dictionary<K, V> {
    /// Insert `value` under `key`.
    ///
    /// Replaces the value of an existing key and returns the previous one;
    /// otherwise links a new entry at the head and returns `None`.
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.entry_mut(&key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }
        let next = self.head.take();
        self.head = Some(Box::new(Entry { key, value, next }));
        self.len += 1;
        None
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut link = &mut self.head;
        while link
            .as_ref()
            .is_some_and(|entry| key != entry.key.borrow())
        {
            link = &mut link.as_mut()?.next;
        }
        let removed = link.take()?;
        let Entry { value, next, .. } = *removed;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = self.head.as_deref();
        while let Some(entry) = current {
            if key == entry.key.borrow() {
                return Some(&entry.value);
            }
            current = entry.next.as_deref();
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entry_mut(key).map(|entry| &mut entry.value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    fn entry_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = self.head.as_deref_mut();
        while let Some(entry) = current {
            if key == entry.key.borrow() {
                return Some(entry);
            }
            current = entry.next.as_deref_mut();
        }
        None
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Dictionary<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Clone, V: Clone> Clone for Dictionary<K, V> {
    /// Copy preserving iteration order.
    fn clone(&self) -> Self {
        let entries: Vec<(&K, &V)> = self.iter().collect();
        let mut copy = Self::new();
        for (key, value) in entries.into_iter().rev() {
            let next = copy.head.take();
            copy.head = Some(Box::new(Entry {
                key: key.clone(),
                value: value.clone(),
                next,
            }));
            copy.len += 1;
        }
        copy
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, K, V> {
    next: Option<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|entry| {
            self.next = entry.next.as_deref();
            (&entry.key, &entry.value)
        })
    }
}

pub struct IterMut<'a, K, V> {
    next: Option<&'a mut Entry<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|entry| {
            self.next = entry.next.as_deref_mut();
            (&entry.key, &mut entry.value)
        })
    }
}
