//! Fixed-capacity container for the best k items seen so far.

use std::cmp::Ordering;

/// Comparator signature used by [`BoundedTopK::new`].
pub type OrdComparator<T> = fn(&T, &T) -> Ordering;

/// Keeps the `k` smallest items by comparator.
///
/// Items are held in an unsorted vector. Once full, every push scans for the
/// current maximum and replaces it when the new item is smaller, so a push is
/// O(k). This is intended for small k (a few dozen at most); callers that
/// need sorted output sort the drained items themselves.
#[derive(Debug, Clone)]
pub struct BoundedTopK<T, F = OrdComparator<T>> {
    capacity: usize,
    items: Vec<T>,
    comparator: F,
}

impl<T: Ord> BoundedTopK<T> {
    /// Create a container ordered ascending by `Ord`.
    pub fn new(capacity: usize) -> Self {
        BoundedTopK::with_comparator(capacity, <T as Ord>::cmp as OrdComparator<T>)
    }
}

impl<T, F> BoundedTopK<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create a container with a custom total-order comparator.
    pub fn with_comparator(capacity: usize, comparator: F) -> Self {
        BoundedTopK {
            capacity,
            items: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Offer an item. Below capacity it is always kept; otherwise it replaces
    /// the current maximum if it compares strictly less.
    pub fn push(&mut self, item: T) {
        if self.items.len() < self.capacity {
            self.items.push(item);
            return;
        }

        let worst = self
            .items
            .iter()
            .enumerate()
            .max_by(|x, y| (self.comparator)(x.1, y.1))
            .map(|(index, _)| index);
        if let Some(index) = worst
            && (self.comparator)(&item, &self.items[index]) == Ordering::Less
        {
            self.items[index] = item;
        }
    }

    /// The smallest held item, or `None` when empty.
    pub fn top(&self) -> Option<&T> {
        self.items.iter().min_by(|a, b| (self.comparator)(*a, *b))
    }

    /// Remove and return the smallest held item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let index = self
            .items
            .iter()
            .enumerate()
            .min_by(|x, y| (self.comparator)(x.1, y.1))
            .map(|(index, _)| index)?;
        Some(self.items.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrow the held items in no particular order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Remove all held items, in no particular order.
    pub fn drain(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    /// Consume the container, returning its items in no particular order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Consume the container, returning its items sorted ascending.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let BoundedTopK {
            mut items,
            comparator,
            ..
        } = self;
        items.sort_by(|a, b| comparator(a, b));
        items
    }
}
