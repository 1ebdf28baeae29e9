/// Fixed-capacity circular buffer keeping the most recent items.
///
/// Pushing into a full buffer overwrites the oldest item.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    next: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        Self { slots: Vec::with_capacity(capacity), capacity, next: 0 }
    }

    pub fn push(&mut self, item: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(item);
        } else {
            self.slots[self.next] = item;
        }
        self.next = (self.next + 1) % self.capacity;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        // Until the buffer wraps, `next == len` and `older` is empty.
        let (newer, older) = self.slots.split_at(self.next.min(self.slots.len()));
        older.iter().chain(newer.iter())
    }

    pub fn into_vec(mut self) -> Vec<T> {
        if self.slots.len() == self.capacity {
            self.slots.rotate_left(self.next);
        }
        self.slots
    }
}
