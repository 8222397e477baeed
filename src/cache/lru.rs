//! LRU Recency Module
//!
//! Arena-backed doubly linked list ordering entries by recency.
//!
//! Items live in a growable `Vec` of slots; links between slots are indices,
//! not references, and freed slots are recycled through a free list. The
//! front of the list is the least recently used item, the back the most
//! recently used one. Every operation is O(1).

// == Constants ==
/// Null link marker.
const NIL: usize = usize::MAX;

// == Slot ==
#[derive(Debug)]
struct Slot<T> {
    item: Option<T>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Recency-ordered arena of items addressed by slot index.
///
/// Slot indices stay valid until the item is removed; the owner keeps
/// its own key → slot table.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Slot<T>>,
    /// Least recently used slot
    head: usize,
    /// Most recently used slot
    tail: usize,
    /// First reusable slot, chained through `next`
    free: usize,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Push Back ==
    /// Appends `item` at the most recently used end and returns its slot.
    pub fn push_back(&mut self, item: T) -> usize {
        let idx = if self.free != NIL {
            let idx = self.free;
            self.free = self.slots[idx].next;
            self.slots[idx] = Slot {
                item: Some(item),
                prev: NIL,
                next: NIL,
            };
            idx
        } else {
            self.slots.push(Slot {
                item: Some(item),
                prev: NIL,
                next: NIL,
            });
            self.slots.len() - 1
        };

        self.link_back(idx);
        self.len += 1;
        idx
    }

    // == Move To Back ==
    /// Marks the item at `idx` as most recently used.
    ///
    /// Unknown or vacant slots are ignored.
    pub fn move_to_back(&mut self, idx: usize) {
        if !self.is_occupied(idx) || idx == self.tail {
            return;
        }
        self.unlink(idx);
        self.link_back(idx);
    }

    // == Remove ==
    /// Unlinks and returns the item at `idx`, recycling the slot.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_occupied(idx) {
            return None;
        }
        self.unlink(idx);
        let item = self.slots[idx].item.take();
        self.slots[idx].next = self.free;
        self.free = idx;
        self.len -= 1;
        item
    }

    // == Pop Front ==
    /// Removes and returns the least recently used item.
    pub fn pop_front(&mut self) -> Option<T> {
        self.front_slot().and_then(|idx| self.remove(idx))
    }

    // == Accessors ==
    /// Slot of the least recently used item.
    pub fn front_slot(&self) -> Option<usize> {
        (self.head != NIL).then_some(self.head)
    }

    /// Slot following `idx` towards the most recently used end.
    pub fn next_slot(&self, idx: usize) -> Option<usize> {
        if !self.is_occupied(idx) {
            return None;
        }
        let next = self.slots[idx].next;
        (next != NIL).then_some(next)
    }

    /// Least recently used item.
    pub fn front(&self) -> Option<&T> {
        self.front_slot().and_then(|idx| self.get(idx))
    }

    /// Most recently used item.
    pub fn back(&self) -> Option<&T> {
        if self.tail == NIL {
            None
        } else {
            self.get(self.tail)
        }
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(|slot| slot.item.as_ref())
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx).and_then(|slot| slot.item.as_mut())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every item and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    // == Iteration ==
    /// Iterates from least to most recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Internal Linking ==
    fn is_occupied(&self, idx: usize) -> bool {
        self.slots
            .get(idx)
            .map_or(false, |slot| slot.item.is_some())
    }

    fn link_back(&mut self, idx: usize) {
        self.slots[idx].prev = self.tail;
        self.slots[idx].next = NIL;
        if self.tail != NIL {
            self.slots[self.tail].next = idx;
        } else {
            self.head = idx;
        }
        self.tail = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;

        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Iterator over a [`RecencyList`] from least to most recently used.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let slot = &self.list.slots[self.cursor];
        self.cursor = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_back_orders_oldest_first() {
        let mut list = RecencyList::new();
        list.push_back("key1");
        list.push_back("key2");
        list.push_back("key3");

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&"key1"));
        assert_eq!(list.back(), Some(&"key3"));
        assert_eq!(order(&list), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_move_to_back() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        list.move_to_back(a);

        assert_eq!(list.front(), Some(&"b"));
        assert_eq!(order(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_back_of_tail_is_noop() {
        let mut list = RecencyList::new();
        list.push_back("a");
        let b = list.push_back("b");

        list.move_to_back(b);
        assert_eq!(order(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        list.move_to_back(a);
        list.move_to_back(c);
        list.move_to_back(b);

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_front(), Some("c"));
        assert_eq!(list.pop_front(), Some("b"));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn test_remove_middle_and_ends() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(order(&list), vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front(), Some(&"c"));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.front_slot(), None);
    }

    #[test]
    fn test_remove_vacant_slot_is_none() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.remove(42), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        list.push_back("b");

        list.remove(a);
        let c = list.push_back("c");

        assert_eq!(c, a);
        assert_eq!(order(&list), vec!["b", "c"]);
        assert_eq!(list.get(c), Some(&"c"));
    }

    #[test]
    fn test_slot_walk_matches_iter() {
        let mut list = RecencyList::new();
        for item in ["w", "x", "y", "z"] {
            list.push_back(item);
        }

        let mut walked = Vec::new();
        let mut cursor = list.front_slot();
        while let Some(idx) = cursor {
            walked.push(*list.get(idx).unwrap());
            cursor = list.next_slot(idx);
        }

        assert_eq!(walked, order(&list));
    }

    #[test]
    fn test_get_mut_and_clear() {
        let mut list = RecencyList::new();
        let idx = list.push_back(1);

        if let Some(item) = list.get_mut(idx) {
            *item = 10;
        }
        assert_eq!(list.get(idx), Some(&10));

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get(idx), None);
        assert_eq!(list.iter().count(), 0);
    }
}
