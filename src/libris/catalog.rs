//! The catalog: an ordered collection of book entries with stable slot
//! identity.
//!
//! Slots live in a [`slotmap::SlotMap`] arena and carry explicit prev/next
//! links, so a [`SlotKey`] supports O(1) removal and stays valid no matter
//! what happens to other slots. Sequence order is insertion order; there is
//! no duplicate detection and no ordering key.
//!
//! Ownership contract:
//! - [`Catalog::add`] deep-copies the entry into a fresh shared handle. The
//!   catalog owns its records; mutating the caller's entry afterwards does
//!   not affect the stored copy.
//! - The `find_by_*` searches return a *view* catalog whose slots alias the
//!   matching records (shared handles, no copies). Editing a record through
//!   a view is visible through the owning catalog, which is what the
//!   "find, then act on a result" workflow relies on.
//!
//! Records are `Rc<RefCell<Entry>>`, so dropping a view never releases
//! records still reachable from their owner. Single-writer-at-a-time access
//! is assumed: two live `borrow_mut` calls on the same record panic, and
//! nothing here prevents an editing flow from reaching one record through
//! two views at once.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use crate::error::{LibrisError, Result};
use crate::model::Entry;

new_key_type! {
    /// Stable handle to one catalog slot.
    pub struct SlotKey;
}

/// Shared handle to one book entry.
pub type EntryRef = Rc<RefCell<Entry>>;

#[derive(Debug)]
struct Slot {
    prev: Option<SlotKey>,
    next: Option<SlotKey>,
    entry: EntryRef,
}

#[derive(Debug, Default)]
pub struct Catalog {
    slots: SlotMap<SlotKey, Slot>,
    head: Option<SlotKey>,
    tail: Option<SlotKey>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends a slot aliasing `entry` at the tail.
    fn push_ref(&mut self, entry: EntryRef) -> SlotKey {
        let key = self.slots.insert(Slot {
            prev: self.tail,
            next: None,
            entry,
        });

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        key
    }

    /// Deep-copies `entry` and appends it as a new owned record.
    pub fn add(&mut self, entry: &Entry) -> SlotKey {
        self.push_ref(Rc::new(RefCell::new(entry.clone())))
    }

    /// Duplicates and appends every record from `other`, in order.
    pub fn add_all(&mut self, other: &Catalog) {
        for (_, entry) in other.iter() {
            self.add(&entry.borrow());
        }
    }

    /// Duplicates and appends a batch of entries, in slice order.
    pub fn add_many(&mut self, entries: &[Entry]) {
        for entry in entries {
            self.add(entry);
        }
    }

    /// New catalog with deep copies of every record, in original order.
    pub fn duplicate(&self) -> Catalog {
        let mut copy = Catalog::new();
        copy.add_all(self);
        copy
    }

    /// Slot at zero-based `index`, by linear traversal from the head.
    pub fn get(&self, index: usize) -> Result<SlotKey> {
        let mut cursor = self.head;
        let mut i = 0;

        while let Some(key) = cursor {
            if i == index {
                return Ok(key);
            }
            cursor = self.slots[key].next;
            i += 1;
        }

        Err(LibrisError::IndexOutOfRange(index))
    }

    /// Shared handle for the record in `key`'s slot, if the slot is live.
    pub fn entry(&self, key: SlotKey) -> Option<EntryRef> {
        self.slots.get(key).map(|slot| Rc::clone(&slot.entry))
    }

    fn filter_view<F>(&self, matches: F) -> Catalog
    where
        F: Fn(&Entry) -> bool,
    {
        let mut view = Catalog::new();
        for (_, entry) in self.iter() {
            if matches(&entry.borrow()) {
                view.push_ref(entry);
            }
        }
        view
    }

    /// View aliasing every record, in order. Used by flows that present the
    /// whole catalog as a result list.
    pub fn view(&self) -> Catalog {
        self.filter_view(|_| true)
    }

    /// Records whose title equals `title` exactly (case-sensitive, no
    /// trimming). The result aliases the matching records; an empty result
    /// is a catalog of length zero, not an error.
    pub fn find_by_title(&self, title: &str) -> Catalog {
        self.filter_view(|entry| entry.title() == title)
    }

    /// Records whose author equals `author` exactly. See [`find_by_title`].
    ///
    /// [`find_by_title`]: Catalog::find_by_title
    pub fn find_by_author(&self, author: &str) -> Catalog {
        self.filter_view(|entry| entry.author() == author)
    }

    /// Records whose publisher equals `publisher` exactly. See
    /// [`find_by_title`].
    ///
    /// [`find_by_title`]: Catalog::find_by_title
    pub fn find_by_publisher(&self, publisher: &str) -> Catalog {
        self.filter_view(|entry| entry.publisher() == publisher)
    }

    /// Slot holding exactly this record (pointer identity, not equality).
    pub fn slot_of(&self, entry: &EntryRef) -> Option<SlotKey> {
        self.iter()
            .find(|(_, candidate)| Rc::ptr_eq(candidate, entry))
            .map(|(key, _)| key)
    }

    /// Detaches `key`'s slot in O(1) and returns its record without
    /// destroying it. Other slot keys stay valid. Returns `None` for a
    /// stale key.
    pub fn remove(&mut self, key: SlotKey) -> Option<EntryRef> {
        let slot = self.slots.remove(key)?;

        match slot.prev {
            Some(prev) => self.slots[prev].next = slot.next,
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => self.slots[next].prev = slot.prev,
            None => self.tail = slot.prev,
        }

        Some(slot.entry)
    }

    /// Removes every record present (by identity) in both catalogs from
    /// `self`. Quadratic by design; catalogs are expected to hold hundreds
    /// to low thousands of entries.
    pub fn remove_all(&mut self, other: &Catalog) {
        for (_, target) in other.iter() {
            while let Some(key) = self.slot_of(&target) {
                self.remove(key);
            }
        }
    }

    /// Front-to-back traversal of `(key, record)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            catalog: self,
            cursor: self.head,
        }
    }
}

pub struct Iter<'a> {
    catalog: &'a Catalog,
    cursor: Option<SlotKey>,
}

impl Iterator for Iter<'_> {
    type Item = (SlotKey, EntryRef);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let slot = &self.catalog.slots[key];
        self.cursor = slot.next;
        Some((key, Rc::clone(&slot.entry)))
    }
}
