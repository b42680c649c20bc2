//! Generational arena for script-owned userdata.

use std::any::Any;
use std::fmt;

/// Handle to a heap-allocated userdata object.
///
/// A safe, copyable reference into the [`ObjectHeap`]. The generational
/// index detects use-after-free: a handle to a freed slot stops resolving
/// even if the slot is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    index: u32,
    generation: u32,
}

impl ObjectHandle {
    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Heap storage for wrapped native resources.
///
/// Each slot holds one strong-reference count, the registered type tag the
/// object was wrapped under, and the boxed payload. When the count reaches
/// zero the payload is handed back to the caller (so a destroy hook can
/// run) and the slot's generation advances, invalidating old handles.
pub struct ObjectHeap {
    slots: Vec<HeapSlot>,
    free_list: Vec<u32>,
}

struct HeapSlot {
    generation: u32,
    tag: &'static str,
    ref_count: u32,
    value: Option<Box<dyn Any + Send>>,
}

impl ObjectHeap {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Allocate a new userdata object under a type tag.
    ///
    /// The object starts with a reference count of one, owned by the
    /// script domain.
    pub fn allocate<T: Any + Send>(&mut self, tag: &'static str, value: T) -> ObjectHandle {
        let boxed: Box<dyn Any + Send> = Box::new(value);

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.tag = tag;
            slot.value = Some(boxed);
            slot.ref_count = 1;
            ObjectHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(HeapSlot {
                generation: 0,
                tag,
                ref_count: 1,
                value: Some(boxed),
            });
            ObjectHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Borrow the payload of a live object.
    ///
    /// Returns `None` if the handle is stale or the payload is not a `T`.
    /// The borrow is valid only as long as the heap is not mutated.
    pub fn get<T: Any>(&self, handle: ObjectHandle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()?.downcast_ref::<T>()
    }

    /// The type tag a live object was wrapped under.
    pub fn tag(&self, handle: ObjectHandle) -> Option<&'static str> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation || slot.value.is_none() {
            return None;
        }
        Some(slot.tag)
    }

    /// Increment the strong-reference count. Returns false for stale
    /// handles.
    pub fn add_ref(&mut self, handle: ObjectHandle) -> bool {
        if let Some(slot) = self.slots.get_mut(handle.index as usize)
            && slot.generation == handle.generation
            && slot.value.is_some()
        {
            slot.ref_count = slot.ref_count.saturating_add(1);
            return true;
        }
        false
    }

    /// Decrement the strong-reference count, freeing the slot at zero.
    ///
    /// On free, returns the tag and the payload so the caller can run the
    /// type's destroy hook before dropping it. Returns `None` when the
    /// object stays alive or the handle is stale; releasing a dead handle
    /// is a no-op, never a double free.
    pub fn release(&mut self, handle: ObjectHandle) -> Option<(&'static str, Box<dyn Any + Send>)> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation || slot.value.is_none() {
            return None;
        }
        slot.ref_count = slot.ref_count.saturating_sub(1);
        if slot.ref_count > 0 {
            return None;
        }
        let payload = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.index);
        Some((slot.tag, payload))
    }

    /// The current strong-reference count of a live object.
    pub fn ref_count(&self, handle: ObjectHandle) -> Option<u32> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation == handle.generation && slot.value.is_some() {
            Some(slot.ref_count)
        } else {
            None
        }
    }
}

impl Default for ObjectHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHeap")
            .field("slot_count", &self.slots.len())
            .field("free_count", &self.free_list.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: &str = "test.value";

    #[test]
    fn allocate_and_get() {
        let mut heap = ObjectHeap::new();
        let handle = heap.allocate(TAG, 42i32);

        assert_eq!(heap.get::<i32>(handle), Some(&42));
        assert_eq!(heap.tag(handle), Some(TAG));
        assert_eq!(heap.ref_count(handle), Some(1));
    }

    #[test]
    fn wrong_payload_type_is_none() {
        let mut heap = ObjectHeap::new();
        let handle = heap.allocate(TAG, 42i32);
        assert!(heap.get::<String>(handle).is_none());
    }

    #[test]
    fn release_frees_at_zero_and_returns_payload() {
        let mut heap = ObjectHeap::new();
        let handle = heap.allocate(TAG, "payload".to_string());

        let (tag, payload) = heap.release(handle).unwrap();
        assert_eq!(tag, TAG);
        assert_eq!(payload.downcast_ref::<String>().unwrap(), "payload");

        assert!(heap.get::<String>(handle).is_none());
        assert!(heap.tag(handle).is_none());
        assert!(heap.ref_count(handle).is_none());
    }

    #[test]
    fn add_ref_delays_free() {
        let mut heap = ObjectHeap::new();
        let handle = heap.allocate(TAG, 7u8);

        assert!(heap.add_ref(handle));
        assert_eq!(heap.ref_count(handle), Some(2));

        assert!(heap.release(handle).is_none());
        assert_eq!(heap.ref_count(handle), Some(1));

        assert!(heap.release(handle).is_some());
    }

    #[test]
    fn release_of_dead_handle_is_noop() {
        let mut heap = ObjectHeap::new();
        let handle = heap.allocate(TAG, 7u8);
        assert!(heap.release(handle).is_some());
        assert!(heap.release(handle).is_none());
        assert!(!heap.add_ref(handle));
    }

    #[test]
    fn reused_slot_invalidates_old_handle() {
        let mut heap = ObjectHeap::new();
        let first = heap.allocate(TAG, 1i32);
        heap.release(first);

        let second = heap.allocate(TAG, 2i32);
        assert_eq!(first.index(), second.index());

        assert!(heap.get::<i32>(first).is_none());
        assert_eq!(heap.get::<i32>(second), Some(&2));
    }
}
