use crate::error::Result;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A stable handle to a node of a [`CharList`](crate::CharList).
///
/// A handle stays valid until its node is removed from the list. The slot
/// may later be reused by another node, but with a different generation,
/// so an old handle never aliases the new node.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) next: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) element: char,
}

#[derive(Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

#[derive(Clone)]
struct Entry {
    generation: u32,
    slot: Slot,
}

/// Node storage of a list.
///
/// Vacant slots form an intrusive free list through `next_free`. A slot's
/// generation is bumped each time its node is removed, which is what
/// invalidates outstanding [`NodeId`]s. Once a generation reaches `u32::MAX`
/// the slot is never reused. Entries are never truncated, so generations are
/// never reset while the arena lives.
#[derive(Clone, Default)]
pub(crate) struct Arena {
    entries: Vec<Entry>,
    free: Option<usize>,
    occupied: usize,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    /// Number of live nodes.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// Store `node` and return its handle.
    ///
    /// Reuses a vacant slot when there is one; otherwise grows the storage,
    /// reporting [`Error::AllocationFailure`](crate::Error::AllocationFailure)
    /// instead of aborting when it cannot.
    pub(crate) fn insert(&mut self, node: Node) -> Result<NodeId> {
        let index = match self.free {
            Some(index) => {
                let entry = &mut self.entries[index];
                self.free = match entry.slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                entry.slot = Slot::Occupied(node);
                index
            }
            None => {
                self.entries.try_reserve(1)?;
                self.entries.push(Entry {
                    generation: 0,
                    slot: Slot::Occupied(node),
                });
                self.entries.len() - 1
            }
        };
        self.occupied += 1;
        Ok(NodeId {
            index,
            generation: self.entries[index].generation,
        })
    }

    /// Remove the node behind `id`, or return `None` if `id` is stale.
    pub(crate) fn try_remove(&mut self, id: NodeId) -> Option<Node> {
        let entry = self.entries.get_mut(id.index)?;
        if entry.generation != id.generation || matches!(entry.slot, Slot::Vacant { .. }) {
            return None;
        }
        // A slot whose generation is exhausted is retired: it stays vacant
        // off the free list, so no later handle can repeat an old one.
        let next_generation = entry.generation.checked_add(1);
        let vacant = Slot::Vacant {
            next_free: next_generation.and(self.free),
        };
        let node = match std::mem::replace(&mut entry.slot, vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!(),
        };
        if let Some(generation) = next_generation {
            entry.generation = generation;
            self.free = Some(id.index);
        }
        self.occupied -= 1;
        Some(node)
    }

    /// Remove the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale. Only handles taken from the list's own links
    /// may be passed here.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node {
        self.try_remove(id).expect("invalid node handle")
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        match self.entries.get(id.index) {
            Some(Entry {
                generation,
                slot: Slot::Occupied(node),
            }) if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        match self.entries.get_mut(id.index) {
            Some(Entry {
                generation,
                slot: Slot::Occupied(node),
            }) if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get(id).expect("invalid node handle")
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.get_mut(id).expect("invalid node handle")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Node};

    fn node(element: char) -> Node {
        Node {
            next: None,
            prev: None,
            element,
        }
    }

    #[test]
    fn arena_insert_and_remove() {
        let mut arena = Arena::new();
        let a = arena.insert(node('a')).unwrap();
        let b = arena.insert(node('b')).unwrap();
        assert_eq!(arena.occupied(), 2);
        assert_eq!(arena[a].element, 'a');
        assert_eq!(arena[b].element, 'b');

        assert_eq!(arena.remove(a).element, 'a');
        assert_eq!(arena.occupied(), 1);
        assert!(!arena.contains(a));
        assert!(arena.try_remove(a).is_none());
        assert!(arena.contains(b));
    }

    #[test]
    fn arena_reused_slot_has_new_generation() {
        let mut arena = Arena::new();
        let a = arena.insert(node('a')).unwrap();
        arena.remove(a);
        let c = arena.insert(node('c')).unwrap();
        assert_ne!(a, c);
        assert!(arena.get(a).is_none());
        assert_eq!(arena[c].element, 'c');
    }

    #[test]
    fn arena_free_list_is_lifo() {
        let mut arena = Arena::new();
        let ids: Vec<_> = "abcd".chars().map(|c| arena.insert(node(c)).unwrap()).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);
        let x = arena.insert(node('x')).unwrap();
        let y = arena.insert(node('y')).unwrap();
        let z = arena.insert(node('z')).unwrap();
        assert_eq!(format!("{:?}", x), "NodeId(3v1)");
        assert_eq!(format!("{:?}", y), "NodeId(1v1)");
        assert_eq!(format!("{:?}", z), "NodeId(4v0)");
        assert_eq!(arena.occupied(), 5);
    }

    #[test]
    fn arena_retires_exhausted_slot() {
        let mut arena = Arena::new();
        let a = arena.insert(node('a')).unwrap();
        let b = arena.insert(node('b')).unwrap();
        arena.remove(a);
        arena.entries[a.index].generation = u32::MAX - 1;
        let last = arena.insert(node('c')).unwrap();
        assert_eq!(format!("{:?}", last), format!("NodeId(0v{})", u32::MAX - 1));

        arena.remove(last);
        let worn = arena.insert(node('d')).unwrap();
        assert_eq!(format!("{:?}", worn), format!("NodeId(0v{})", u32::MAX));

        // the slot is not handed out again once its generation is spent
        arena.remove(worn);
        assert!(arena.free.is_none());
        let fresh = arena.insert(node('e')).unwrap();
        assert_eq!(format!("{:?}", fresh), "NodeId(2v0)");
        assert!(!arena.contains(a));
        assert!(!arena.contains(last));
        assert!(!arena.contains(worn));
        assert!(arena.try_remove(worn).is_none());
        assert_eq!(arena[b].element, 'b');
        assert_eq!(arena.occupied(), 2);

        // the free list still works around the retired slot
        arena.remove(b);
        let reused = arena.insert(node('f')).unwrap();
        assert_eq!(format!("{:?}", reused), "NodeId(1v1)");
    }

    #[test]
    #[should_panic(expected = "invalid node handle")]
    fn arena_index_stale_handle() {
        let mut arena = Arena::new();
        let a = arena.insert(node('a')).unwrap();
        arena.remove(a);
        let _ = &arena[a];
    }
}
