use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T>, because dereferencing a Box allows the value to be moved
// back out of the heap when the node is freed.

/// An owning pointer to a heap-allocated node. Copies of the pointer are only ever held by the list
/// which owns the node and by iterators borrowing that list.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Moves `node` onto the heap.
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node, returning its contents.
    ///
    /// # Safety
    /// The pointer must not be used again afterwards, by this copy or any other.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: Every NodePtr is created from a leaked Box in from_node.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    // The following accessors produce references with an unbounded lifetime. Callers bind them to
    // the borrow of the owning list, and never hold them past the removal of the node.

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live for as long as it's linked into a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The node is live for as long as it's linked into a list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(self) -> &'a Link<T> {
        // SAFETY: The node is live for as long as it's linked into a list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: The node is live for as long as it's linked into a list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
