use std::{cmp::Ordering::*, fmt, fmt::Debug, ptr::NonNull};

use crate::{Element, Error, Node, NodePtr, NodePtrExt, Tree};

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        // Free leaves first, climbing back through the parent chain. No
        // recursion and no auxiliary stack, so a degenerate (list-shaped)
        // tree drops in constant space.
        let mut parent = self.root;
        while let Some(current) = parent {
            let current_ref = unsafe { current.as_ref() };
            if current_ref.left.is_some() {
                parent = current_ref.left;
                continue;
            }
            if current_ref.right.is_some() {
                parent = current_ref.right;
                continue;
            }
            parent = current_ref.parent;
            if let Some(mut p) = parent {
                let p = unsafe { p.as_mut() };
                if p.left == Some(current) {
                    p.left = None;
                } else {
                    p.right = None;
                }
            }
            drop(unsafe { Box::from_raw(current.as_ptr()) });
        }
        self.root = None;
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// A tree holding a single element.
    pub fn new_with_element(key: K, value: V) -> Self {
        Tree {
            root: NonNull::new(Box::into_raw(Box::new(Node::new(key, value)))),
            len: 1,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        *self = Tree::new();
    }

    /// The element with the smallest key, or `None` on an empty tree.
    pub fn min(&self) -> Option<&Element<K, V>> {
        let node = Node::leftmost(self.root?);
        // SAFETY: leftmost stays on live nodes of this tree.
        Some(&unsafe { node.as_ref() }.element)
    }

    /// The element with the largest key, or `None` on an empty tree.
    pub fn max(&self) -> Option<&Element<K, V>> {
        let node = Node::rightmost(self.root?);
        // SAFETY: rightmost stays on live nodes of this tree.
        Some(&unsafe { node.as_ref() }.element)
    }
}

impl<K, V> Tree<K, V>
where
    K: Ord,
{
    /// Inserts `key`/`value`, growing the tree by exactly one node.
    /// Equal keys are routed into the right subtree, so inserting an
    /// existing key adds a duplicate instead of replacing the value.
    ///
    /// No rebalancing is ever performed: inserting keys in sorted order
    /// degrades the tree into a list and every operation into O(n).
    pub fn insert(&mut self, key: K, value: V) {
        let mut leaf = Box::new(Node::new(key, value));
        let Some(root) = self.root else {
            self.root = NonNull::new(Box::into_raw(leaf));
            self.len += 1;
            return;
        };

        let mut current = root;
        loop {
            // SAFETY: current points at a live node and we hold &mut self,
            // so nothing else touches the tree during the descent.
            let current_ref = unsafe { &mut *current.as_ptr() };
            let slot = match leaf.element.key.cmp(&current_ref.element.key) {
                Less => &mut current_ref.left,
                Equal | Greater => &mut current_ref.right,
            };
            match *slot {
                Some(child) => current = child,
                None => {
                    leaf.parent = Some(current);
                    *slot = NonNull::new(Box::into_raw(leaf));
                    break;
                }
            }
        }
        self.len += 1;
    }

    /// The node carrying `key`, the first found walking down from the
    /// root. With duplicates present this is the topmost one.
    pub(crate) fn lookup(&self, key: &K) -> NodePtr<K, V> {
        let mut node = self.root;
        while let Some(candidate) = node {
            // SAFETY: candidate is a live node of this tree.
            let candidate = unsafe { candidate.as_ref() };
            match key.cmp(&candidate.element.key) {
                Equal => break,
                Greater => node = candidate.right,
                Less => node = candidate.left,
            }
        }
        node
    }

    pub fn exists(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// The element carrying `key`; absence is an ordinary outcome.
    pub fn search(&self, key: &K) -> Option<&Element<K, V>> {
        // SAFETY: lookup only yields live nodes.
        self.lookup(key).map(|n| &unsafe { n.as_ref() }.element)
    }

    /// The value stored under `key`, or [`Error::NotFound`].
    pub fn get_value(&self, key: &K) -> Result<&V, Error> {
        match self.lookup(key) {
            // SAFETY: lookup only yields live nodes.
            Some(node) => Ok(&unsafe { node.as_ref() }.element.value),
            None => Err(Error::NotFound),
        }
    }

    /// Removes the node carrying `key`, if any. Deleting an absent key is
    /// a no-op, never an error, so deletion is idempotent.
    pub fn delete(&mut self, key: &K) {
        let target = self.lookup(key);
        let Some(node) = target else {
            return;
        };

        let removed = match (target.left(), target.right()) {
            // At most one child: splice it (or nothing) into the target's
            // position and free the target.
            (None, child) | (child, None) => {
                self.splice_out(node, child);
                node
            }
            // Two children: the in-order successor is the leftmost node of
            // the right subtree and has no left child by construction, so
            // it splices out trivially. Its element overwrites the
            // target's in place; the target keeps its position.
            (Some(_), Some(right)) => {
                let successor = Node::leftmost(right);
                // SAFETY: successor is live until the from_raw below.
                self.splice_out(successor, unsafe { successor.as_ref() }.right);
                let element = unsafe { Box::from_raw(successor.as_ptr()) }.element;
                unsafe { &mut *node.as_ptr() }.element = element;
                self.len -= 1;
                return;
            }
        };

        // SAFETY: removed is fully unlinked; nothing references it now.
        drop(unsafe { Box::from_raw(removed.as_ptr()) });
        self.len -= 1;
    }

    /// Replaces `node` with `child` (possibly none) in its parent's slot,
    /// leaving `node` unlinked from the graph. The caller frees `node`.
    fn splice_out(&mut self, node: NonNull<Node<K, V>>, mut child: NodePtr<K, V>) {
        // SAFETY: node is a live node of this tree.
        let parent = unsafe { node.as_ref() }.parent;
        child.set_parent(parent);
        self.change_child(Some(node), child, parent);
    }

    fn change_child(&mut self, old: NodePtr<K, V>, new: NodePtr<K, V>, parent: NodePtr<K, V>) {
        if let Some(mut parent) = parent {
            // SAFETY: parent is live and we hold &mut self.
            let parent = unsafe { parent.as_mut() };
            if parent.left == old {
                parent.left = new;
            } else {
                parent.right = new;
            }
        } else {
            self.root = new;
        }
    }
}

impl<K, V> Debug for Tree<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
