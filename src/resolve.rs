use std::cmp::Ordering::*;

use crate::{Element, Error, Node, NodePtrExt, Tree};

// Two ways of answering "what sits next to this key": the general
// root-to-target walk, which needs no parent pointers at all, and the two
// structural shortcuts that only read one link each.
impl<K, V> Tree<K, V>
where
    K: Ord,
{
    /// The element immediately before `key` in ascending key order, or
    /// `None` when `key` is absent or already holds the minimum.
    pub fn predecessor(&self, key: &K) -> Option<&Element<K, V>> {
        // SAFETY: lookup only yields live nodes.
        let target = unsafe { self.lookup(key)?.as_ref() };
        self.predecessor_of(target)
    }

    /// The element immediately after `key` in ascending key order, or
    /// `None` when `key` is absent or already holds the maximum.
    pub fn successor(&self, key: &K) -> Option<&Element<K, V>> {
        // SAFETY: lookup only yields live nodes.
        let target = unsafe { self.lookup(key)?.as_ref() };
        self.successor_of(target)
    }

    fn predecessor_of(&self, target: &Node<K, V>) -> Option<&Element<K, V>> {
        // A left subtree pins the predecessor to its rightmost element.
        if let Some(left) = target.left {
            let node = Node::rightmost(left);
            // SAFETY: rightmost stays on live nodes.
            return Some(&unsafe { node.as_ref() }.element);
        }

        // Otherwise walk from the root toward the target's key, keeping
        // the last strictly smaller node seen. Never finding one means the
        // target already holds the minimum.
        let mut best = None;
        let mut current = self.root;
        while let Some(node) = current {
            // SAFETY: the walk only steps onto live nodes.
            let node = unsafe { node.as_ref() };
            match target.element.key.cmp(&node.element.key) {
                Less => current = node.left,
                Equal => break,
                Greater => {
                    best = Some(&node.element);
                    current = node.right;
                }
            }
        }
        best
    }

    fn successor_of(&self, target: &Node<K, V>) -> Option<&Element<K, V>> {
        // A right subtree pins the successor to its leftmost element.
        if let Some(right) = target.right {
            let node = Node::leftmost(right);
            // SAFETY: leftmost stays on live nodes.
            return Some(&unsafe { node.as_ref() }.element);
        }

        // Mirror walk: keep the last strictly greater node seen.
        let mut best = None;
        let mut current = self.root;
        while let Some(node) = current {
            // SAFETY: the walk only steps onto live nodes.
            let node = unsafe { node.as_ref() };
            match target.element.key.cmp(&node.element.key) {
                Greater => current = node.right,
                Equal => break,
                Less => {
                    best = Some(&node.element);
                    current = node.left;
                }
            }
        }
        best
    }

    /// The element of the parent of the node carrying `key`, or
    /// [`Error::NotFound`] when the key is absent or sits at the root.
    ///
    /// This is a structural lookup, not an ordering query: for a right
    /// child the parent happens to be the in-order predecessor, but for a
    /// left child it is the in-order successor. Use [`Tree::predecessor`]
    /// and [`Tree::successor`] for the ordering neighbours.
    pub fn parent_of_key(&self, key: &K) -> Result<&Element<K, V>, Error> {
        let node = self.lookup(key);
        if node.is_none() {
            return Err(Error::NotFound);
        }
        match node.parent() {
            // SAFETY: the parent of a live node is live.
            Some(parent) => Ok(&unsafe { parent.as_ref() }.element),
            None => Err(Error::NotFound),
        }
    }

    /// The element of the immediate right child of the node carrying
    /// `key`, or [`Error::NotFound`] when the key is absent or the node
    /// has no right child.
    ///
    /// Coincides with the in-order successor only while that child has no
    /// left subtree; [`Tree::successor`] handles the general case.
    pub fn right_child_of_key(&self, key: &K) -> Result<&Element<K, V>, Error> {
        let node = self.lookup(key);
        if node.is_none() {
            return Err(Error::NotFound);
        }
        match node.right() {
            // SAFETY: the child of a live node is live.
            Some(right) => Ok(&unsafe { right.as_ref() }.element),
            None => Err(Error::NotFound),
        }
    }
}
