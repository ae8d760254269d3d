use std::{ptr, ptr::NonNull};

use super::{Element, Node, NodePtr};

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Node {
            parent: None,
            right: None,
            left: None,
            element: Element { key, value },
        }
    }

    /// Leftmost node of the subtree rooted at `node`, i.e. its minimum.
    #[inline(always)]
    pub(crate) fn leftmost(mut node: NonNull<Self>) -> NonNull<Self> {
        // SAFETY: child pointers always reference live nodes of the tree.
        while let Some(left) = unsafe { node.as_ref() }.left {
            node = left;
        }
        node
    }

    /// Rightmost node of the subtree rooted at `node`, i.e. its maximum.
    #[inline(always)]
    pub(crate) fn rightmost(mut node: NonNull<Self>) -> NonNull<Self> {
        // SAFETY: child pointers always reference live nodes of the tree.
        while let Some(right) = unsafe { node.as_ref() }.right {
            node = right;
        }
        node
    }

    /// In-order successor.
    ///
    /// With a right-hand child, go down once and then left as far as we
    /// can. Otherwise everything below us is smaller, so climb until we
    /// arrive at a parent from its left side; climbing off the root means
    /// we already were the maximum.
    pub(crate) fn next(&self) -> NodePtr<K, V> {
        if let Some(right) = self.right {
            return Some(Self::leftmost(right));
        }

        let mut node_ref = self;
        let mut parent = node_ref.parent;
        while let Some(p) = parent {
            // SAFETY: parent pointers stay consistent with child links.
            let p_ref = unsafe { p.as_ref() };
            let from_right = p_ref
                .right
                .is_some_and(|right| ptr::eq(right.as_ptr(), node_ref));
            if !from_right {
                break;
            }
            node_ref = p_ref;
            parent = p_ref.parent;
        }
        parent
    }

    /// In-order predecessor; the mirror image of [`Self::next`].
    pub(crate) fn prev(&self) -> NodePtr<K, V> {
        if let Some(left) = self.left {
            return Some(Self::rightmost(left));
        }

        let mut node_ref = self;
        let mut parent = node_ref.parent;
        while let Some(p) = parent {
            // SAFETY: parent pointers stay consistent with child links.
            let p_ref = unsafe { p.as_ref() };
            let from_left = p_ref
                .left
                .is_some_and(|left| ptr::eq(left.as_ptr(), node_ref));
            if !from_left {
                break;
            }
            node_ref = p_ref;
            parent = p_ref.parent;
        }
        parent
    }
}
