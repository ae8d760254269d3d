use crate::{Direction, Element, Node, Tree};

impl<K, V> Tree<K, V> {
    /// Materializes every element in key order, ascending or descending.
    ///
    /// Returns `None` for an empty tree — never `Some` of an empty vector —
    /// so callers can tell "no tree contents" apart from an empty result.
    ///
    /// The walk starts at the direction's extreme node and steps through
    /// the parent chain, so it needs no recursion and no auxiliary stack
    /// regardless of how degenerate the tree shape is.
    pub fn in_order_tree_walk(&self, direction: Direction) -> Option<Vec<&Element<K, V>>> {
        let root = self.root?;
        let mut output = Vec::with_capacity(self.len);

        let mut current = Some(match direction {
            Direction::Asc => Node::leftmost(root),
            Direction::Desc => Node::rightmost(root),
        });
        while let Some(node) = current {
            // SAFETY: the walk only ever steps onto live nodes of this tree.
            let node = unsafe { node.as_ref() };
            output.push(&node.element);
            current = match direction {
                Direction::Asc => node.next(),
                Direction::Desc => node.prev(),
            };
        }
        Some(output)
    }
}
