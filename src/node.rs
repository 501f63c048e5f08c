use crate::element::Element;
use crate::range::{Comparable, Range};
use crate::tree::Mode;

/// Color of the link from a node's parent. A missing child counts as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub(crate) fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// An owned, possibly absent subtree.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// Effective color of an optional child.
#[inline]
pub(crate) fn is_red<E>(node: &Link<E>) -> bool {
    node.as_ref().map_or(false, |n| n.color == Color::Red)
}

/// A node of the tree.
///
/// Each node owns its element and both child subtrees, and caches the extent
/// of the subtree below it in `range`: `range.start` is the smallest element
/// start in the subtree (always the leftmost descendant's, given the sort
/// key) and `range.end` the largest element end, which is not ordered and
/// has to be tracked explicitly. Rotations hand subtree ownership back up
/// the recursion instead of keeping parent pointers.
#[derive(Debug)]
pub(crate) struct Node<E> {
    pub(crate) elem: E,
    pub(crate) range: Range,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
    pub(crate) color: Color,
}

impl<E: Element> Node<E> {
    pub(crate) fn new(elem: E) -> Box<Self> {
        let range = elem.range().clone();
        Box::new(Node {
            elem,
            range,
            left: None,
            right: None,
            color: Color::Red,
        })
    }

    /// The furthest end held by this subtree, assuming both children carry
    /// correct extents.
    fn max_end(&self) -> Comparable {
        let mut end = &self.elem.range().end;
        if let Some(l) = self.left.as_deref() {
            if l.range.end > *end {
                end = &l.range.end;
            }
        }
        if let Some(r) = self.right.as_deref() {
            if r.range.end > *end {
                end = &r.range.end;
            }
        }
        end.clone()
    }

    /// Recompute this node's subtree extent from its element and children.
    pub(crate) fn adjust_range(&mut self) {
        let start = match self.left.as_deref() {
            Some(l) => l.range.start.clone(),
            None => self.elem.range().start.clone(),
        };
        let end = self.max_end();
        self.range.start = start;
        self.range.end = end;
    }

    /// Recompute extents for the whole subtree, post-order.
    pub(crate) fn adjust_ranges(&mut self) {
        if let Some(l) = self.left.as_deref_mut() {
            l.adjust_ranges();
        }
        if let Some(r) = self.right.as_deref_mut() {
            r.adjust_ranges();
        }
        self.adjust_range();
    }

    // (a,c)b -rotL-> ((a,)b,)c
    pub(crate) fn rotate_left(mut n: Box<Self>) -> Box<Self> {
        // Assumes: n has a right child.
        let mut root = n.right.take().expect("rotate_left: no right child");
        n.right = root.left.take();
        root.color = n.color;
        n.color = Color::Red;

        // n keeps its left spine, so its subtree start is unchanged; only
        // its end can shrink now that root's right subtree moved away.
        n.range.end = n.max_end();
        root.range.start = n.range.start.clone();
        root.left = Some(n);
        root.range.end = root.max_end();

        root
    }

    // (a,c)b -rotR-> (,(,c)b)a
    pub(crate) fn rotate_right(mut n: Box<Self>) -> Box<Self> {
        // Assumes: n has a left child.
        let mut root = n.left.take().expect("rotate_right: no left child");
        n.left = root.right.take();
        root.color = n.color;
        n.color = Color::Red;

        // root inherits the whole subtree, so its start is already correct;
        // n's start has to be refreshed from its new left child.
        n.range.start = match n.left.as_deref() {
            Some(l) => l.range.start.clone(),
            None => n.elem.range().start.clone(),
        };
        n.range.end = n.max_end();
        root.right = Some(n);
        root.range.end = root.max_end();

        root
    }

    // (aR,cR)bB -flipC-> (aB,cB)bR | (aB,cB)bR -flipC-> (aR,cR)bB
    pub(crate) fn flip_colors(&mut self) {
        // Assumes: n has two children.
        self.color = self.color.flip();
        let l = self.left.as_deref_mut().expect("flip_colors: no left child");
        l.color = l.color.flip();
        let r = self
            .right
            .as_deref_mut()
            .expect("flip_colors: no right child");
        r.color = r.color.flip();
    }

    /// Restore black balance and the left lean after a recursive call, and
    /// split 4-nodes when the discipline calls for it. Skips the extent
    /// recomputation under fast mutation.
    pub(crate) fn fix_up(mut n: Box<Self>, mode: Mode, fast: bool) -> Box<Self> {
        if !fast {
            n.adjust_range();
        }
        if is_red(&n.right) {
            if mode == Mode::TwoThreeFour && n.right.as_deref().is_some_and(|r| is_red(&r.left)) {
                n.right = n.right.take().map(Self::rotate_right);
            }
            n = Self::rotate_left(n);
        }
        if is_red(&n.left) && n.left.as_deref().is_some_and(|l| is_red(&l.left)) {
            n = Self::rotate_right(n);
        }
        if mode == Mode::TwoThree && is_red(&n.left) && is_red(&n.right) {
            n.flip_colors();
        }
        n
    }

    /// Carry a red link down the left spine so the leftmost node can be
    /// excised without unbalancing blacks. Callers have checked that both
    /// `n.left` and `n.left.left` are black.
    pub(crate) fn move_red_left(mut n: Box<Self>, mode: Mode) -> Box<Self> {
        n.flip_colors();
        if n.right.as_deref().is_some_and(|r| is_red(&r.left)) {
            n.right = n.right.take().map(Self::rotate_right);
            n = Self::rotate_left(n);
            n.flip_colors();
            if mode == Mode::TwoThreeFour && n.right.as_deref().is_some_and(|r| is_red(&r.right)) {
                n.right = n.right.take().map(Self::rotate_left);
            }
        }
        n
    }

    /// Mirror of [`Node::move_red_left`] for descents to the right.
    pub(crate) fn move_red_right(mut n: Box<Self>) -> Box<Self> {
        n.flip_colors();
        if n.left.as_deref().is_some_and(|l| is_red(&l.left)) {
            n = Self::rotate_right(n);
            n.flip_colors();
        }
        n
    }

    /// The leftmost node of this subtree.
    pub(crate) fn min(&self) -> &Self {
        let mut n = self;
        while let Some(l) = n.left.as_deref() {
            n = l;
        }
        n
    }

    /// The rightmost node of this subtree.
    pub(crate) fn max(&self) -> &Self {
        let mut n = self;
        while let Some(r) = n.right.as_deref() {
            n = r;
        }
        n
    }
}
