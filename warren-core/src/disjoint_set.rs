//! Disjoint-set (union-find) partition over opaque elements.
//!
//! The partition is stored as an arena: a dense array of cells addressed by
//! integer handles, plus a map assigning each element a handle, since elements
//! are not intrinsically indexable. A cell holds either the handle of its
//! parent (non-negative) or the sentinel `-(rank + 1)` marking a root with the
//! encoded rank. `find_set` compresses the chain it traverses, which together
//! with union-by-rank gives amortized near-constant operations.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::DisjointSetError;

/// Sentinel stored for a freshly created root of rank 0.
const NEW_ROOT: isize = -1;

/// A dynamic partition of elements into disjoint components.
///
/// Elements enter the partition exactly once via [`DisjointSet::make_set`] and
/// are never removed; the backing array grows geometrically as elements are
/// admitted.
///
/// # Examples
/// ```
/// use warren_core::DisjointSet;
///
/// let mut partition = DisjointSet::new();
/// partition.make_set("a")?;
/// partition.make_set("b")?;
/// partition.make_set("c")?;
/// assert_eq!(partition.components(), 3);
///
/// partition.union(&"a", &"b")?;
/// assert_eq!(partition.find_set(&"a")?, partition.find_set(&"b")?);
/// assert_ne!(partition.find_set(&"a")?, partition.find_set(&"c")?);
/// assert_eq!(partition.components(), 2);
/// # Ok::<(), warren_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    cells: Vec<isize>,
    handles: HashMap<T, usize>,
    components: usize,
}

impl<T> DisjointSet<T> {
    /// Creates an empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            handles: HashMap::new(),
            components: 0,
        }
    }

    /// Returns the number of elements tracked by the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.cells.len() }

    /// Returns whether the partition tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> DisjointSet<T> {
    /// Returns whether `item` has been registered via [`DisjointSet::make_set`].
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.handles.contains_key(item)
    }

    /// Admits `item` as a new singleton component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::DuplicateElement`] when `item` is already
    /// tracked; the partition is left unchanged.
    pub fn make_set(&mut self, item: T) -> Result<(), DisjointSetError> {
        if self.handles.contains_key(&item) {
            return Err(DisjointSetError::DuplicateElement);
        }
        let handle = self.cells.len();
        self.cells.push(NEW_ROOT);
        self.handles.insert(item, handle);
        self.components += 1;
        Ok(())
    }

    /// Returns the canonical handle of the component containing `item`.
    ///
    /// Takes `&mut self` because the traversed parent chain is compressed to
    /// point directly at the discovered root. Compression never touches a
    /// root cell, so no rank changes.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when `item` was never
    /// registered.
    pub fn find_set(&mut self, item: &T) -> Result<usize, DisjointSetError> {
        let start = *self
            .handles
            .get(item)
            .ok_or(DisjointSetError::UnknownElement)?;
        Ok(self.find_root(start))
    }

    /// Merges the components containing `first` and `second`.
    ///
    /// Union-by-rank: the root of strictly smaller rank is attached under the
    /// root of strictly larger rank; on equal rank, `second`'s root is
    /// attached under `first`'s and the surviving rank increments. Returns
    /// the handle of the surviving root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when either element is
    /// untracked, and [`DisjointSetError::AlreadyUnioned`] when both already
    /// share a component. A failed union leaves the partition unchanged.
    pub fn union(&mut self, first: &T, second: &T) -> Result<usize, DisjointSetError> {
        let first_root = self.find_set(first)?;
        let second_root = self.find_set(second)?;
        if first_root == second_root {
            return Err(DisjointSetError::AlreadyUnioned { root: first_root });
        }

        let first_rank = decode_rank(self.cells[first_root]);
        let second_rank = decode_rank(self.cells[second_root]);

        let (root, child) = if first_rank >= second_rank {
            (first_root, second_root)
        } else {
            (second_root, first_root)
        };
        self.cells[child] = root as isize;
        if first_rank == second_rank {
            // one more negative step in the sentinel encodes rank + 1
            self.cells[root] -= 1;
        }
        self.components -= 1;
        Ok(root)
    }

    fn find_root(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.cells[root] >= 0 {
            root = self.cells[root] as usize;
        }

        let mut node = start;
        while self.cells[node] >= 0 {
            let parent = self.cells[node] as usize;
            self.cells[node] = root as isize;
            node = parent;
        }

        root
    }
}

/// Decodes the rank of a root cell from its `-(rank + 1)` sentinel.
fn decode_rank(cell: isize) -> isize {
    debug_assert!(cell < 0, "only root cells encode a rank");
    -cell - 1
}
