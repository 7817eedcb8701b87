//! Pair-substituting chain driving the pair-adjacent-violators scan.
//!
//! A doubly-linked sequence backed by an arena of indexed slots. Supports
//! iterating while replacing the pair of values either side of the cursor
//! with a single value, rewinding the cursor afterwards so a replacement
//! can cascade into further replacements with earlier values.
//!
//! ```text
//! before replacement:        after replacement:
//!         p   n                  p   n
//!     A   B   C   D          A   X   D
//!           |                  |
//! ```

use crate::regression::errors::RegressionError;

#[derive(Debug)]
struct Node<V> {
    value: V,
    previous: Option<usize>,
    next: Option<usize>,
}

/// Read-only view of the pair of values around the iteration cursor. The
/// cursor sits between two elements, or before the first element, in
/// which case `previous_value` is `None`.
#[derive(Debug)]
pub struct Cursor<'a, V> {
    previous: Option<&'a V>,
    current: &'a V,
}

impl<'a, V> Cursor<'a, V> {
    pub fn previous_value(&self) -> Option<&'a V> {
        self.previous
    }

    pub fn next_value(&self) -> &'a V {
        self.current
    }
}

/// Arena-backed doubly-linked sequence. Removal unlinks a slot index and
/// leaves the slot as an unreachable tombstone; slots are never reused
/// within one scan, so indices held by live nodes stay valid throughout.
#[derive(Debug)]
pub struct Chain<V> {
    nodes: Vec<Node<V>>,
    head: usize,
}

impl<V> Chain<V> {
    /// Builds a chain over `values` in order, one slot per value.
    ///
    /// # Errors
    /// └ [`RegressionError::EmptyInput`] - `values` is empty.
    pub fn from_values(values: Vec<V>) -> Result<Self, RegressionError> {
        if values.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        let n = values.len();
        let nodes = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                previous: if i > 0 { Some(i - 1) } else { None },
                next: if i + 1 < n { Some(i + 1) } else { None },
            })
            .collect();

        Ok(Self { nodes, head: 0 })
    }

    /// Walks the chain once, invoking `handler` at each element.
    ///
    /// If the handler returns a replacement value, the current element is
    /// removed, its predecessor's value is overwritten with the
    /// replacement, and the cursor is repositioned before the predecessor
    /// so the same position may be visited again. Otherwise the cursor
    /// advances to the next element.
    ///
    /// # Errors
    /// └ [`RegressionError::ReplaceAtHead`] - the handler returned a
    ///   replacement at the head of the chain, where there is no
    ///   predecessor to merge into.
    pub fn iterate<F>(&mut self, mut handler: F) -> Result<(), RegressionError>
    where
        F: FnMut(Cursor<'_, V>) -> Option<V>,
    {
        let mut at = Some(self.head);
        while let Some(index) = at {
            let previous = self.nodes[index].previous;
            let replacement = handler(Cursor {
                previous: previous.map(|p| &self.nodes[p].value),
                current: &self.nodes[index].value,
            });

            match replacement {
                Some(value) => {
                    let p = match previous {
                        Some(p) => p,
                        None => return Err(RegressionError::ReplaceAtHead),
                    };
                    let next = self.nodes[index].next;
                    self.nodes[p].value = value;
                    self.nodes[p].next = next;
                    if let Some(n) = next {
                        self.nodes[n].previous = Some(p);
                    }
                    at = Some(p);
                }
                None => at = self.nodes[index].next,
            }
        }
        Ok(())
    }

    /// Flattens the live chain back into an ordered list.
    pub fn to_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut values = Vec::new();
        let mut at = Some(self.head);
        while let Some(index) = at {
            values.push(self.nodes[index].value.clone());
            at = self.nodes[index].next;
        }
        values
    }

    /// Checks that `previous.next` points back at every non-head element.
    /// Verification only; should never return anything but `true`.
    pub fn check_integrity(&self) -> bool {
        let mut at = Some(self.head);
        while let Some(index) = at {
            if let Some(p) = self.nodes[index].previous {
                if self.nodes[p].next != Some(index) {
                    return false;
                }
            }
            at = self.nodes[index].next;
        }
        true
    }
}
