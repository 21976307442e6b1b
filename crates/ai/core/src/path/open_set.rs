//! Indexed binary min-heap over path nodes.
//!
//! Nodes remember their slot in the heap, so a node whose cost drops can be
//! sifted into place instead of being pushed a second time.

use super::PathNode;

#[derive(Default)]
pub(super) struct OpenSet {
    heap: Vec<usize>,
}

impl OpenSet {
    pub(super) fn push(&mut self, nodes: &mut [PathNode], node: usize) {
        let slot = self.heap.len();
        self.heap.push(node);
        nodes[node].heap_index = Some(slot);
        self.sift_up(nodes, slot);
    }

    pub(super) fn pop(&mut self, nodes: &mut [PathNode]) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(nodes, 0, last);
        let node = self.heap.pop()?;
        nodes[node].heap_index = None;
        if !self.heap.is_empty() {
            self.sift_down(nodes, 0);
        }
        Some(node)
    }

    /// Restores heap order after `node`'s total cost decreased.
    pub(super) fn decrease(&mut self, nodes: &mut [PathNode], node: usize) {
        if let Some(slot) = nodes[node].heap_index {
            self.sift_up(nodes, slot);
        }
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }

    fn sift_up(&mut self, nodes: &mut [PathNode], mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if nodes[self.heap[slot]].f() >= nodes[self.heap[parent]].f() {
                break;
            }
            self.swap(nodes, slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, nodes: &mut [PathNode], mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = slot * 2 + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && nodes[self.heap[left]].f() < nodes[self.heap[smallest]].f() {
                smallest = left;
            }
            if right < len && nodes[self.heap[right]].f() < nodes[self.heap[smallest]].f() {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(nodes, slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, nodes: &mut [PathNode], a: usize, b: usize) {
        self.heap.swap(a, b);
        nodes[self.heap[a]].heap_index = Some(a);
        nodes[self.heap[b]].heap_index = Some(b);
    }
}
