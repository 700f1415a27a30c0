//! Fixed-capacity traversal containers
//!
//! Both containers allocate their full capacity up front and never grow:
//! pushing past capacity or popping from an empty container is an internal
//! invariant violation reported as a fatal error.

use crate::error::{HypergraphError, Result};
use crate::graph::types::Node;

/// Allocate a vector of `len` copies of `value`, reporting failure instead of aborting
pub fn alloc_filled<T: Clone>(buffer: &'static str, len: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| HypergraphError::allocation(buffer, len))?;
    v.resize(len, value);
    Ok(v)
}

/// Collect the first `len` items of `items` into exactly-sized storage
pub fn alloc_collect<T>(
    buffer: &'static str,
    len: usize,
    items: impl Iterator<Item = T>,
) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| HypergraphError::allocation(buffer, len))?;
    v.extend(items.take(len));
    Ok(v)
}

/// LIFO stack of node ids with a fixed capacity
#[derive(Debug)]
pub struct BoundedStack {
    sites: Vec<Node>,
    capacity: usize,
}

impl BoundedStack {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut sites = Vec::new();
        sites
            .try_reserve_exact(capacity)
            .map_err(|_| HypergraphError::allocation("stack", capacity))?;
        Ok(Self { sites, capacity })
    }

    pub fn push(&mut self, site: Node) -> Result<()> {
        if self.sites.len() == self.capacity {
            return Err(HypergraphError::CapacityExceeded {
                container: "stack",
                capacity: self.capacity,
            });
        }
        self.sites.push(site);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Node> {
        self.sites
            .pop()
            .ok_or(HypergraphError::Underflow { container: "stack" })
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Circular FIFO queue of node ids with a fixed capacity.
///
/// Emptiness and fullness are tracked by an explicit length, since the read
/// and write cursors coincide in both states.
#[derive(Debug)]
pub struct BoundedQueue {
    sites: Vec<Node>,
    read_idx: usize,
    write_idx: usize,
    len: usize,
}

impl BoundedQueue {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            sites: alloc_filled("queue", capacity, 0)?,
            read_idx: 0,
            write_idx: 0,
            len: 0,
        })
    }

    pub fn enqueue(&mut self, site: Node) -> Result<()> {
        if self.len == self.sites.len() {
            return Err(HypergraphError::CapacityExceeded {
                container: "queue",
                capacity: self.sites.len(),
            });
        }
        self.sites[self.write_idx] = site;
        self.write_idx = (self.write_idx + 1) % self.sites.len();
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<Node> {
        if self.len == 0 {
            return Err(HypergraphError::Underflow { container: "queue" });
        }
        let site = self.sites[self.read_idx];
        self.read_idx = (self.read_idx + 1) % self.sites.len();
        self.len -= 1;
        Ok(site)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.sites.len()
    }
}
