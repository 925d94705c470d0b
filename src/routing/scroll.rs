//! Scroll bookkeeping for history navigation.
//!
//! DESIGN
//! ======
//! The router swaps views but leaves the viewport alone. `ScrollMemory` keeps
//! the last offset seen on each path. A location change produced by
//! `popstate` restores that offset; any other change scrolls to top.
//!
//! A popstate is tagged with the path it produced and is consumed by the next
//! location change, whatever that change is. A pop that only moves the query
//! or hash therefore never carries over to a later link click.
//!
//! Between a route change and the scroll being applied to the mounted view,
//! offsets reported by the browser still describe the outgoing page; they are
//! ignored until `settle`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::collections::HashMap;

/// Where the viewport should go after a route change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Top,
    Restore(f64),
}

#[derive(Clone, Debug)]
pub struct ScrollMemory {
    offsets: HashMap<String, f64>,
    current: String,
    popped: Option<String>,
    settled: bool,
}

impl ScrollMemory {
    #[must_use]
    pub fn new(initial_path: &str) -> Self {
        Self { offsets: HashMap::new(), current: initial_path.to_owned(), popped: None, settled: true }
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Remember the viewport offset for the current path.
    pub fn record(&mut self, scroll_y: f64) {
        if self.settled {
            self.offsets.insert(self.current.clone(), scroll_y);
        }
    }

    /// A `popstate` landed on `path`.
    pub fn popstate(&mut self, path: &str) {
        self.popped = Some(path.to_owned());
    }

    /// The location changed. Returns the scroll to apply once the new view is
    /// mounted, or `None` when only the query or hash moved.
    pub fn arrive(&mut self, path: &str) -> Option<ScrollTarget> {
        let popped = self.popped.take();
        if self.current == path {
            return None;
        }
        self.current = path.to_owned();
        self.settled = false;
        if popped.as_deref() == Some(path) {
            Some(ScrollTarget::Restore(self.offsets.get(path).copied().unwrap_or(0.0)))
        } else {
            self.offsets.remove(path);
            Some(ScrollTarget::Top)
        }
    }

    /// The target from `arrive` has been applied; resume recording.
    pub fn settle(&mut self) {
        self.settled = true;
    }
}
