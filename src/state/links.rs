//! Link-list state for the dashboard editor and public page.
//!
//! DESIGN
//! ======
//! Local state is the source of truth for rendering. Every mutation applies
//! optimistically and returns whatever the caller needs to persist (changed
//! rows) or to roll back (a removal snapshot).
//!
//! Rollback policy is intentionally asymmetric: a failed single delete
//! restores the captured snapshot in its original slot, while a failed bulk
//! reorder keeps the new client-side order and surfaces a toast only, leaving
//! client and server divergent until the next reload. Downstream code relies
//! on the reorder side of this, so both halves are pinned by tests rather
//! than unified.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::net::types::Link;

/// Shared link-list state backed by the links table.
#[derive(Clone, Debug, Default)]
pub struct LinksState {
    /// Links in render order; positions are dense from 0 after any reorder.
    pub items: Vec<Link>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Snapshot captured by an optimistic removal, sufficient for full rollback.
#[derive(Clone, Debug)]
pub struct RemovedLink {
    pub link: Link,
    pub index: usize,
}

impl LinksState {
    /// Replace the whole list from a fetch, normalizing render order.
    pub fn set_all(&mut self, mut items: Vec<Link>) {
        items.sort_by_key(|l| l.position);
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Append a new link at the end, one past the current tail position.
    /// Deletes leave holes, so the list length is not a safe next position.
    pub fn append(&mut self, mut link: Link) -> Link {
        link.position = self.items.last().map_or(0, |l| l.position.saturating_add(1));
        self.items.push(link.clone());
        link
    }

    /// Apply an edit to one link by id. Returns whether a row matched.
    pub fn patch<F: FnOnce(&mut Link)>(&mut self, link_id: &str, edit: F) -> bool {
        match self.items.iter_mut().find(|l| l.id == link_id) {
            Some(link) => {
                edit(link);
                true
            }
            None => false,
        }
    }

    /// Move the link at `from` to `to` and renumber every position densely
    /// from 0. Returns the `(id, new_position)` pairs that changed, which the
    /// caller persists concurrently.
    pub fn reorder(&mut self, from: usize, to: usize) -> Vec<(String, i32)> {
        if from >= self.items.len() || to >= self.items.len() || from == to {
            return Vec::new();
        }
        let link = self.items.remove(from);
        self.items.insert(to, link);

        let mut changed = Vec::new();
        for (index, link) in self.items.iter_mut().enumerate() {
            let position = i32::try_from(index).unwrap_or(i32::MAX);
            if link.position != position {
                link.position = position;
                changed.push((link.id.clone(), position));
            }
        }
        changed
    }

    /// Optimistically remove a link, returning the snapshot needed to undo.
    pub fn remove(&mut self, link_id: &str) -> Option<RemovedLink> {
        let index = self.items.iter().position(|l| l.id == link_id)?;
        let link = self.items.remove(index);
        Some(RemovedLink { link, index })
    }

    /// Undo a failed delete: the link reappears in its original slot with its
    /// original position value.
    pub fn restore(&mut self, removed: RemovedLink) {
        let index = removed.index.min(self.items.len());
        self.items.insert(index, removed.link);
    }
}
