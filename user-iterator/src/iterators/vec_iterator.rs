use std::sync::Arc;

use super::UserIterator;
use crate::collection::UserList;
use crate::user::User;

/// Iterates on a snapshot of a collection, in insertion order.
pub struct VecUserIterator {
    /// The snapshot, shared with the collection that created the iterator
    users: Arc<UserList>,
    /// Current index, in range of [0, len]; `len` means the iterator is exhausted
    idx: usize,
}

impl VecUserIterator {
    /// Creates an iterator positioned on the first record.
    pub(crate) fn create_and_seek_to_first(users: Arc<UserList>) -> Self {
        log::trace!(
            "forward iterator over snapshot v{} ({} users)",
            users.version(),
            users.len()
        );
        Self { users, idx: 0 }
    }

    /// Seeks back to the first record of the same snapshot.
    pub fn rewind(&mut self) {
        self.idx = 0;
    }

    pub fn position(&self) -> usize {
        self.idx
    }

    /// Number of records the cursor has not passed yet, the current one included.
    pub fn remaining(&self) -> usize {
        self.users.len() - self.idx
    }
}

impl UserIterator for VecUserIterator {
    fn has_next(&self) -> bool {
        self.idx < self.users.len()
    }

    fn next(&mut self) {
        if self.has_next() {
            self.idx += 1;
        }
    }

    fn current(&self) -> Option<&User> {
        if self.has_next() {
            self.users.get(self.idx)
        } else {
            None
        }
    }
}
