use std::sync::Arc;

use super::UserIterator;
use crate::collection::UserList;
use crate::user::User;

/// Iterates on a snapshot of a collection from the last record to the first.
pub struct ReverseUserIterator {
    users: Arc<UserList>,
    /// Records left to visit; the current one is at `left - 1`, 0 means exhausted
    left: usize,
}

impl ReverseUserIterator {
    pub(crate) fn create_and_seek_to_last(users: Arc<UserList>) -> Self {
        log::trace!(
            "reverse iterator over snapshot v{} ({} users)",
            users.version(),
            users.len()
        );
        let left = users.len();
        Self { users, left }
    }

    pub fn rewind(&mut self) {
        self.left = self.users.len();
    }

    pub fn remaining(&self) -> usize {
        self.left
    }
}

impl UserIterator for ReverseUserIterator {
    fn has_next(&self) -> bool {
        self.left > 0
    }

    fn next(&mut self) {
        if self.has_next() {
            self.left -= 1;
        }
    }

    fn current(&self) -> Option<&User> {
        if self.has_next() {
            self.users.get(self.left - 1)
        } else {
            None
        }
    }
}
