use anyhow::{bail, Result};

use super::UserIterator;
use crate::collection::UserCollection;
use crate::user::User;

/// A wrapper that refuses to keep traversing once the collection it came from
/// has been modified.
///
/// The wrapped iterator still reads its own snapshot, so the unchecked
/// [`UserIterator`] methods keep working; the `try_*` methods fail fast instead.
pub struct CheckedIterator<I: UserIterator> {
    iter: I,
    collection: UserCollection,
    /// Collection version the snapshot of `iter` was taken at
    version: u64,
}

impl<I: UserIterator> CheckedIterator<I> {
    pub(crate) fn new(iter: I, collection: UserCollection, version: u64) -> Self {
        Self {
            iter,
            collection,
            version,
        }
    }

    /// Returns true if the collection has changed since this iterator was created.
    pub fn is_stale(&self) -> bool {
        self.collection.version() != self.version
    }

    fn check(&self) -> Result<()> {
        let current = self.collection.version();
        if current != self.version {
            log::warn!(
                "traversal of snapshot v{} aborted, collection is at v{}",
                self.version,
                current
            );
            bail!(
                "collection modified during traversal (expected version {}, found {})",
                self.version,
                current
            );
        }
        Ok(())
    }

    pub fn try_has_next(&self) -> Result<bool> {
        self.check()?;
        Ok(self.iter.has_next())
    }

    pub fn try_next(&mut self) -> Result<()> {
        self.check()?;
        self.iter.next();
        Ok(())
    }

    pub fn try_current(&self) -> Result<Option<&User>> {
        self.check()?;
        Ok(self.iter.current())
    }
}

impl<I: UserIterator> UserIterator for CheckedIterator<I> {
    fn has_next(&self) -> bool {
        self.iter.has_next()
    }

    fn next(&mut self) {
        self.iter.next()
    }

    fn current(&self) -> Option<&User> {
        self.iter.current()
    }
}
