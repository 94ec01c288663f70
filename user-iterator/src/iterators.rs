pub mod checked_iterator;
pub mod filter_iterator;
pub mod reverse_iterator;
pub mod vec_iterator;

use std::iter::FusedIterator;

use crate::user::User;

/// A forward-only cursor over the records of a collection.
///
/// The cursor never fails: once it runs past the last record, `has_next` stays
/// false, `next` does nothing and `current` returns `None`.
pub trait UserIterator {
    /// Check if there is a record under the cursor.
    fn has_next(&self) -> bool;

    /// Move to the next position.
    fn next(&mut self);

    /// Get the record under the cursor.
    fn current(&self) -> Option<&User>;

    /// Turn the cursor into a std iterator yielding the remaining records.
    fn into_users(self) -> Users<Self>
    where
        Self: Sized,
    {
        Users { iter: self }
    }
}

/// Bridges a [`UserIterator`] into [`Iterator`], so a cursor can drive a `for` loop.
pub struct Users<I: UserIterator> {
    iter: I,
}

impl<I: UserIterator> Users<I> {
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: UserIterator> Iterator for Users<I> {
    type Item = User;

    fn next(&mut self) -> Option<User> {
        let user = self.iter.current().cloned();
        self.iter.next();
        user
    }
}

impl<I: UserIterator> FusedIterator for Users<I> {}
