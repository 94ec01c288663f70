use super::UserIterator;
use crate::user::User;

/// Wraps an iterator and only exposes the records accepted by `predicate`.
///
/// The wrapper always rests on a matching record or on the exhausted state, so
/// `has_next` and `current` can be forwarded to the inner iterator unchanged.
pub struct FilterIterator<I, P>
where
    I: UserIterator,
    P: Fn(&User) -> bool,
{
    iter: I,
    predicate: P,
}

impl<I, P> FilterIterator<I, P>
where
    I: UserIterator,
    P: Fn(&User) -> bool,
{
    /// Creates the wrapper and skips to the first matching record.
    pub fn new(iter: I, predicate: P) -> Self {
        let mut this = Self { iter, predicate };
        this.skip_unmatched();
        this
    }

    pub fn into_inner(self) -> I {
        self.iter
    }

    fn matches(&self) -> bool {
        self.iter.current().is_some_and(|user| (self.predicate)(user))
    }

    fn skip_unmatched(&mut self) {
        while self.iter.has_next() && !self.matches() {
            self.iter.next();
        }
    }
}

impl<I, P> UserIterator for FilterIterator<I, P>
where
    I: UserIterator,
    P: Fn(&User) -> bool,
{
    fn has_next(&self) -> bool {
        self.iter.has_next()
    }

    fn next(&mut self) {
        if !self.iter.has_next() {
            return;
        }
        self.iter.next();
        self.skip_unmatched();
    }

    fn current(&self) -> Option<&User> {
        self.iter.current()
    }
}
