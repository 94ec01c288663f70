use std::sync::Arc;

use parking_lot::RwLock;

use crate::iterators::checked_iterator::CheckedIterator;
use crate::iterators::reverse_iterator::ReverseUserIterator;
use crate::iterators::vec_iterator::VecUserIterator;
use crate::iterators::{UserIterator, Users};
use crate::user::User;

/// Something that owns records and can hand out cursors over them, without
/// telling the caller how the records are stored.
pub trait Aggregator {
    type Iter: UserIterator;

    /// Create a new iterator positioned on the first record.
    fn create_iterator(&self) -> Self::Iter;
}

/// An immutable snapshot of the records, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct UserList {
    users: Vec<User>,
    /// Bumped every time a new snapshot is published
    version: u64,
}

impl UserList {
    pub(crate) fn len(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&User> {
        self.users.get(idx)
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }
}

/// An ordered collection of users.
///
/// Cloning the handle is cheap and every clone sees the same records. Iterators
/// pin the snapshot that was current when they were created: records pushed
/// afterwards only show up in iterators created later.
#[derive(Clone, Debug, Default)]
pub struct UserCollection {
    inner: Arc<RwLock<Arc<UserList>>>,
}

impl UserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_list(UserList {
            users: Vec::with_capacity(capacity),
            version: 0,
        })
    }

    fn from_list(list: UserList) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(list))),
        }
    }

    fn snapshot(&self) -> Arc<UserList> {
        self.inner.read().clone()
    }

    /// Append a user at the end of the collection.
    pub fn push(&self, user: User) {
        let mut guard = self.inner.write();
        // Copies the records only while some iterator still holds the old snapshot.
        let list = Arc::make_mut(&mut *guard);
        list.users.push(user);
        list.version += 1;
        log::debug!(
            "published snapshot v{} with {} users",
            list.version,
            list.users.len()
        );
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.inner.read().version()
    }

    /// Create an iterator that visits the users from the last to the first.
    pub fn create_reverse_iterator(&self) -> ReverseUserIterator {
        ReverseUserIterator::create_and_seek_to_last(self.snapshot())
    }

    /// Create a forward iterator whose `try_*` methods fail once the collection is modified.
    pub fn create_checked_iterator(&self) -> CheckedIterator<VecUserIterator> {
        let users = self.snapshot();
        let version = users.version();
        CheckedIterator::new(
            VecUserIterator::create_and_seek_to_first(users),
            self.clone(),
            version,
        )
    }

    /// Create a reverse iterator whose `try_*` methods fail once the collection is modified.
    pub fn create_checked_reverse_iterator(&self) -> CheckedIterator<ReverseUserIterator> {
        let users = self.snapshot();
        let version = users.version();
        CheckedIterator::new(
            ReverseUserIterator::create_and_seek_to_last(users),
            self.clone(),
            version,
        )
    }

    pub fn iter(&self) -> Users<VecUserIterator> {
        self.create_iterator().into_users()
    }
}

impl Aggregator for UserCollection {
    type Iter = VecUserIterator;

    fn create_iterator(&self) -> VecUserIterator {
        VecUserIterator::create_and_seek_to_first(self.snapshot())
    }
}

impl From<Vec<User>> for UserCollection {
    fn from(users: Vec<User>) -> Self {
        Self::from_list(UserList { users, version: 0 })
    }
}

impl FromIterator<User> for UserCollection {
    fn from_iter<T: IntoIterator<Item = User>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
