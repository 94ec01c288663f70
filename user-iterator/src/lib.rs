pub mod collection;
pub mod iterators;
pub mod user;

pub use collection::{Aggregator, UserCollection};
pub use iterators::{UserIterator, Users};
pub use user::User;
