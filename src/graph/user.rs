use std::fmt;

use crate::graph::error::Rejection;
use crate::graph::name::UserName;

/// How many users a single user may follow unless told otherwise.
pub const DEFAULT_FOLLOWEE_CAPACITY: usize = 10;

/// A member of the network and the names it follows, in the order they were
/// followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: UserName,
    followees: Vec<UserName>,
    capacity: usize,
}

impl User {
    pub fn new(name: &impl ToString) -> Self {
        Self::with_capacity(name, DEFAULT_FOLLOWEE_CAPACITY)
    }

    pub fn with_capacity(name: &impl ToString, capacity: usize) -> Self {
        Self {
            name: UserName::new(name),
            followees: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn name(&self) -> &UserName {
        &self.name
    }

    #[must_use]
    pub fn followees(&self) -> &[UserName] {
        &self.followees
    }

    #[must_use]
    pub fn followee_count(&self) -> usize {
        self.followees.len()
    }

    #[must_use]
    pub fn followee_capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn follows(&self, name: &str) -> bool {
        self.followees.iter().any(|followee| followee.matches(name))
    }

    pub fn add_followee(&mut self, name: &str) -> bool {
        self.try_add_followee(name).is_ok()
    }

    /// Appends `name` to the follow list.
    ///
    /// Refuses when the list is full, when `name` is already followed, or when
    /// `name` is this user.
    pub fn try_add_followee(&mut self, name: &str) -> Result<(), Rejection> {
        if self.name.matches(name) {
            return Err(Rejection::SelfFollow {
                name: self.name.to_string(),
            });
        }
        if self.follows(name) {
            return Err(Rejection::AlreadyFollowing {
                follower: self.name.to_string(),
                followee: name.to_string(),
            });
        }
        if self.followees.len() >= self.capacity {
            return Err(Rejection::AtCapacity {
                capacity: self.capacity,
            });
        }

        self.followees.push(UserName::new(&name));
        Ok(())
    }

    /// Number of names followed by both users.
    #[must_use]
    pub fn count_mutual(&self, other: &Self) -> usize {
        self.followees
            .iter()
            .filter(|followee| other.follows(followee.as_str()))
            .count()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.name)?;
        for followee in &self.followees {
            write!(f, " {followee}")?;
        }
        Ok(())
    }
}
