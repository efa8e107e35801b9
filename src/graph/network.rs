use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::graph::error::Rejection;
use crate::graph::name::UserName;
use crate::graph::user::{User, DEFAULT_FOLLOWEE_CAPACITY};

/// A bounded set of users and who follows whom.
///
/// Users are kept in the order they joined; that order decides ties in
/// [`Network::recommend_who_to_follow`] and [`Network::most_popular_user`].
///
/// A `Network` has no interior synchronization. Callers mutating it from more
/// than one thread must wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct Network {
    users: Vec<User>,
    index: HashMap<UserName, usize>,
    capacity: usize,
    followee_capacity: usize,
}

impl Network {
    #[must_use]
    pub fn new(max_users: usize) -> Self {
        Self::with_followee_capacity(max_users, DEFAULT_FOLLOWEE_CAPACITY)
    }

    #[must_use]
    pub fn with_followee_capacity(max_users: usize, max_followees: usize) -> Self {
        Self {
            users: Vec::with_capacity(max_users),
            index: HashMap::with_capacity(max_users),
            capacity: max_users,
            followee_capacity: max_followees,
        }
    }

    /// A network holding "Foo", "Bar" and "Baz", none of whom follow anyone.
    ///
    /// Users that do not fit in `max_users` are left out.
    #[must_use]
    pub fn getting_started(max_users: usize) -> Self {
        let mut network = Self::new(max_users);
        for name in ["Foo", "Bar", "Baz"] {
            network.add_user(name);
        }
        network
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn followee_capacity(&self) -> usize {
        self.followee_capacity
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    #[must_use]
    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.position(name).map(|idx| &self.users[idx])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&UserName::from(name)).copied()
    }

    pub fn add_user(&mut self, name: &str) -> bool {
        self.try_add_user(name).is_ok()
    }

    pub fn try_add_user(&mut self, name: &str) -> Result<(), Rejection> {
        let result = self.insert_user(name);
        match &result {
            Ok(()) => debug!(user = name, "user added"),
            Err(rejection) => debug!(user = name, %rejection, "user refused"),
        }
        result
    }

    fn insert_user(&mut self, name: &str) -> Result<(), Rejection> {
        if self.users.len() >= self.capacity {
            return Err(Rejection::AtCapacity {
                capacity: self.capacity,
            });
        }
        let key = UserName::from(name);
        if self.index.contains_key(&key) {
            return Err(Rejection::DuplicateUser {
                name: name.to_string(),
            });
        }

        self.index.insert(key, self.users.len());
        self.users
            .push(User::with_capacity(&name, self.followee_capacity));
        Ok(())
    }

    /// Makes `follower` follow `followee`.
    pub fn add_followee(&mut self, follower: &str, followee: &str) -> bool {
        self.try_add_followee(follower, followee).is_ok()
    }

    /// Makes `follower` follow `followee`, reporting why it could not.
    ///
    /// Both names must belong to the network. The followee is recorded under
    /// the spelling it joined with.
    pub fn try_add_followee(&mut self, follower: &str, followee: &str) -> Result<(), Rejection> {
        let result = self.link(follower, followee);
        match &result {
            Ok(()) => debug!(follower, followee, "follow added"),
            Err(rejection) => debug!(follower, followee, %rejection, "follow refused"),
        }
        result
    }

    fn link(&mut self, follower: &str, followee: &str) -> Result<(), Rejection> {
        let unknown = |name: &str| Rejection::UnknownUser {
            name: name.to_string(),
        };
        let follower_idx = self.position(follower).ok_or_else(|| unknown(follower))?;
        let followee_idx = self.position(followee).ok_or_else(|| unknown(followee))?;

        let followee = self.users[followee_idx].name().to_string();
        self.users[follower_idx].try_add_followee(&followee)
    }

    /// The user sharing the most followees with `name`, among users `name`
    /// does not already follow.
    ///
    /// Returns `None` for an unknown user, or when nobody shares a followee.
    #[must_use]
    pub fn recommend_who_to_follow(&self, name: &str) -> Option<&str> {
        let subject = self.get_user(name)?;

        let mut best: Option<(&User, usize)> = None;
        for candidate in &self.users {
            if candidate.name() == subject.name() || subject.follows(candidate.name().as_str()) {
                continue;
            }
            let mutual = subject.count_mutual(candidate);
            trace!(subject = %subject.name(), candidate = %candidate.name(), mutual);
            if mutual > best.map_or(0, |(_, score)| score) {
                best = Some((candidate, mutual));
            }
        }

        best.map(|(user, _)| user.name().as_str())
    }

    /// The user followed by the most other users, or `None` if nobody follows
    /// anybody.
    #[must_use]
    pub fn most_popular_user(&self) -> Option<&str> {
        let mut best: Option<(&User, usize)> = None;
        for user in &self.users {
            let followers = self.follower_count(user.name().as_str());
            trace!(user = %user.name(), followers);
            if followers > best.map_or(0, |(_, score)| score) {
                best = Some((user, followers));
            }
        }

        best.map(|(user, _)| user.name().as_str())
    }

    fn follower_count(&self, name: &str) -> usize {
        self.users.iter().filter(|user| user.follows(name)).count()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Network:")?;
        for user in &self.users {
            write!(f, "\n{user}")?;
        }
        Ok(())
    }
}
