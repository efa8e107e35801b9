use std::fs;
use std::path::Path;

use ron::ser::{to_writer_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::error::{FixtureError, Rejection};
use crate::graph::network::Network;
use crate::graph::user::DEFAULT_FOLLOWEE_CAPACITY;

/// A network written down as RON: its capacities and, per user, who they
/// follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFixture {
    pub max_users: usize,
    #[serde(default)]
    pub max_followees: Option<usize>,
    #[serde(default)]
    pub users: Vec<FixtureUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureUser {
    pub name: String,
    #[serde(default)]
    pub follows: Vec<String>,
}

/// A fixture entry the network refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refused {
    User {
        name: String,
        reason: Rejection,
    },
    Follow {
        follower: String,
        followee: String,
        reason: Rejection,
    },
}

impl NetworkFixture {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading fixture");
        Self::from_ron(&fs::read_to_string(path)?)
    }

    pub fn from_ron(source: &str) -> Result<Self, FixtureError> {
        let fixture: Self = ron::from_str(source)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Snapshot of `network`, in the shape [`NetworkFixture::load`] reads back.
    #[must_use]
    pub fn from_network(network: &Network) -> Self {
        Self {
            max_users: network.capacity(),
            max_followees: Some(network.followee_capacity()),
            users: network
                .users()
                .map(|user| FixtureUser {
                    name: user.name().to_string(),
                    follows: user.followees().iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FixtureError> {
        let path = path.as_ref();
        to_writer_pretty(fs::File::create(path)?, self, PrettyConfig::default())?;
        debug!(path = %path.display(), "fixture written");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.max_users == 0 {
            return Err(FixtureError::InvalidCapacity { field: "max_users" });
        }
        if self.max_followees == Some(0) {
            return Err(FixtureError::InvalidCapacity {
                field: "max_followees",
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn followee_capacity(&self) -> usize {
        self.max_followees.unwrap_or(DEFAULT_FOLLOWEE_CAPACITY)
    }

    /// `(follower, followee)` pairs in document order.
    pub fn follow_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.users.iter().flat_map(|user| {
            user.follows
                .iter()
                .map(move |followee| (user.name.as_str(), followee.as_str()))
        })
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.users.iter().map(|user| user.follows.len()).sum()
    }

    /// Every listed user, nobody following anybody yet.
    #[must_use]
    pub fn seed_network(&self) -> (Network, Vec<Refused>) {
        let mut network = Network::with_followee_capacity(self.max_users, self.followee_capacity());
        let refused = self
            .users
            .iter()
            .filter_map(|user| {
                network
                    .try_add_user(&user.name)
                    .err()
                    .map(|reason| Refused::User {
                        name: user.name.clone(),
                        reason,
                    })
            })
            .collect();
        (network, refused)
    }

    /// Seeds the network and applies every follow edge. Entries the network
    /// refuses are returned rather than aborting the build.
    #[must_use]
    pub fn build(&self) -> (Network, Vec<Refused>) {
        let (mut network, mut refused) = self.seed_network();
        for (follower, followee) in self.follow_edges() {
            if let Err(reason) = network.try_add_followee(follower, followee) {
                refused.push(Refused::Follow {
                    follower: follower.to_string(),
                    followee: followee.to_string(),
                    reason,
                });
            }
        }
        (network, refused)
    }
}
