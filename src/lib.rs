pub mod graph {
    pub mod error;
    pub mod fixture;
    pub mod macros;
    pub mod name;
    pub mod network;
    pub mod user;
    pub mod utils;
}

pub use graph::error::{FixtureError, Rejection};
pub use graph::fixture::{FixtureUser, NetworkFixture, Refused};
pub use graph::name::UserName;
pub use graph::network::Network;
pub use graph::user::{User, DEFAULT_FOLLOWEE_CAPACITY};
