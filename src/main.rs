use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use follow_insights::graph::utils::{follow_pb, show_edge};
use follow_insights::{time_it, Network, NetworkFixture, Refused};
use indicatif::ProgressIterator;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const GETTING_STARTED_CAPACITY: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "follow-insights")]
#[command(about = "Who to follow, and who everyone follows")]
struct Cli {
    /// RON network fixture; without one the Foo/Bar/Baz starter network is used
    #[arg(short, long, env = "FOLLOW_INSIGHTS_FIXTURE")]
    fixture: Option<PathBuf>,

    /// Overrides the fixture's user capacity
    #[arg(long, env = "FOLLOW_INSIGHTS_MAX_USERS")]
    max_users: Option<usize>,

    /// Overrides the fixture's per-user followee capacity
    #[arg(long, env = "FOLLOW_INSIGHTS_MAX_FOLLOWEES")]
    max_followees: Option<usize>,

    /// Users to recommend for; every user when omitted
    #[arg(short, long)]
    recommend: Vec<String>,

    /// Write the resulting network as RON
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let start = Instant::now();
    let cli = Cli::parse();

    let mut fixture = match &cli.fixture {
        Some(path) => time_it!(at once | "loading fixture" => NetworkFixture::load(path)?),
        None => NetworkFixture::from_network(&Network::getting_started(GETTING_STARTED_CAPACITY)),
    };
    if let Some(max_users) = cli.max_users {
        fixture.max_users = max_users;
    }
    if let Some(max_followees) = cli.max_followees {
        fixture.max_followees = Some(max_followees);
    }
    fixture.validate()?;

    let (mut network, refused) = fixture.seed_network();
    report(&refused);

    let pb = follow_pb(fixture.edge_count() as u64)?;
    let refused = time_it!("applying follows" => fixture
        .follow_edges()
        .progress_with(pb.clone())
        .filter_map(|(follower, followee)| {
            show_edge(&pb, follower, followee);
            network
                .try_add_followee(follower, followee)
                .err()
                .map(|reason| Refused::Follow {
                    follower: follower.to_string(),
                    followee: followee.to_string(),
                    reason,
                })
        })
        .collect::<Vec<_>>());
    report(&refused);

    println!("{network}");

    let subjects = if cli.recommend.is_empty() {
        network.users().map(|user| user.name().to_string()).collect()
    } else {
        cli.recommend.clone()
    };
    for subject in &subjects {
        match network.recommend_who_to_follow(subject) {
            Some(recommended) => println!("{subject} should follow {recommended}"),
            None => println!("no recommendation for {subject}"),
        }
    }

    match network.most_popular_user() {
        Some(popular) => println!("most popular: {popular}"),
        None => println!("nobody follows anybody"),
    }

    if let Some(path) = &cli.dump {
        time_it!("writing network snapshot" => NetworkFixture::from_network(&network).save(path)?);
    }

    info!(elapsed = ?start.elapsed(), "total run time");
    Ok(())
}

fn report(refused: &[Refused]) {
    for entry in refused {
        match entry {
            Refused::User { name, reason } => warn!(user = %name, %reason, "user not added"),
            Refused::Follow {
                follower,
                followee,
                reason,
            } => warn!(%follower, %followee, %reason, "follow not added"),
        }
    }
}
