use follow_insights::{Network, Rejection};
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,4}", 0..16)
}

fn edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..8, 0usize..8), 0..40)
}

fn build(names: &[String], edges: &[(usize, usize)]) -> Network {
    let mut network = Network::with_followee_capacity(8, 4);
    for name in names {
        network.add_user(name);
    }
    let joined: Vec<String> = network.users().map(|u| u.name().to_string()).collect();
    if !joined.is_empty() {
        for (a, b) in edges {
            network.add_followee(&joined[a % joined.len()], &joined[b % joined.len()]);
        }
    }
    network
}

proptest! {
    #[test]
    fn user_count_never_exceeds_capacity(names in names()) {
        let mut network = Network::new(5);
        for name in &names {
            let before = network.user_count();
            let added = network.add_user(name);
            prop_assert!(network.user_count() <= network.capacity());
            if before == network.capacity() {
                prop_assert!(!added);
                prop_assert_eq!(network.user_count(), before);
            }
        }
    }

    #[test]
    fn case_variants_are_duplicates(name in "[a-z]{1,8}") {
        let mut network = Network::new(5);
        prop_assert!(network.add_user(&name));
        prop_assert_eq!(
            network.try_add_user(&name.to_uppercase()),
            Err(Rejection::DuplicateUser { name: name.to_uppercase() })
        );
        prop_assert_eq!(network.user_count(), 1);
    }

    #[test]
    fn self_follow_always_fails(names in names(), pick in 0usize..16) {
        let mut network = build(&names, &[]);
        let name = names.get(pick).cloned().unwrap_or_else(|| "Nobody".to_string());
        prop_assert!(!network.add_followee(&name, &name));
    }

    #[test]
    fn followees_stay_unique_and_bounded(names in names(), edges in edges()) {
        let network = build(&names, &edges);
        for user in network.users() {
            prop_assert!(user.followee_count() <= user.followee_capacity());
            prop_assert!(!user.follows(user.name().as_str()));
            for (i, a) in user.followees().iter().enumerate() {
                prop_assert!(!user.followees()[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn mutual_count_is_symmetric(names in names(), edges in edges()) {
        let network = build(&names, &edges);
        for a in network.users() {
            for b in network.users() {
                prop_assert_eq!(a.count_mutual(b), b.count_mutual(a));
            }
        }
    }

    #[test]
    fn recommendation_is_never_self_or_followed(names in names(), edges in edges()) {
        let network = build(&names, &edges);
        for user in network.users() {
            if let Some(recommended) = network.recommend_who_to_follow(user.name().as_str()) {
                prop_assert!(!user.name().matches(recommended));
                prop_assert!(!user.follows(recommended));
                let candidate = network.get_user(recommended).unwrap();
                prop_assert!(user.count_mutual(candidate) > 0);
            }
        }
    }

    #[test]
    fn rendering_has_a_line_per_user(names in names(), edges in edges()) {
        let network = build(&names, &edges);
        let rendered = network.to_string();
        prop_assert_eq!(rendered.lines().count(), network.user_count() + 1);
        prop_assert!(rendered.lines().all(|line| line == line.trim_end()));
    }
}

#[test]
fn successful_follow_is_visible_and_not_repeatable() {
    let mut network = Network::getting_started(5);
    assert!(network.add_followee("Foo", "Bar"));
    assert!(network.get_user("Foo").unwrap().follows("Bar"));
    assert!(!network.add_followee("Foo", "Bar"));
}

#[test]
fn capacity_five_scenario() {
    let mut network = Network::new(5);
    assert!(network.add_user("Foo"));
    assert!(network.add_user("Bar"));
    assert!(network.add_user("Baz"));
    assert!(!network.add_user("foo"));
    assert!(network.add_user("Qux"));
    assert!(network.add_user("Quux"));
    assert!(!network.add_user("Corge"));
    assert_eq!(network.user_count(), 5);
}

#[test]
fn everyone_follows_qux() {
    let mut network = Network::getting_started(5);
    assert!(network.add_user("Qux"));
    for name in ["Foo", "Bar", "Baz"] {
        assert!(network.add_followee(name, "Qux"));
    }
    assert_eq!(network.most_popular_user(), Some("Qux"));
}
