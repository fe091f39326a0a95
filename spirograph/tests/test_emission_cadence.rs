use spirograph::curve::DerivedCounts;
use spirograph::emission::{EmissionEvents, EmissionPolicy};

fn counts(num_petals: u64, points_per_period: u64) -> DerivedCounts {
    DerivedCounts {
        num_periods: 1,
        num_petals,
        points_per_period,
    }
}

#[test]
fn x_samples_fire_every_two_petals_worth_of_points() {
    let policy = EmissionPolicy::new(&counts(4, 629), false);

    let fired: Vec<u64> = (1..=24).filter(|&c| policy.events_at(c).x_sample).collect();
    assert_eq!(fired, vec![8, 16, 24]);
}

#[test]
fn y_samples_fire_every_four_petals_worth_of_points() {
    let policy = EmissionPolicy::new(&counts(4, 629), false);

    let fired: Vec<u64> = (1..=48).filter(|&c| policy.events_at(c).y_sample).collect();
    assert_eq!(fired, vec![16, 32, 48]);
}

#[test]
fn y_sample_counts_are_a_subset_of_x_sample_counts() {
    let policy = EmissionPolicy::new(&counts(7, 100), false);

    for count in 1..=1000 {
        let events = policy.events_at(count);
        if events.y_sample {
            assert!(events.x_sample, "y fired without x at count {}", count);
        }
    }
}

#[test]
fn color_changes_require_random_mode() {
    let without = EmissionPolicy::new(&counts(4, 2), false);
    let with = EmissionPolicy::new(&counts(4, 2), true);

    for count in 1..=32 {
        assert!(!without.events_at(count).color_change);
    }

    let fired: Vec<u64> = (1..=32)
        .filter(|&c| with.events_at(c).color_change)
        .collect();
    assert_eq!(fired, vec![8, 16, 24, 32]);
}

#[test]
fn off_cadence_counts_produce_no_events() {
    let policy = EmissionPolicy::new(&counts(4, 629), true);

    assert_eq!(policy.events_at(1), EmissionEvents::default());
    assert_eq!(policy.events_at(7), EmissionEvents::default());
    assert_eq!(policy.events_at(9), EmissionEvents::default());
}
