use super::*;

#[test]
fn second_action_for_the_same_pet_is_blocked() {
    let mut pending = Pending::default();
    assert!(pending.begin(7));
    assert!(!pending.begin(7));
    assert!(pending.is_busy(7));
}

#[test]
fn finish_releases_the_pet() {
    let mut pending = Pending::default();
    assert!(pending.begin(7));
    pending.finish(7);
    assert!(!pending.is_busy(7));
    assert!(pending.begin(7));
}

#[test]
fn different_pets_may_be_in_flight_concurrently() {
    let mut pending = Pending::default();
    assert!(pending.begin(1));
    assert!(pending.begin(2));
    pending.finish(1);
    assert!(!pending.is_busy(1));
    assert!(pending.is_busy(2));
}

#[test]
fn only_one_create_runs_at_a_time() {
    let mut pending = Pending::default();
    assert!(pending.begin_create());
    assert!(!pending.begin_create());
    pending.finish_create();
    assert!(pending.begin_create());
}
