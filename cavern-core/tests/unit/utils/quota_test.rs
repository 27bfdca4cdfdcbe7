use super::*;
use std::time::Duration;

#[test]
fn can_reach_time_quota() {
    assert!(TimeQuota::new(0.).is_reached());
    assert!(!TimeQuota::new(3600.).is_reached());
}

#[test]
fn can_create_time_quota_from_deadline() {
    assert!(TimeQuota::with_deadline(Instant::now()).is_reached());
    assert!(!TimeQuota::with_deadline(Instant::now() + Duration::from_secs(3600)).is_reached());
}

#[test]
fn can_reach_time_quota_after_limit() {
    let quota = TimeQuota::new(0.01);

    std::thread::sleep(Duration::from_millis(20));

    assert!(quota.is_reached());
}
