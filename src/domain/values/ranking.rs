//! Total ordering of in-memory deal collections.
//!
//! Every key ends with an ascending `id` comparison, so two distinct deals
//! never compare equal and sorting is deterministic and idempotent.
//! The paginated public feed does not go through here; its pages arrive
//! already ordered by the source.

use crate::domain::entities::deal::Deal;
use crate::domain::values::sort_key::SortKey;
use std::cmp::Ordering;

/// Compare two deals under `key`. `Ordering::Less` means `a` comes first.
pub fn compare_deals(a: &Deal, b: &Deal, key: SortKey) -> Ordering {
    match key {
        SortKey::Hottest => by_heat(a, b),
        SortKey::Newest => b
            .created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id)),
        SortKey::Commented => b
            .comments_count
            .cmp(&a.comments_count)
            .then_with(|| by_heat(a, b)),
    }
}

fn by_heat(a: &Deal, b: &Deal) -> Ordering {
    b.temperature
        .cmp(&a.temperature)
        .then_with(|| b.net_votes().cmp(&a.net_votes()))
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Return a sorted copy of `deals`. The input is left untouched.
pub fn sort_deals(deals: &[Deal], key: SortKey) -> Vec<Deal> {
    let mut sorted = deals.to_vec();
    sorted.sort_by(|a, b| compare_deals(a, b, key));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::category::DealCategory;
    use chrono::{Duration, TimeZone, Utc};

    fn deal(id: &str, temperature: i64, hot: i64, cold: i64, comments: i64, minutes: i64) -> Deal {
        let mut d = Deal::new(
            format!("Deal {id}"),
            String::new(),
            DealCategory::Hardware,
            "Kabum".into(),
            90.0,
            100.0,
        );
        d.id = id.to_string();
        d.temperature = temperature;
        d.hot_votes = hot;
        d.cold_votes = cold;
        d.comments_count = comments;
        d.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes);
        d
    }

    fn ids(deals: &[Deal]) -> Vec<&str> {
        deals.iter().map(|d| d.id.as_str()).collect()
    }

    fn sample() -> Vec<Deal> {
        vec![
            deal("a", 50, 5, 1, 3, 10),
            deal("b", 90, 10, 0, 3, 0),
            deal("c", 90, 10, 0, 8, 5),
            deal("d", 90, 12, 1, 0, 1),
            deal("e", 50, 5, 1, 3, 10),
            deal("f", 10, 0, 4, 8, 20),
        ]
    }

    #[test]
    fn test_hottest_newer_wins_tie() {
        let sorted = sort_deals(&[deal("old", 90, 10, 0, 0, 0), deal("new", 90, 10, 0, 0, 1)], SortKey::Hottest);
        assert_eq!(ids(&sorted), vec!["new", "old"]);
    }

    #[test]
    fn test_hottest_order() {
        let sorted = sort_deals(&sample(), SortKey::Hottest);
        // d: net 11 beats b/c: net 10; c newer than b; a/e fully tied -> id.
        assert_eq!(ids(&sorted), vec!["d", "c", "b", "a", "e", "f"]);
    }

    #[test]
    fn test_newest_order() {
        let sorted = sort_deals(&sample(), SortKey::Newest);
        assert_eq!(ids(&sorted), vec!["f", "a", "e", "c", "d", "b"]);
    }

    #[test]
    fn test_commented_falls_back_to_heat() {
        let sorted = sort_deals(&sample(), SortKey::Commented);
        assert_eq!(ids(&sorted), vec!["c", "f", "b", "a", "e", "d"]);
    }

    #[test]
    fn test_sort_is_idempotent_and_pure() {
        let input = sample();
        let before = input.clone();
        for key in [SortKey::Hottest, SortKey::Newest, SortKey::Commented] {
            let once = sort_deals(&input, key);
            let twice = sort_deals(&once, key);
            assert_eq!(once, twice);
        }
        assert_eq!(input, before);
    }

    #[test]
    fn test_order_independent_of_input_permutation() {
        let mut reversed = sample();
        reversed.reverse();
        for key in [SortKey::Hottest, SortKey::Newest, SortKey::Commented] {
            assert_eq!(sort_deals(&sample(), key), sort_deals(&reversed, key));
        }
    }

    #[test]
    fn test_distinct_deals_never_compare_equal() {
        let deals = sample();
        for a in &deals {
            for b in &deals {
                if a.id != b.id {
                    assert_ne!(compare_deals(a, b, SortKey::Newest), Ordering::Equal);
                    assert_ne!(compare_deals(a, b, SortKey::Hottest), Ordering::Equal);
                }
            }
        }
    }
}
