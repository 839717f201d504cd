//! Tier ranking and the access decision for gated content.
//!
//! Tiers are ranked by their position in ascending-price order. A viewer may
//! open a movie when the rank of their active tier is at least the rank of
//! the movie's required tier. Unknown tier ids fail closed: a user tier that
//! is not ranked counts as below everything, a required tier that is not
//! ranked counts as above everything.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Tier;

/// Rank used for a user tier id missing from the ranking
pub const UNRANKED_USER_TIER: i64 = -1;
/// Rank used for a required tier id missing from the ranking
pub const UNRANKED_REQUIRED_TIER: i64 = 999;

/// Tier id → rank, 0 being the cheapest tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TierRank(HashMap<String, i64>);

impl TierRank {
    pub fn get(&self, tier_id: &str) -> Option<i64> {
        self.0.get(tier_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn can_access(&self, required_tier: Option<&str>, user_tier: Option<&str>) -> bool {
        can_access(required_tier, user_tier, self)
    }
}

/// Ranks ids in iteration order, ignoring any price gaps.
impl<S: Into<String>> FromIterator<S> for TierRank {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TierRank(
            iter.into_iter()
                .zip(0_i64..)
                .map(|(id, rank)| (id.into(), rank))
                .collect(),
        )
    }
}

/// `tiers` must already be sorted by ascending price; the store query does that.
pub fn build_rank(tiers: &[Tier]) -> TierRank {
    tiers.iter().map(|tier| tier.id.as_str()).collect()
}

pub fn can_access(required_tier: Option<&str>, user_tier: Option<&str>, rank: &TierRank) -> bool {
    let Some(required_tier) = required_tier else {
        return true;
    };
    let Some(user_tier) = user_tier else {
        return false;
    };

    let user_level = rank.get(user_tier).unwrap_or(UNRANKED_USER_TIER);
    let required_level = rank.get(required_tier).unwrap_or(UNRANKED_REQUIRED_TIER);

    user_level >= required_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::catalog_store::mock::tier;

    fn streaming_tiers() -> Vec<Tier> {
        vec![
            tier("free", "Free", 0.0),
            tier("basic", "Basic", 9.99),
            tier("premium", "Premium", 19.99),
        ]
    }

    #[test]
    fn ranks_follow_price_order() {
        let rank = build_rank(&streaming_tiers());

        assert_eq!(rank.len(), 3);
        assert_eq!(rank.get("free"), Some(0));
        assert_eq!(rank.get("basic"), Some(1));
        assert_eq!(rank.get("premium"), Some(2));
    }

    #[test]
    fn ranks_ignore_price_gaps() {
        let tiers = vec![
            tier("a", "A", 1.0),
            tier("b", "B", 500.0),
            tier("c", "C", 501.0),
            tier("d", "D", 10_000.0),
        ];
        let rank = build_rank(&tiers);

        let mut previous = None;
        for (expected, tier) in tiers.iter().enumerate() {
            let current = rank.get(&tier.id).unwrap();
            assert_eq!(current, expected as i64);
            if let Some(previous) = previous {
                assert!(current > previous);
            }
            previous = Some(current);
        }
    }

    #[test]
    fn empty_tiers_give_empty_rank() {
        assert!(build_rank(&[]).is_empty());
    }

    #[test]
    fn free_content_is_always_open() {
        let rank = build_rank(&streaming_tiers());

        assert!(can_access(None, None, &rank));
        assert!(can_access(None, Some("free"), &rank));
        assert!(can_access(None, Some("no-such-tier"), &rank));
        assert!(can_access(None, None, &TierRank::default()));
    }

    #[test]
    fn gated_content_needs_a_tier() {
        let rank = build_rank(&streaming_tiers());

        for required in ["free", "basic", "premium", "no-such-tier"] {
            assert!(!can_access(Some(required), None, &rank));
        }
    }

    #[test]
    fn unknown_user_tier_is_denied() {
        let rank = build_rank(&streaming_tiers());

        for required in ["free", "basic", "premium"] {
            assert!(!can_access(Some(required), Some("legacy-plan"), &rank));
        }
    }

    #[test]
    fn unknown_required_tier_is_denied() {
        let rank = build_rank(&streaming_tiers());

        for user in ["free", "basic", "premium", "legacy-plan"] {
            assert!(!can_access(Some("retired-tier"), Some(user), &rank));
        }
    }

    #[test]
    fn access_is_monotonic_in_user_rank() {
        let tiers = streaming_tiers();
        let rank = build_rank(&tiers);

        for required in &tiers {
            for lower in &tiers {
                for higher in &tiers {
                    if rank.get(&higher.id) < rank.get(&lower.id) {
                        continue;
                    }
                    if can_access(Some(&required.id), Some(&lower.id), &rank) {
                        assert!(can_access(Some(&required.id), Some(&higher.id), &rank));
                    }
                }
            }
        }
    }

    #[test]
    fn basic_viewer_upgrading_to_premium() {
        let rank = build_rank(&streaming_tiers());

        assert!(!rank.can_access(Some("premium"), Some("basic")));
        assert!(rank.can_access(Some("premium"), Some("premium")));
        assert!(rank.can_access(Some("basic"), Some("premium")));
    }

    #[test]
    fn rank_serializes_as_a_map() {
        let rank: TierRank = ["free", "basic"].into_iter().collect();
        let value = serde_json::to_value(&rank).unwrap();

        assert_eq!(value["free"], 0);
        assert_eq!(value["basic"], 1);
    }
}
