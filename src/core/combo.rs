//! Combo classification - group size to visual tier
//!
//! Pure function over the level's three ascending thresholds. Ordering of
//! the thresholds is the config loader's responsibility; this module trusts
//! a validated `LevelConfig`.

use crate::config::LevelConfig;
use crate::types::ComboTier;

/// Classify a group by size: tier 0 up to threshold A, tier 1 up to B,
/// tier 2 up to C, tier 3 beyond.
pub fn tier_for_size(size: usize, config: &LevelConfig) -> ComboTier {
    if size <= config.combo_threshold_a {
        ComboTier::Base
    } else if size <= config.combo_threshold_b {
        ComboTier::First
    } else if size <= config.combo_threshold_c {
        ComboTier::Second
    } else {
        ComboTier::Third
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LevelConfig {
        LevelConfig {
            combo_threshold_a: 4,
            combo_threshold_b: 7,
            combo_threshold_c: 9,
            ..LevelConfig::default()
        }
    }

    #[test]
    fn test_tier_boundaries() {
        let config = config();
        assert_eq!(tier_for_size(1, &config), ComboTier::Base);
        assert_eq!(tier_for_size(4, &config), ComboTier::Base);
        assert_eq!(tier_for_size(5, &config), ComboTier::First);
        assert_eq!(tier_for_size(7, &config), ComboTier::First);
        assert_eq!(tier_for_size(8, &config), ComboTier::Second);
        assert_eq!(tier_for_size(9, &config), ComboTier::Second);
        assert_eq!(tier_for_size(10, &config), ComboTier::Third);
        assert_eq!(tier_for_size(100, &config), ComboTier::Third);
    }

    #[test]
    fn test_equal_thresholds_collapse_tiers() {
        let config = LevelConfig {
            combo_threshold_a: 3,
            combo_threshold_b: 3,
            combo_threshold_c: 3,
            ..LevelConfig::default()
        };
        assert_eq!(tier_for_size(3, &config), ComboTier::Base);
        // Tiers 1 and 2 are unreachable when all thresholds coincide.
        assert_eq!(tier_for_size(4, &config), ComboTier::Third);
    }
}
