//! Per-level difficulty curve

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Requested maze width in tiles (the generator may round it up)
    pub maze_width: u32,
    /// Requested maze height in tiles
    pub maze_height: u32,
    /// Seconds available to reach the exit
    pub time_limit: f64,
    /// Enemies to spawn (fewer if the maze runs out of floor)
    pub enemy_count: u32,
}

impl LevelConfig {
    /// Config for level `level` (1-based; 0 is treated as 1).
    ///
    /// Mazes grow by 4 tiles and gain one enemy every two levels, while the
    /// time budget shrinks by 2.5 s per level down to a 20 s floor.
    pub fn for_level(level: u32) -> Self {
        let step = level.saturating_sub(1);
        let growth = (step / 2).saturating_mul(MAZE_GROWTH);

        Self {
            maze_width: BASE_MAZE_WIDTH.saturating_add(growth),
            maze_height: BASE_MAZE_HEIGHT.saturating_add(growth),
            time_limit: (BASE_TIME_LIMIT - step as f64 * TIME_LIMIT_DECAY).max(MIN_TIME_LIMIT),
            enemy_count: (step / 2).saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_levels() {
        let l1 = LevelConfig::for_level(1);
        assert_eq!((l1.maze_width, l1.maze_height, l1.enemy_count), (21, 15, 1));
        assert_eq!(l1.time_limit, 70.0);

        let l2 = LevelConfig::for_level(2);
        assert_eq!((l2.maze_width, l2.maze_height, l2.enemy_count), (21, 15, 1));
        assert_eq!(l2.time_limit, 67.5);

        let l3 = LevelConfig::for_level(3);
        assert_eq!((l3.maze_width, l3.maze_height, l3.enemy_count), (25, 19, 2));
        assert_eq!(l3.time_limit, 65.0);
    }

    #[test]
    fn test_time_limit_floor() {
        // 70 - 20 * 2.5 = 20, after which the floor holds
        assert_eq!(LevelConfig::for_level(21).time_limit, 20.0);
        assert_eq!(LevelConfig::for_level(22).time_limit, 20.0);
        assert_eq!(LevelConfig::for_level(500).time_limit, 20.0);
    }

    #[test]
    fn test_level_zero_matches_level_one() {
        assert_eq!(LevelConfig::for_level(0), LevelConfig::for_level(1));
    }

    #[test]
    fn test_huge_levels_saturate() {
        let config = LevelConfig::for_level(u32::MAX);
        assert_eq!(config.maze_width, u32::MAX);
        assert_eq!(config.maze_height, u32::MAX);
        assert_eq!(config.enemy_count, u32::MAX / 2 + 1);
        assert_eq!(config.time_limit, MIN_TIME_LIMIT);
    }

    proptest! {
        #[test]
        fn prop_difficulty_is_monotonic(level in 1u32..u32::MAX) {
            let a = LevelConfig::for_level(level);
            let b = LevelConfig::for_level(level + 1);
            prop_assert!(b.maze_width >= a.maze_width);
            prop_assert!(b.maze_height >= a.maze_height);
            prop_assert!(b.enemy_count >= a.enemy_count);
            prop_assert!(b.time_limit <= a.time_limit);
            prop_assert!(b.time_limit >= MIN_TIME_LIMIT);
        }
    }
}
