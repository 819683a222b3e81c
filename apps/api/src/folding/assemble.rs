//! Pattern assembly — final ordering and summary statistics.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::folding::{FoldInstruction, Pattern, Strategy};

/// Minutes a full-edge segment fold takes to measure and crease.
const SEGMENT_MINUTES_PER_FOLD: f64 = 2.0;
/// Minutes per dual-offset fold (one page, two creases measured once).
const DUAL_MINUTES_PER_FOLD: f64 = 1.0;
/// Minutes per corner fold — a corner is much quicker than a full edge.
const CORNER_MINUTES_PER_FOLD: f64 = 0.33;

/// Summary statistics for a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternStats {
    pub total_folds: usize,
    pub pages_used: usize,
    pub estimated_time_minutes: u32,
}

/// Stable sort by ascending page number; instructions on the same page keep
/// their generation order.
pub fn sort_by_page(folds: &mut [FoldInstruction]) {
    folds.sort_by_key(FoldInstruction::page);
}

/// Derives summary statistics from a finished pattern. The time estimate
/// uses a per-fold constant that differs by strategy.
pub fn statistics(pattern: &Pattern, strategy: Strategy) -> PatternStats {
    let total_folds = pattern.len();
    let pages: HashSet<u32> = pattern.folds.iter().map(FoldInstruction::page).collect();

    let minutes_per_fold = match strategy {
        Strategy::Segment => SEGMENT_MINUTES_PER_FOLD,
        Strategy::Dual => DUAL_MINUTES_PER_FOLD,
        Strategy::Corner => CORNER_MINUTES_PER_FOLD,
    };

    PatternStats {
        total_folds,
        pages_used: pages.len(),
        estimated_time_minutes: (total_folds as f64 * minutes_per_fold).ceil() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folding::FoldType;

    fn corner(page: u32, offset_mm: f64) -> FoldInstruction {
        FoldInstruction::Corner {
            page,
            fold_type: FoldType::Both,
            offset_mm,
        }
    }

    #[test]
    fn test_sort_is_stable_within_a_page() {
        let mut folds = vec![
            corner(4, 10.0),
            corner(2, 20.0),
            corner(4, 30.0),
            corner(2, 40.0),
        ];
        sort_by_page(&mut folds);
        assert_eq!(
            folds,
            vec![
                corner(2, 20.0),
                corner(2, 40.0),
                corner(4, 10.0),
                corner(4, 30.0),
            ]
        );
    }

    #[test]
    fn test_statistics_counts_distinct_pages() {
        let pattern = Pattern {
            folds: vec![corner(2, 10.0), corner(2, 20.0), corner(4, 30.0)],
        };
        let stats = statistics(&pattern, Strategy::Corner);
        assert_eq!(stats.total_folds, 3);
        assert_eq!(stats.pages_used, 2);
    }

    #[test]
    fn test_time_constants_per_strategy() {
        let pattern = Pattern {
            folds: (1..=10).map(|p| corner(p * 2, 50.0)).collect(),
        };
        assert_eq!(
            statistics(&pattern, Strategy::Segment).estimated_time_minutes,
            20
        );
        assert_eq!(
            statistics(&pattern, Strategy::Dual).estimated_time_minutes,
            10
        );
        // ceil(10 × 0.33) = 4
        assert_eq!(
            statistics(&pattern, Strategy::Corner).estimated_time_minutes,
            4
        );
    }

    #[test]
    fn test_empty_pattern_statistics() {
        let stats = statistics(&Pattern::default(), Strategy::Segment);
        assert_eq!(stats.total_folds, 0);
        assert_eq!(stats.pages_used, 0);
        assert_eq!(stats.estimated_time_minutes, 0);
    }
}
