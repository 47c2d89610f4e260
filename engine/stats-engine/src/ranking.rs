//! Display order for starter-week breakdowns

use std::cmp::Ordering;

use crate::models::PlayerScoreBreakdown;

/// Compare two breakdowns for display
///
/// Higher grade first, then more top-12 finishes, then more top-24
/// finishes, then name ascending. Top-36 finishes do not affect the order.
pub fn by_top_finishes(left: &PlayerScoreBreakdown, right: &PlayerScoreBreakdown) -> Ordering {
    right
        .grade
        .unwrap_or(0)
        .cmp(&left.grade.unwrap_or(0))
        .then_with(|| right.top12_finishes.cmp(&left.top12_finishes))
        .then_with(|| right.top24_finishes.cmp(&left.top24_finishes))
        .then_with(|| left.name.cmp(&right.name))
}

/// Sort breakdowns in place into display order (stable)
pub fn rank_breakdowns(breakdowns: &mut [PlayerScoreBreakdown]) {
    breakdowns.sort_by(by_top_finishes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_registry::{Player, Position};

    fn breakdown(id: u32, name: &str, top12: u32, top24: u32, top36: u32) -> PlayerScoreBreakdown {
        let mut b = PlayerScoreBreakdown::new(&Player::new(id, name, Position::WideReceiver));
        b.top12_finishes = top12;
        b.top24_finishes = top24;
        b.top36_finishes = top36;
        b
    }

    fn names(breakdowns: &[PlayerScoreBreakdown]) -> Vec<&str> {
        breakdowns.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_top12_then_top24() {
        let mut list = vec![
            breakdown(1, "Low", 1, 0, 5),
            breakdown(2, "High", 5, 0, 0),
            breakdown(3, "Mid", 1, 4, 0),
        ];
        rank_breakdowns(&mut list);
        assert_eq!(names(&list), vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_grade_outranks_finishes() {
        let mut graded = breakdown(1, "Graded", 0, 0, 0);
        graded.grade = Some(3);
        let mut negative = breakdown(3, "Negative", 9, 0, 0);
        negative.grade = Some(-1);
        let mut list = vec![breakdown(2, "Finisher", 9, 9, 9), negative, graded];

        rank_breakdowns(&mut list);
        assert_eq!(names(&list), vec!["Graded", "Finisher", "Negative"]);
    }

    #[test]
    fn test_ties_break_by_name_and_ignore_top36() {
        let mut list = vec![
            breakdown(1, "Zed", 2, 2, 0),
            breakdown(2, "Amy", 2, 2, 7),
            breakdown(3, "Moe", 2, 2, 3),
        ];
        rank_breakdowns(&mut list);
        assert_eq!(names(&list), vec!["Amy", "Moe", "Zed"]);
    }

    #[test]
    fn test_sort_is_repeatable() {
        let mut list = vec![
            breakdown(1, "Cee", 1, 1, 1),
            breakdown(2, "Bee", 3, 0, 0),
            breakdown(3, "Aye", 1, 1, 1),
            breakdown(4, "Dee", 0, 2, 0),
        ];
        rank_breakdowns(&mut list);
        let first = list.clone();
        rank_breakdowns(&mut list);
        assert_eq!(list, first);
        assert_eq!(names(&list), vec!["Bee", "Aye", "Cee", "Dee"]);
    }

    #[test]
    fn test_distinct_names_never_compare_equal() {
        let a = breakdown(1, "Same Stats A", 1, 1, 1);
        let b = breakdown(2, "Same Stats B", 1, 1, 1);
        assert_ne!(by_top_finishes(&a, &b), Ordering::Equal);
        assert_eq!(by_top_finishes(&a, &a.clone()), Ordering::Equal);
    }
}
