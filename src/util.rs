// Utility helpers for rating coercion, grouping and count formatting.
//
// Every "is this field usable" decision lives here so the engine and the
// summary builder can state their skip/default policy in one line each.
use num_format::{Locale, ToFormattedString};
use std::collections::HashMap;

/// Parse a `Rating` cell as an integer.
///
/// - A missing column (`None`) reads as a rating of `0`.
/// - Trims surrounding whitespace and allows a leading sign.
/// - Returns `None` for a present cell that is not a whole number (`"4.5"`, `"bad"`, `""`).
pub fn parse_rating(s: Option<&str>) -> Option<i64> {
    match s {
        None => Some(0),
        Some(s) => s.trim().parse::<i64>().ok(),
    }
}

/// Extract the month number from a `Year_Month` value (`YYYY-M` or `YYYY-MM`).
///
/// The value must split on `-` into exactly two parts and the second must
/// parse as an integer in `1..=12`.
pub fn parse_month(year_month: &str) -> Option<u32> {
    let mut parts = year_month.split('-');
    let (_year, month, rest) = (parts.next()?, parts.next()?, parts.next());
    if rest.is_some() {
        return None;
    }
    let month: i64 = month.trim().parse().ok()?;
    if (1..=12).contains(&month) {
        Some(month as u32)
    } else {
        None
    }
}

/// Round half away from zero to two decimals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Case-insensitive substring test used by every free-text query.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Running sum/count pair for one group of integer ratings.
///
/// The sum is `i128` so adding any number of `i64` ratings cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingAcc {
    pub sum: i128,
    pub count: usize,
}

impl RatingAcc {
    pub fn add(&mut self, rating: i64) {
        self.sum += i128::from(rating);
        self.count += 1;
    }

    /// Mean of everything added so far; `None` when nothing was added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

/// Groups keyed by string that remember the order keys were first seen.
#[derive(Debug, Clone)]
pub struct OrderedGroups<A> {
    index: HashMap<String, usize>,
    groups: Vec<(String, A)>,
}

impl<A> Default for OrderedGroups<A> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<A: Default> OrderedGroups<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for `key`, created on first sight.
    pub fn entry(&mut self, key: &str) -> &mut A {
        let idx = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.groups.push((key.to_string(), A::default()));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }

    pub fn into_vec(self) -> Vec<(String, A)> {
        self.groups
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Counts in console messages, e.g. `42,656 reviews`.
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_parse_rejects_non_integers() {
        assert_eq!(parse_rating(Some("5")), Some(5));
        assert_eq!(parse_rating(Some(" 3 ")), Some(3));
        assert_eq!(parse_rating(Some("4.5")), None);
        assert_eq!(parse_rating(Some("bad")), None);
        assert_eq!(parse_rating(Some("")), None);
    }

    #[test]
    fn missing_rating_reads_as_zero() {
        assert_eq!(parse_rating(None), Some(0));
    }

    #[test]
    fn month_parse_accepts_one_or_two_digits() {
        assert_eq!(parse_month("2019-4"), Some(4));
        assert_eq!(parse_month("2019-04"), Some(4));
        assert_eq!(parse_month("2019-12"), Some(12));
        assert_eq!(parse_month("2019-13"), None);
        assert_eq!(parse_month("2019-0"), None);
        assert_eq!(parse_month("missing"), None);
        assert_eq!(parse_month("2019-04-01"), None);
        assert_eq!(parse_month("2019-xx"), None);
        assert_eq!(parse_month(""), None);
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(4.0 / 3.0), 1.33);
        assert_eq!(round2(5.0 / 3.0), 1.67);
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ci("Disneyland_California", "disney"));
        assert!(contains_ci("Disneyland_California", "CALI"));
        assert!(!contains_ci("", "disney"));
        assert!(contains_ci("", ""));
    }

    #[test]
    fn acc_mean() {
        let mut acc = RatingAcc::default();
        assert_eq!(acc.mean(), None);
        acc.add(4);
        acc.add(5);
        assert_eq!(acc.mean(), Some(4.5));
    }

    #[test]
    fn acc_sum_does_not_overflow_on_extreme_ratings() {
        let mut acc = RatingAcc::default();
        acc.add(i64::MAX);
        acc.add(1);
        assert_eq!(acc.sum, i128::from(i64::MAX) + 1);
        assert_eq!(acc.mean(), Some(2f64.powi(62)));

        let mut low = RatingAcc::default();
        low.add(i64::MIN);
        low.add(i64::MIN);
        assert_eq!(low.sum, 2 * i128::from(i64::MIN));
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let mut g: OrderedGroups<usize> = OrderedGroups::new();
        *g.entry("b") += 1;
        *g.entry("a") += 1;
        *g.entry("b") += 1;
        let v = g.into_vec();
        assert_eq!(v, vec![("b".to_string(), 2), ("a".to_string(), 1)]);
    }

    #[test]
    fn formats_with_separators() {
        assert_eq!(format_int(42656usize), "42,656");
    }
}
