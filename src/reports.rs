//! Review queries over the loaded record set.
//!
//! Every function here is a pure reduction: it borrows the records, never
//! mutates them, and returns a fresh value. Unparsable ratings are skipped
//! (the record does not count toward that statistic); see `summary` for the
//! export path, which defaults them to zero instead. A record with no
//! `Rating` column at all counts as a rating of `0` on both paths.
use crate::types::{LocationRating, MonthlyAverage, ParkLocationAverages, ReviewRecord};
use crate::util::{contains_ci, parse_month, parse_rating, OrderedGroups, RatingAcc};
use chrono::Month;
use std::cmp::Ordering;

/// Default length of the top-locations ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// Records whose `Branch` contains `park_name`, ignoring case.
pub fn filter_by_park<'a, I>(records: I, park_name: &str) -> Vec<&'a ReviewRecord>
where
    I: IntoIterator<Item = &'a ReviewRecord>,
{
    records
        .into_iter()
        .filter(|r| contains_ci(r.branch_or(""), park_name))
        .collect()
}

pub fn count_by_park_and_location(records: &[ReviewRecord], park_name: &str, location: &str) -> usize {
    records
        .iter()
        .filter(|r| contains_ci(r.branch_or(""), park_name) && contains_ci(r.location_or(""), location))
        .count()
}

/// Mean rating for a park in a year, or `None` when no valid rating matched.
///
/// `year` is compared as a literal prefix of `Year_Month`.
pub fn try_average_rating_by_year(records: &[ReviewRecord], park_name: &str, year: &str) -> Option<f64> {
    let mut acc = RatingAcc::default();
    for r in records {
        if !contains_ci(r.branch_or(""), park_name) || !r.year_month_or("").starts_with(year) {
            continue;
        }
        if let Some(rating) = parse_rating(r.rating.as_deref()) {
            acc.add(rating);
        }
    }
    acc.mean()
}

/// Same as [`try_average_rating_by_year`] with "no data" reported as `0`.
pub fn average_rating_by_year(records: &[ReviewRecord], park_name: &str, year: &str) -> f64 {
    try_average_rating_by_year(records, park_name, year).unwrap_or(0.0)
}

/// Review count per exact `Branch` value, in first-encounter order.
pub fn count_per_park(records: &[ReviewRecord]) -> Vec<(String, usize)> {
    let mut groups: OrderedGroups<usize> = OrderedGroups::new();
    for r in records {
        *groups.entry(r.branch_or("Unknown")) += 1;
    }
    groups.into_vec()
}

/// Locations with the highest mean rating for a park.
///
/// Locations are grouped by exact value. Equal means keep the order in which
/// the locations first appeared.
pub fn top_locations_by_rating(records: &[ReviewRecord], park_name: &str, top_n: usize) -> Vec<LocationRating> {
    let mut groups: OrderedGroups<RatingAcc> = OrderedGroups::new();
    for r in records {
        if !contains_ci(r.branch_or(""), park_name) {
            continue;
        }
        let Some(rating) = parse_rating(r.rating.as_deref()) else {
            continue;
        };
        groups.entry(r.location_or("Unknown")).add(rating);
    }

    let mut ranked: Vec<LocationRating> = groups
        .into_vec()
        .into_iter()
        .filter_map(|(location, acc)| acc.mean().map(|average| LocationRating { location, average }))
        .collect();
    // `sort_by` is stable, which is what keeps ties in encounter order.
    ranked.sort_by(|a, b| b.average.partial_cmp(&a.average).unwrap_or(Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}

/// Mean rating per calendar month for a park, always twelve slots Jan..Dec.
///
/// A record is skipped if its `Year_Month` has no usable month or its rating
/// is not an integer. Months with no data report an average of `0`.
pub fn monthly_averages(records: &[ReviewRecord], park_name: &str) -> Vec<MonthlyAverage> {
    let mut months = [RatingAcc::default(); 12];
    for r in records {
        if !contains_ci(r.branch_or(""), park_name) {
            continue;
        }
        let (Some(month), Some(rating)) = (parse_month(r.year_month_or("")), parse_rating(r.rating.as_deref())) else {
            continue;
        };
        months[(month - 1) as usize].add(rating);
    }

    let mut month = Month::January;
    let mut out = Vec::with_capacity(12);
    for acc in months {
        out.push(MonthlyAverage {
            month,
            average: acc.mean().unwrap_or(0.0),
            reviews: acc.count,
        });
        month = month.succ();
    }
    out
}

/// Mean rating for every (park, location) pair.
///
/// Both keys are exact values, `"Unknown"` when missing. A pair only appears
/// once it has at least one valid rating, so parks with none are absent too.
pub fn park_location_averages(records: &[ReviewRecord]) -> Vec<ParkLocationAverages> {
    let mut parks: OrderedGroups<OrderedGroups<RatingAcc>> = OrderedGroups::new();
    for r in records {
        let Some(rating) = parse_rating(r.rating.as_deref()) else {
            continue;
        };
        parks
            .entry(r.branch_or("Unknown"))
            .entry(r.location_or("Unknown"))
            .add(rating);
    }

    parks
        .into_vec()
        .into_iter()
        .map(|(park, locations)| ParkLocationAverages {
            park,
            locations: locations
                .into_vec()
                .into_iter()
                .filter_map(|(location, acc)| acc.mean().map(|average| LocationRating { location, average }))
                .collect(),
        })
        .collect()
}
