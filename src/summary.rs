use crate::types::{AggregateStats, ParkSummaries, ParkSummary, ReviewRecord};
use crate::util::{parse_rating, round2, OrderedGroups};
use std::collections::HashSet;

/// Ratings at or above this count as positive.
pub const POSITIVE_RATING: i64 = 4;

#[derive(Default)]
struct Acc {
    total_reviews: usize,
    positive_reviews: usize,
    total_rating: i128,
    locations: HashSet<String>,
}

/// One pass over the records producing the per-park export figures.
///
/// Unlike the query functions, an unparsable rating here is taken as `0`:
/// the record still counts toward `total_reviews` and pulls the average down.
pub fn build_summary(records: &[ReviewRecord]) -> ParkSummaries {
    let mut parks: OrderedGroups<Acc> = OrderedGroups::new();
    for r in records {
        let rating = parse_rating(r.rating.as_deref()).unwrap_or(0);
        let e = parks.entry(r.branch_or("Unknown"));
        e.total_reviews += 1;
        if rating >= POSITIVE_RATING {
            e.positive_reviews += 1;
        }
        e.total_rating += i128::from(rating);
        e.locations.insert(r.location_or("Unknown").to_string());
    }

    let summaries = parks
        .into_vec()
        .into_iter()
        .map(|(park, acc)| {
            let average = if acc.total_reviews > 0 {
                acc.total_rating as f64 / acc.total_reviews as f64
            } else {
                0.0
            };
            ParkSummary {
                park,
                stats: AggregateStats {
                    total_reviews: acc.total_reviews,
                    positive_reviews: acc.positive_reviews,
                    average_rating: round2(average),
                    country_count: acc.locations.len(),
                },
            }
        })
        .collect();
    ParkSummaries(summaries)
}
