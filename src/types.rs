use chrono::Month;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tabled::Tabled;

/// One parsed row of the review file.
///
/// A column missing from the header stays `None`; a present but empty cell
/// becomes `Some("")`. The engine treats those two cases differently, so the
/// csv crate's "empty means None" rule is bypassed with [`present`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReviewRecord {
    #[serde(rename = "Review_ID", deserialize_with = "present")]
    pub review_id: Option<String>,
    #[serde(rename = "Rating", deserialize_with = "present")]
    pub rating: Option<String>,
    #[serde(rename = "Year_Month", deserialize_with = "present")]
    pub year_month: Option<String>,
    #[serde(rename = "Reviewer_Location", deserialize_with = "present")]
    pub reviewer_location: Option<String>,
    #[serde(rename = "Review_Text", deserialize_with = "present")]
    pub review_text: Option<String>,
    #[serde(rename = "Branch", deserialize_with = "present")]
    pub branch: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl ReviewRecord {
    /// Build a record from the four fields the engine reads.
    pub fn new(branch: &str, location: &str, rating: &str, year_month: &str) -> Self {
        Self {
            branch: Some(branch.to_string()),
            reviewer_location: Some(location.to_string()),
            rating: Some(rating.to_string()),
            year_month: Some(year_month.to_string()),
            ..Self::default()
        }
    }

    pub fn branch_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.branch.as_deref().unwrap_or(default)
    }

    pub fn location_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.reviewer_location.as_deref().unwrap_or(default)
    }

    pub fn year_month_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.year_month.as_deref().unwrap_or(default)
    }
}

/// Per-park figures written by every exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_reviews: usize,
    pub positive_reviews: usize,
    pub average_rating: f64,
    pub country_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParkSummary {
    pub park: String,
    pub stats: AggregateStats,
}

/// Summary for every park, in first-encounter order.
///
/// Serializes as a JSON object keyed by park name so key order survives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkSummaries(pub Vec<ParkSummary>);

impl ParkSummaries {
    pub fn get(&self, park: &str) -> Option<&AggregateStats> {
        self.0.iter().find(|s| s.park == park).map(|s| &s.stats)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParkSummary> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn parks(&self) -> Vec<&str> {
        self.0.iter().map(|s| s.park.as_str()).collect()
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        self.0.iter().map(SummaryRow::from).collect()
    }
}

impl Serialize for ParkSummaries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for s in &self.0 {
            map.serialize_entry(&s.park, &s.stats)?;
        }
        map.end()
    }
}

/// Flat row used by the delimited writer and the console preview.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct SummaryRow {
    #[serde(rename = "Park Name")]
    #[tabled(rename = "Park Name")]
    pub park: String,
    #[serde(rename = "Total Reviews")]
    #[tabled(rename = "Total Reviews")]
    pub total_reviews: usize,
    #[serde(rename = "Positive Reviews")]
    #[tabled(rename = "Positive Reviews")]
    pub positive_reviews: usize,
    #[serde(rename = "Average Rating")]
    #[tabled(rename = "Average Rating")]
    pub average_rating: f64,
    #[serde(rename = "Country Count")]
    #[tabled(rename = "Country Count")]
    pub country_count: usize,
}

impl From<&ParkSummary> for SummaryRow {
    fn from(s: &ParkSummary) -> Self {
        SummaryRow {
            park: s.park.clone(),
            total_reviews: s.stats.total_reviews,
            positive_reviews: s.stats.positive_reviews,
            average_rating: s.stats.average_rating,
            country_count: s.stats.country_count,
        }
    }
}

/// A reviewer location and its mean rating for one park.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRating {
    pub location: String,
    pub average: f64,
}

/// One calendar month's slot in the seasonal breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAverage {
    pub month: Month,
    pub average: f64,
    /// Number of valid ratings behind `average`; zero means no data.
    pub reviews: usize,
}

impl MonthlyAverage {
    /// Three-letter label, e.g. `Jan`.
    pub fn label(&self) -> &'static str {
        &self.month.name()[..3]
    }
}

/// All locations that reviewed one park, with their mean rating.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkLocationAverages {
    pub park: String,
    pub locations: Vec<LocationRating>,
}

impl ParkLocationAverages {
    pub fn get(&self, location: &str) -> Option<f64> {
        self.locations
            .iter()
            .find(|l| l.location == location)
            .map(|l| l.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_stay_present() {
        let data = "Review_ID,Rating,Branch\n1,,Disneyland_Paris\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let rec: ReviewRecord = rdr.deserialize().next().unwrap().unwrap();
        assert_eq!(rec.rating.as_deref(), Some(""));
        assert_eq!(rec.branch.as_deref(), Some("Disneyland_Paris"));
        // Not in the header at all.
        assert_eq!(rec.reviewer_location, None);
        assert_eq!(rec.year_month, None);
    }

    #[test]
    fn summaries_serialize_as_ordered_object() {
        let summaries = ParkSummaries(vec![
            ParkSummary {
                park: "Zed".into(),
                stats: AggregateStats {
                    total_reviews: 1,
                    positive_reviews: 1,
                    average_rating: 5.0,
                    country_count: 1,
                },
            },
            ParkSummary {
                park: "Alpha".into(),
                stats: AggregateStats {
                    total_reviews: 2,
                    positive_reviews: 0,
                    average_rating: 1.5,
                    country_count: 2,
                },
            },
        ]);
        let s = serde_json::to_string(&summaries).unwrap();
        assert!(s.find("Zed").unwrap() < s.find("Alpha").unwrap());
        assert!(s.contains("\"average_rating\":1.5"));
    }

    #[test]
    fn month_labels_are_abbreviated() {
        let slot = MonthlyAverage {
            month: Month::September,
            average: 0.0,
            reviews: 0,
        };
        assert_eq!(slot.label(), "Sep");
    }
}
