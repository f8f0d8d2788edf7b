//! Synthetic demonstration series
//!
//! Two stateless generators backing the demo chart endpoints. They have
//! no dependency on the table-backed builders.

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct YearCount {
    pub year: i64,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentCitation {
    pub patent_count: i64,
    pub paper_count: i64,
}

/// Paper counts per year for 2014 through 2023.
pub fn paper_counts() -> Vec<YearCount> {
    let mut rng = rand::thread_rng();
    (2014..2024)
        .map(|year| YearCount {
            year,
            count: rng.gen_range(5..35),
        })
        .collect()
}

/// Paper counts per patent-citation bucket.
pub fn patent_citations() -> Vec<PatentCitation> {
    let mut rng = rand::thread_rng();
    (0..15)
        .map(|patent_count| PatentCitation {
            patent_count,
            paper_count: rng.gen_range(5..55),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_counts_series() {
        let series = paper_counts();
        assert_eq!(series.len(), 10);
        assert_eq!(series[0].year, 2014);
        assert_eq!(series[9].year, 2023);
        for point in &series {
            assert!((5..35).contains(&point.count));
        }
    }

    #[test]
    fn test_patent_citations_series() {
        let series = patent_citations();
        assert_eq!(series.len(), 15);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.patent_count, i as i64);
            assert!((5..55).contains(&point.paper_count));
        }
    }

    #[test]
    fn test_patent_citation_keys_are_camel_case() {
        let value = serde_json::to_value(PatentCitation {
            patent_count: 1,
            paper_count: 7,
        })
        .unwrap();
        assert!(value.get("patentCount").is_some());
        assert!(value.get("paperCount").is_some());
    }
}
