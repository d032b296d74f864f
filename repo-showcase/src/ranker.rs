//! Popularity ranking and featured selection.

use crate::normalizer::ProjectRecord;

/// Number of most-starred records that are featured.
pub const FEATURED_COUNT: usize = 3;

/// Orders records by stars, descending, and features the first [`FEATURED_COUNT`].
///
/// The sort is stable: records with equal stars keep their input order.
/// Every other record has `featured` cleared. With fewer records than
/// [`FEATURED_COUNT`], all of them are featured.
#[must_use]
pub fn rank(mut records: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
    // `sort_by` is stable
    records.sort_by(|a, b| b.stars.cmp(&a.stars));

    for (index, record) in records.iter_mut().enumerate() {
        record.featured = index < FEATURED_COUNT;
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, stars: u64) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            stars,
            ..Default::default()
        }
    }

    fn featured_names(records: &[ProjectRecord]) -> Vec<&str> {
        records
            .iter()
            .filter(|r| r.featured)
            .map(|r| r.name.as_str())
            .collect()
    }

    #[test]
    fn features_top_three_by_stars() {
        let records = vec![
            record("a", 5),
            record("b", 50),
            record("c", 1),
            record("d", 20),
            record("e", 30),
        ];

        let ranked = rank(records);

        let order: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["b", "e", "d", "a", "c"]);
        assert_eq!(featured_names(&ranked), vec!["b", "e", "d"]);
    }

    #[test]
    fn clears_stale_featured_flags() {
        let mut stale = record("old", 0);
        stale.featured = true;
        let records = vec![stale, record("x", 3), record("y", 2), record("z", 1)];

        let ranked = rank(records);

        assert_eq!(featured_names(&ranked), vec!["x", "y", "z"]);
    }

    #[test]
    fn features_all_when_fewer_than_three() {
        let ranked = rank(vec![record("a", 1), record("b", 0)]);
        assert!(ranked.iter().all(|r| r.featured));

        let ranked = rank(vec![record("solo", 0)]);
        assert!(ranked[0].featured);
    }

    #[test]
    fn equal_stars_keep_input_order() {
        let records = vec![
            record("first", 10),
            record("top", 99),
            record("second", 10),
            record("third", 10),
        ];

        let ranked = rank(records);

        let order: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["top", "first", "second", "third"]);
        assert_eq!(featured_names(&ranked), vec!["top", "first", "second"]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(rank(Vec::new()).is_empty());
    }
}
