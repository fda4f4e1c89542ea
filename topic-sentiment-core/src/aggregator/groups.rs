use {
    std::collections::BTreeMap,
    serde::Serialize,
    crate::record::{ContentType, ScoredRecord},
    super::describe::{mean, sample_std},
};

/// Combined compound statistics of all records sharing one key.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupStats {
    pub key: String,
    pub mean: f64,
    pub count: usize,
    pub std: Option<f64>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeComparison {
    PostsMorePositive,
    CommentsMorePositive,
    Similar,
}

/// Groups by key in ascending key order.
pub fn group_by<F>(records: &[ScoredRecord], key: F) -> Vec<GroupStats> where F: Fn(&ScoredRecord) -> String {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record.combined_compound);
    }

    groups.into_iter()
        .filter_map(|(key, scores)| Some(GroupStats {
            mean: mean(&scores)?,
            count: scores.len(),
            std: sample_std(&scores),
            key,
        }))
        .collect()
}

pub fn by_content_type(records: &[ScoredRecord]) -> Vec<GroupStats> {
    group_by(records, |record| record.content_type.as_str().to_owned())
}

pub fn by_community(records: &[ScoredRecord]) -> Vec<GroupStats> {
    group_by(records, |record| record.subreddit.clone())
}

/// Groups by the UTC calendar day the record was created on.
pub fn by_day(records: &[ScoredRecord]) -> Vec<GroupStats> {
    group_by(records, |record| record.created.date_naive().format("%Y-%m-%d").to_string())
}

/// Group with the highest mean at the three decimals the report shows; the first one in key
/// order wins a tie.
pub fn highest_mean(groups: &[GroupStats]) -> Option<&GroupStats> {
    groups.iter().fold(None, |best: Option<&GroupStats>, group| match best {
        Some(best) if round3(best.mean) >= round3(group.mean) => Some(best),
        _ => Some(group),
    })
}

/// Group with the lowest mean at three decimals; the first one in key order wins a tie.
pub fn lowest_mean(groups: &[GroupStats]) -> Option<&GroupStats> {
    groups.iter().fold(None, |best: Option<&GroupStats>, group| match best {
        Some(best) if round3(best.mean) <= round3(group.mean) => Some(best),
        _ => Some(group),
    })
}

/// Compares posts against comments on their means rounded to three decimals, the precision
/// the report shows them with. `None` unless both kinds are present.
pub fn compare_types(groups: &[GroupStats]) -> Option<TypeComparison> {
    let mean_of = |content_type: ContentType| groups.iter()
        .find(|group| group.key == content_type.as_str())
        .map(|group| round3(group.mean));

    let posts = mean_of(ContentType::Post)?;
    let comments = mean_of(ContentType::Comment)?;

    Some(if posts > comments {
        TypeComparison::PostsMorePositive
    } else if comments > posts {
        TypeComparison::CommentsMorePositive
    } else {
        TypeComparison::Similar
    })
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use {
        chrono::{TimeZone, Utc},
        super::*,
    };

    fn record(subreddit: &str, content_type: ContentType, day: u32, score: f64) -> ScoredRecord {
        ScoredRecord::builder()
            .id(format!("{}-{}", subreddit, score))
            .content_type(content_type)
            .subreddit(subreddit)
            .created(Utc.with_ymd_and_hms(2023, 1, day, 23, 30, 0).unwrap())
            .combined_compound(score)
            .build()
    }

    #[test]
    fn groups_are_sorted_by_key() {
        let records = vec![
            record("python", ContentType::Post, 1, 0.5),
            record("AI", ContentType::Post, 1, 0.9),
            record("programming", ContentType::Comment, 2, -0.1),
            record("python", ContentType::Comment, 2, 0.1),
        ];

        let groups = by_community(&records);
        let keys: Vec<&str> = groups.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["AI", "programming", "python"]);

        let python = &groups[2];
        assert_eq!(python.count, 2);
        assert!((python.mean - 0.3).abs() < 1e-9);
        assert!((python.std.unwrap() - 0.28284271247461906).abs() < 1e-9);
    }

    #[test]
    fn singleton_group_has_no_std() {
        let groups = by_community(&[record("rust", ContentType::Post, 1, 0.4)]);
        assert_eq!(groups[0].std, None);
    }

    #[test]
    fn content_types_use_their_wire_names() {
        let records = vec![
            record("a", ContentType::Post, 1, 0.4),
            record("a", ContentType::Comment, 1, -0.2),
        ];
        let keys: Vec<String> = by_content_type(&records).into_iter().map(|v| v.key).collect();
        assert_eq!(keys, vec!["comment", "post"]);
    }

    #[test]
    fn days_are_utc_calendar_days() {
        let records = vec![
            record("a", ContentType::Post, 3, 0.2),
            record("a", ContentType::Post, 1, 0.4),
            record("a", ContentType::Post, 1, 0.0),
        ];
        let groups = by_day(&records);

        assert_eq!(groups[0].key, "2023-01-01");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].key, "2023-01-03");
    }

    #[test]
    fn superlatives_prefer_the_first_key_on_ties() {
        let records = vec![
            record("b", ContentType::Post, 1, 0.5),
            record("a", ContentType::Post, 1, 0.5),
            record("c", ContentType::Post, 1, -0.5),
            record("d", ContentType::Post, 1, -0.5),
        ];
        let groups = by_community(&records);

        assert_eq!(highest_mean(&groups).unwrap().key, "a");
        assert_eq!(lowest_mean(&groups).unwrap().key, "c");
        assert_eq!(highest_mean(&[]), None);
    }

    #[test]
    fn superlatives_compare_the_displayed_precision() {
        let records = vec![
            record("a", ContentType::Post, 1, 0.5001),
            record("b", ContentType::Post, 1, 0.5004),
            record("c", ContentType::Post, 1, -0.2001),
            record("d", ContentType::Post, 1, -0.2004),
        ];
        let groups = by_community(&records);

        assert_eq!(highest_mean(&groups).unwrap().key, "a");
        assert_eq!(lowest_mean(&groups).unwrap().key, "c");

        let records = vec![
            record("a", ContentType::Post, 1, 0.5001),
            record("b", ContentType::Post, 1, 0.5006),
        ];
        assert_eq!(highest_mean(&by_community(&records)).unwrap().key, "b");
    }

    #[test]
    fn type_comparison_needs_both_types() {
        let posts_only = by_content_type(&[record("a", ContentType::Post, 1, 0.5)]);
        assert_eq!(compare_types(&posts_only), None);

        let mixed = by_content_type(&[
            record("a", ContentType::Post, 1, 0.5),
            record("a", ContentType::Comment, 1, 0.1),
        ]);
        assert_eq!(compare_types(&mixed), Some(TypeComparison::PostsMorePositive));

        let close = by_content_type(&[
            record("a", ContentType::Post, 1, 0.1001),
            record("a", ContentType::Comment, 1, 0.1002),
        ]);
        assert_eq!(compare_types(&close), Some(TypeComparison::Similar));
    }
}
