use topic_sentiment_core::{
    aggregator::{aggregate, SentimentTenor},
    category::SentimentCategory,
    error::AggregationError,
    record::RawRecord,
    report::render_report,
    scorer::{score_records, Analyzers},
    terms::term_frequencies,
};

const RECORDS: &str = r#"{"id":"p1","type":"post","text":"I love Python, it's the best language!","created":"2023-01-01T09:00:00Z","subreddit":"python","url":"https://reddit.com/p1"}
{"id":"c1","type":"comment","text":"I hate bugs, they are so annoying.","created":"2023-01-01T10:00:00Z","subreddit":"python","url":""}
{"id":"c2","type":"comment","text":null,"created":"2023-01-01T11:00:00Z","subreddit":"python","url":""}
{"id":"p2","type":"post","text":"The sky is blue.","created":"2023-01-02T09:00:00Z","subreddit":"learnpython","url":""}
{"id":"c3","type":"comment","text":"","created":"2023-01-02T12:00:00Z","subreddit":"learnpython","url":""}
{"id":"p3","type":"post","text":"Great docs, really helpful community :)","created":"2023-01-03T08:00:00Z","subreddit":"programming","url":""}"#;

fn raw_records() -> Vec<RawRecord> {
    RECORDS.lines()
        .enumerate()
        .map(|(i, line)| RawRecord::from_json_line(i + 1, line).unwrap())
        .collect()
}

#[test]
fn scores_aggregates_and_reports() {
    let scored = score_records(&Analyzers::default(), &raw_records());

    let ids: Vec<&str> = scored.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "c1", "p2", "c3", "p3"]);

    assert_eq!(scored[0].category(), SentimentCategory::Positive);
    assert_eq!(scored[1].category(), SentimentCategory::Negative);
    assert_eq!(scored[2].category(), SentimentCategory::Neutral);
    assert_eq!(scored[3].combined_compound, 0.0);
    assert_eq!(scored[4].category(), SentimentCategory::Positive);

    let stats = aggregate(&scored).unwrap();
    assert_eq!(stats.total_count, 5);
    assert_eq!(stats.categories.positive.count, 2);
    assert_eq!(stats.categories.negative.count, 1);
    assert_eq!(stats.categories.neutral.count, 2);
    assert_eq!(stats.most_positive.len(), 5);
    assert_eq!(stats.most_negative[0].id, "c1");
    assert_eq!(stats.by_community.len(), 3);
    assert_eq!(stats.over_time.len(), 3);
    assert_eq!(stats.most_positive_community.key, "programming");
    assert_eq!(stats.sentiment_tenor, SentimentTenor::from_mean(stats.overall_mean));

    let terms = term_frequencies(scored.iter().map(|v| v.text.as_str()), 10);
    let report = render_report("Python Programming", &stats, &terms);
    assert!(report.contains("examines 5 pieces of content related to 'Python Programming'"));
    assert!(report.contains("r/programming"));
}

#[test]
fn nothing_to_aggregate_when_no_record_has_text() {
    let records: Vec<RawRecord> = raw_records().into_iter()
        .filter(|v| v.text.is_none())
        .collect();
    assert_eq!(records.len(), 1);

    let scored = score_records(&Analyzers::default(), &records);
    assert!(scored.is_empty());
    assert!(matches!(aggregate(&scored), Err(AggregationError::EmptyCorpus)));
}
