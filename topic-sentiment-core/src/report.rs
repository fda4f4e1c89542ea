//! Markdown report of one analysis run.

use crate::{
    aggregator::{
        ColumnSummary,
        CorrelationMatrix,
        GroupStats,
        StatisticsBundle,
        Summary,
        TypeComparison,
        VarianceTenor,
    },
    record::ScoredRecord,
    terms::TermFrequency,
};

const MAJORITY_PERCENTAGE: f64 = 50.0;
const NEGATIVE_ATTENTION_PERCENTAGE: f64 = 30.0;
const POSITIVE_LEVERAGE_PERCENTAGE: f64 = 60.0;

pub fn report_file_name(topic: &str) -> String {
    format!("{}_sentiment_report.md", file_stem(topic))
}

pub fn results_file_name(topic: &str) -> String {
    format!("{}_sentiment_results.csv", file_stem(topic))
}

pub fn statistics_file_name(topic: &str) -> String {
    format!("{}_sentiment_statistics.json", file_stem(topic))
}

fn file_stem(topic: &str) -> String {
    topic.replace(' ', "_")
}

pub fn render_report(topic: &str, stats: &StatisticsBundle, terms: &[TermFrequency]) -> String {
    let categories = &stats.categories;
    let mut report = format!("# Comprehensive Sentiment Analysis Report for {}\n\n", topic);

    report.push_str("## Executive Summary\n\n");
    report.push_str(&format!(
        "This comprehensive sentiment analysis report examines {} pieces of content related to '{}'. ",
        stats.total_count,
        topic,
    ));
    report.push_str(&format!(
        "The analysis reveals that {:.1}% of the content expresses positive sentiment, {:.1}% expresses negative sentiment, and {:.1}% is neutral.\n\n",
        categories.positive.percentage,
        categories.negative.percentage,
        categories.neutral.percentage,
    ));

    report.push_str("## 1. Detailed Sentiment Statistics\n\n");

    report.push_str("### 1.1 Overall Distribution\n\n");
    report.push_str(&format!("- **Total Content Analyzed**: {} items\n", stats.total_count));
    report.push_str(&format!("- **Positive Content**: {} items ({:.1}%)\n", categories.positive.count, categories.positive.percentage));
    report.push_str(&format!("- **Negative Content**: {} items ({:.1}%)\n", categories.negative.count, categories.negative.percentage));
    report.push_str(&format!("- **Neutral Content**: {} items ({:.1}%)\n\n", categories.neutral.count, categories.neutral.percentage));

    report.push_str("### 1.2 Average Sentiment Scores\n\n");
    report.push_str(&format!("- **Average Positive Score**: {:.3}\n", categories.positive.average_score));
    report.push_str(&format!("- **Average Negative Score**: {:.3}\n", categories.negative.average_score));
    report.push_str(&format!("- **Average Neutral Score**: {:.3}\n\n", categories.neutral.average_score));

    report.push_str("### 1.3 Statistical Summary of All Sentiment Metrics\n\n");
    report.push_str(&describe_table(&stats.describe));
    report.push('\n');

    report.push_str("### 1.4 Statistical Interpretation\n\n");
    report.push_str(&format!(
        "The overall sentiment towards '{}' is **{}** with an average combined compound score of {:.3}. ",
        topic,
        stats.sentiment_tenor,
        stats.overall_mean,
    ));
    let variance = format_optional(stats.overall_variance);
    report.push_str(&match stats.variance_tenor {
        VarianceTenor::High => format!("The high variance ({}) indicates diverse opinions and polarized views on this topic.\n\n", variance),
        VarianceTenor::Low => format!("The low variance ({}) suggests relatively consistent sentiment across the analyzed content.\n\n", variance),
        VarianceTenor::Moderate => format!("The moderate variance ({}) indicates a reasonable spread of opinions on this topic.\n\n", variance),
    });

    report.push_str("## 2. Content Analysis by Sentiment Category\n\n");

    report.push_str(&format!("### 2.1 Top {} Most Positive Content\n\n", stats.most_positive.len()));
    report.push_str(&records_table(&stats.most_positive));
    report.push('\n');
    report.push_str("**Analysis**: The most positive content typically features enthusiastic language, success stories, or expressions of satisfaction.\n\n");

    report.push_str(&format!("### 2.2 Top {} Most Negative Content\n\n", stats.most_negative.len()));
    report.push_str(&records_table(&stats.most_negative));
    report.push('\n');
    report.push_str("**Analysis**: The most negative content often contains criticism, complaints, or expressions of frustration.\n\n");

    report.push_str("### 2.3 Sentiment by Content Type\n\n");
    report.push_str(&groups_table("type", &stats.by_type));
    report.push('\n');
    if let Some(comparison) = stats.type_comparison {
        report.push_str(match comparison {
            TypeComparison::PostsMorePositive => "**Observation**: Posts tend to be more positive than comments, which may indicate that original content creators are more optimistic, while commenters provide more critical feedback.\n\n",
            TypeComparison::CommentsMorePositive => "**Observation**: Comments tend to be more positive than posts, suggesting that community engagement often involves supportive responses.\n\n",
            TypeComparison::Similar => "**Observation**: Posts and comments show similar sentiment patterns, indicating consistent community attitudes.\n\n",
        });
    }

    report.push_str("### 2.4 Sentiment by Community (Subreddit)\n\n");
    report.push_str(&groups_table("subreddit", &stats.by_community));
    report.push('\n');
    report.push_str(&format!(
        "**Key Findings**: The most positive community is r/{} with an average sentiment of {:.3}, while r/{} shows the most negative sentiment with an average of {:.3}.\n\n",
        stats.most_positive_community.key,
        stats.most_positive_community.mean,
        stats.most_negative_community.key,
        stats.most_negative_community.mean,
    ));

    report.push_str("### 2.5 Sentiment Over Time\n\n");
    report.push_str(&groups_table("date", &stats.over_time));
    report.push('\n');

    report.push_str("## 3. Sentiment Metrics\n\n");

    report.push_str("### 3.1 Sentiment Metrics Correlation\n\n");
    report.push_str(&correlation_table(&stats.correlation));
    report.push('\n');
    report.push_str("This table shows how the different sentiment analysis methods correlate with each other, helping to validate the consistency of the measurements.\n\n");

    report.push_str("### 3.2 Most Frequent Terms\n\n");
    if terms.is_empty() {
        report.push_str("No frequent terms were found in the analyzed content.\n\n");
    } else {
        let rows: Vec<Vec<String>> = terms.iter()
            .map(|v| vec![v.term.clone(), v.count.to_string()])
            .collect();
        report.push_str(&markdown_table(&["term", "count"], &rows));
        report.push('\n');
    }

    report.push_str("## 4. Key Insights and Recommendations\n\n");

    report.push_str("### 4.1 Main Findings\n\n");
    if categories.positive.percentage > MAJORITY_PERCENTAGE {
        report.push_str(&format!(
            "- **Predominantly Positive Reception**: With {:.1}% positive content, '{}' enjoys favorable community sentiment.\n",
            categories.positive.percentage,
            topic,
        ));
    } else if categories.negative.percentage > MAJORITY_PERCENTAGE {
        report.push_str(&format!(
            "- **Concerning Negative Sentiment**: {:.1}% of content expresses negative sentiment, indicating potential issues that need attention.\n",
            categories.negative.percentage,
        ));
    } else {
        report.push_str(&format!(
            "- **Mixed Reception**: The sentiment is fairly balanced with {:.1}% positive and {:.1}% negative content.\n",
            categories.positive.percentage,
            categories.negative.percentage,
        ));
    }
    report.push_str(&format!(
        "- **Community Engagement**: Analysis of {} pieces of content across {} communities provides a comprehensive view.\n",
        stats.total_count,
        stats.by_community.len(),
    ));
    report.push_str(&format!(
        "- **Sentiment Intensity**: The average sentiment scores indicate {} emotional responses to the topic.\n\n",
        stats.intensity_tenor,
    ));

    report.push_str("### 4.2 Recommendations\n\n");
    if categories.negative.percentage > NEGATIVE_ATTENTION_PERCENTAGE {
        report.push_str("- **Address Negative Feedback**: Consider investigating and addressing the concerns raised in negative content.\n");
    }
    if categories.positive.percentage > POSITIVE_LEVERAGE_PERCENTAGE {
        report.push_str("- **Leverage Positive Sentiment**: Build on the positive reception by amplifying successful aspects.\n");
    }
    report.push_str("- **Monitor Trends**: Continue tracking sentiment over time to identify emerging patterns.\n");
    report.push_str("- **Community-Specific Strategies**: Tailor approaches based on the sentiment patterns observed in different communities.\n\n");

    report.push_str("---\n\n");
    report.push_str(&format!(
        "*Report generated by combining a rule-based valence analyzer with a pattern-lexicon polarity analyzer. Analysis based on {} content items.*\n",
        stats.total_count,
    ));

    report
}

fn describe_table(columns: &[ColumnSummary]) -> String {
    let mut headers = vec![""];
    headers.extend(columns.iter().map(|v| v.metric.column_name()));

    let rows = vec![
        statistic_row("count", columns, |v| v.count.to_string()),
        statistic_row("mean", columns, |v| format!("{:.3}", v.mean)),
        statistic_row("std", columns, |v| format_optional(v.std)),
        statistic_row("min", columns, |v| format!("{:.3}", v.min)),
        statistic_row("25%", columns, |v| format!("{:.3}", v.q25)),
        statistic_row("50%", columns, |v| format!("{:.3}", v.median)),
        statistic_row("75%", columns, |v| format!("{:.3}", v.q75)),
        statistic_row("max", columns, |v| format!("{:.3}", v.max)),
    ];

    markdown_table(&headers, &rows)
}

fn statistic_row<F>(label: &str, columns: &[ColumnSummary], value: F) -> Vec<String> where F: Fn(&Summary) -> String {
    let mut row = vec![label.to_owned()];
    row.extend(columns.iter().map(|v| value(&v.summary)));
    row
}

fn records_table(records: &[ScoredRecord]) -> String {
    let rows: Vec<Vec<String>> = records.iter()
        .map(|v| vec![
            v.text.clone(),
            format!("{:.3}", v.combined_compound),
            v.content_type.as_str().to_owned(),
            v.subreddit.clone(),
        ])
        .collect();

    markdown_table(&["text", "combined_compound", "type", "subreddit"], &rows)
}

fn groups_table(key: &str, groups: &[GroupStats]) -> String {
    let rows: Vec<Vec<String>> = groups.iter()
        .map(|v| vec![
            v.key.clone(),
            format!("{:.3}", v.mean),
            v.count.to_string(),
            format_optional(v.std),
        ])
        .collect();

    markdown_table(&[key, "mean", "count", "std"], &rows)
}

fn correlation_table(matrix: &CorrelationMatrix) -> String {
    let mut headers = vec![""];
    headers.extend(matrix.metrics.iter().map(|v| v.column_name()));

    let rows: Vec<Vec<String>> = matrix.metrics.iter()
        .zip(&matrix.values)
        .map(|(metric, values)| {
            let mut row = vec![metric.column_name().to_owned()];
            row.extend(values.iter().map(|v| format_optional(*v)));
            row
        })
        .collect();

    markdown_table(&headers, &rows)
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.3}", value),
        None => "n/a".to_owned(),
    }
}

fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = format!("| {} |\n", headers.iter().map(|v| escape_cell(v)).collect::<Vec<_>>().join(" | "));
    table.push_str(&format!("|{}\n", "---|".repeat(headers.len())));
    for row in rows {
        table.push_str(&format!("| {} |\n", row.iter().map(|v| escape_cell(v)).collect::<Vec<_>>().join(" | ")));
    }
    table
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
