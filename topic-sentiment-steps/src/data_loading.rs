use {
    std::{fs::{File, read_to_string}, path::Path},
    anyhow::{Context, Result},
    chrono::{DateTime, Utc},
    indicatif::ProgressBar,
    serde::Deserialize,
    serde_json::Value,
    tracing::info,
    topic_sentiment_core::record::{lenient_timestamp, ContentType, RawRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Csv,
    JsonArray,
    JsonLines,
}

/// One row of a csv export. A csv cell is always a string, so an empty `text` is empty text.
#[derive(Deserialize, Debug)]
struct CsvRecordRow {
    id: String,
    #[serde(rename = "type")]
    content_type: ContentType,
    #[serde(default)]
    text: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    created: DateTime<Utc>,
    subreddit: String,
    #[serde(default)]
    url: String,
}

impl InputFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|v| v.to_str()).map(|v| v.to_lowercase()).as_deref() {
            Some("csv") => Self::Csv,
            Some("json") => Self::JsonArray,
            _ => Self::JsonLines,
        }
    }
}

impl From<CsvRecordRow> for RawRecord {
    fn from(row: CsvRecordRow) -> Self {
        RawRecord::builder()
            .id(row.id)
            .content_type(row.content_type)
            .text(row.text)
            .created(row.created)
            .subreddit(row.subreddit)
            .url(row.url)
            .build()
    }
}

pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let format = InputFormat::from_path(path);
    info!("loading records from {} as {:?}", path.display(), format);

    let records = match format {
        InputFormat::Csv => load_csv(path),
        InputFormat::JsonArray => load_json_array(path),
        InputFormat::JsonLines => load_json_lines(path),
    }.with_context(|| format!("failed to load records from {}", path.display()))?;

    info!("loaded {} records", records.len());
    Ok(records)
}

fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_reader(File::open(path)?);
    let rows: Vec<_> = reader.deserialize::<CsvRecordRow>().collect();

    let pb = ProgressBar::new(rows.len() as u64);
    let mut records: Vec<RawRecord> = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let row = row.with_context(|| format!("row {} is malformed", index + 1))?;
        records.push(row.into());
        pb.inc(1);
    }
    pb.finish();

    Ok(records)
}

fn load_json_array(path: &Path) -> Result<Vec<RawRecord>> {
    let values: Vec<Value> = serde_json::from_str(&read_to_string(path)?)?;

    let pb = ProgressBar::new(values.len() as u64);
    let mut records: Vec<RawRecord> = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        records.push(RawRecord::from_json_value(index + 1, value)?);
        pb.inc(1);
    }
    pb.finish();

    Ok(records)
}

fn load_json_lines(path: &Path) -> Result<Vec<RawRecord>> {
    let content = read_to_string(path)?;
    let lines: Vec<(usize, &str)> = content.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    let pb = ProgressBar::new(lines.len() as u64);
    let mut records: Vec<RawRecord> = Vec::with_capacity(lines.len());
    for (index, line) in lines {
        records.push(RawRecord::from_json_line(index + 1, line)?);
        pb.inc(1);
    }
    pb.finish();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use {
        std::fs,
        chrono::TimeZone,
        tempfile::tempdir,
        super::*,
    };

    #[test]
    fn format_follows_extension() {
        assert_eq!(InputFormat::from_path(Path::new("records.csv")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("records.JSON")), InputFormat::JsonArray);
        assert_eq!(InputFormat::from_path(Path::new("records.jsonl")), InputFormat::JsonLines);
        assert_eq!(InputFormat::from_path(Path::new("records")), InputFormat::JsonLines);
    }

    #[test]
    fn loads_json_lines_keeping_missing_text_apart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        fs::write(&path, concat!(
            r#"{"id":"1","type":"post","text":"hello","created":"2023-01-01T00:00:00Z","subreddit":"rust","url":"u1"}"#, "\n",
            "\n",
            r#"{"id":"2","type":"comment","text":7,"created":"2023-01-01T00:00:00Z","subreddit":"rust","url":""}"#, "\n",
        )).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text.as_deref(), Some("hello"));
        assert_eq!(records[1].text, None);
    }

    #[test]
    fn malformed_line_names_its_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        fs::write(&path, concat!(
            r#"{"id":"1","type":"post","text":"hello","created":"2023-01-01T00:00:00Z","subreddit":"rust","url":""}"#, "\n",
            r#"{"id":"2","type":"video","text":"hello","created":"2023-01-01T00:00:00Z","subreddit":"rust","url":""}"#, "\n",
        )).unwrap();

        let err = load_records(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("record #2 is malformed"));
    }

    #[test]
    fn loads_json_arrays() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, r#"[
            {"id":"1","type":"post","text":"","created":"2023-01-01T00:00:00Z","subreddit":"rust","url":""},
            {"id":"2","type":"comment","created":"2023-01-02T00:00:00Z","subreddit":"rust","url":""}
        ]"#).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records[0].text.as_deref(), Some(""));
        assert_eq!(records[1].text, None);
    }

    #[test]
    fn loads_csv_with_empty_text_as_empty_string() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(&path, "id,type,text,created,subreddit,url\n\
                          1,post,\"Rust, finally\",2023-01-01T00:00:00Z,rust,https://example.com\n\
                          2,comment,,2023-01-02T00:00:00Z,rust,\n").unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text.as_deref(), Some("Rust, finally"));
        assert_eq!(records[0].url, "https://example.com");
        assert_eq!(records[1].text.as_deref(), Some(""));
        assert_eq!(records[1].content_type, ContentType::Comment);
    }

    #[test]
    fn loads_csv_with_naive_and_epoch_timestamps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(&path, "id,type,text,created,subreddit,url\n\
                          1,post,hello,2023-01-01 09:00:00,rust,u\n\
                          2,comment,hi,2023-01-01 09:00:00.500000,rust,\n\
                          3,comment,hey,1672563600,rust,\n").unwrap();

        let records = load_records(&path).unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(records[0].created, expected);
        assert_eq!(records[1].created, expected + chrono::Duration::milliseconds(500));
        assert_eq!(records[2].created, expected);
    }

    #[test]
    fn loads_json_lines_with_naive_and_epoch_timestamps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        fs::write(&path, concat!(
            r#"{"id":"1","type":"post","text":"hello","created":1672563600.0,"subreddit":"rust","url":""}"#, "\n",
            r#"{"id":"2","type":"post","text":"hello","created":"2023-01-01 09:00:00","subreddit":"rust","url":""}"#, "\n",
        )).unwrap();

        let records = load_records(&path).unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(records[0].created, expected);
        assert_eq!(records[1].created, expected);
    }

    #[test]
    fn unreadable_timestamp_names_its_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(&path, "id,type,text,created,subreddit,url\n1,post,hello,last tuesday,rust,\n").unwrap();

        let err = load_records(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("row 1 is malformed"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_records(&dir.path().join("nope.jsonl")).is_err());
    }
}
