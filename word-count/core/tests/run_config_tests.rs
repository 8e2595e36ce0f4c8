use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use word_count_core::run_config::parse_worker_list;
use word_count_core::{
    run_word_count, ChunkPolicy, ConfigError, DispatchError, DistributedCount, LocalEndpoint,
    RunConfig, RunError, RunReport, WordCountTable, WorkerEndpoint, WorkerFailure,
};

// ============================================================
// RunConfig
// ============================================================

#[test]
fn test_load_reads_every_field() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "input_path": "corpus.txt",
            "workers": ["http://10.0.0.1:6001", "http://10.0.0.2:6002"],
            "num_workers": 8,
            "top_n": 5,
            "chunk_policy": "fold_remainder"
        }}"#
    )
    .unwrap();

    let config = RunConfig::load(file.path()).unwrap();

    assert_eq!(config.input_path, PathBuf::from("corpus.txt"));
    assert_eq!(config.workers.len(), 2);
    assert_eq!(config.num_workers, 8);
    assert_eq!(config.top_n, 5);
    assert_eq!(config.chunk_policy, ChunkPolicy::FoldRemainder);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "top_n": 3 }}"#).unwrap();

    let config = RunConfig::load(file.path()).unwrap();

    assert_eq!(config.top_n, 3);
    assert_eq!(config.num_workers, 4);
    assert_eq!(config.chunk_policy, ChunkPolicy::Truncate);
    assert!(config.workers.is_empty());
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    assert!(matches!(
        RunConfig::load(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = RunConfig::load_or_default(&PathBuf::from("/definitely/not/here.json"));
    assert_eq!(config, RunConfig::default());
}

#[test]
fn test_worker_override_replaces_configured_list() {
    let mut config = RunConfig {
        workers: vec!["http://old:1".to_string()],
        ..RunConfig::default()
    };

    config.apply_worker_override(Some("http://a:6001, http://b:6002,"));
    assert_eq!(config.workers, vec!["http://a:6001", "http://b:6002"]);

    config.apply_worker_override(Some(" , "));
    assert_eq!(config.workers, vec!["http://a:6001", "http://b:6002"]);

    config.apply_worker_override(None);
    assert_eq!(config.workers.len(), 2);
}

#[test]
fn test_workers_or_uses_defaults_only_when_empty() {
    let config = RunConfig::default();
    assert_eq!(config.workers_or(&["localhost:6001"]), vec!["localhost:6001"]);

    let config = RunConfig {
        workers: parse_worker_list("h1:1,h2:2"),
        ..RunConfig::default()
    };
    assert_eq!(config.workers_or(&["localhost:6001"]), vec!["h1:1", "h2:2"]);
}

// ============================================================
// RunReport
// ============================================================

fn sample_count(elapsed: Duration) -> DistributedCount {
    let table: WordCountTable = [("the", 10), ("a", 7), ("of", 7), ("zebra", 1)]
        .into_iter()
        .collect();
    DistributedCount {
        table,
        elapsed,
        succeeded: vec!["w0".to_string()],
        failures: vec![WorkerFailure {
            worker: "w1".to_string(),
            reason: DispatchError::Connect("refused".to_string()),
        }],
    }
}

#[test]
fn test_report_lists_top_words_and_totals() {
    let report = RunReport::new(&sample_count(Duration::from_secs(2)), 4 * 1024 * 1024, 3);
    let rendered = report.to_string();

    assert_eq!(report.unique_words, 4);
    assert!(rendered.contains("Top 3 words:\nthe: 10\na: 7\nof: 7\n"));
    assert!(rendered.contains("Total unique words: 4"));
    assert!(rendered.contains("Elapsed time: 2.0000 seconds"));
    assert!(rendered.contains("Data size: 4194304 bytes"));
    assert!(rendered.contains("Throughput: 2.0000 MB/s"));
    assert!(rendered.contains("Failed workers: 1"));
    assert!(!rendered.contains("zebra"));
}

#[test]
fn test_zero_elapsed_has_no_throughput() {
    let report = RunReport::new(&sample_count(Duration::ZERO), 100, 20);

    assert_eq!(report.throughput_bytes_per_sec(), None);
    assert!(!report.to_string().contains("Throughput"));
}

// ============================================================
// run_word_count
// ============================================================

#[tokio::test]
async fn test_run_word_count_reads_corpus_and_counts() {
    let mut corpus = tempfile::NamedTempFile::new().unwrap();
    write!(corpus, "to be or\nnot to be\nthat is\nthe question").unwrap();

    let config = RunConfig {
        input_path: corpus.path().to_path_buf(),
        top_n: 2,
        ..RunConfig::default()
    };
    let workers: Vec<std::sync::Arc<dyn WorkerEndpoint>> = (0..2)
        .map(|i| std::sync::Arc::new(LocalEndpoint::new(i)) as std::sync::Arc<dyn WorkerEndpoint>)
        .collect();

    let report = run_word_count(&config, &workers).await.unwrap();

    assert_eq!(report.top_words, vec![("be".to_string(), 2), ("to".to_string(), 2)]);
    assert_eq!(report.unique_words, 8);
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_run_word_count_reports_missing_corpus() {
    let config = RunConfig {
        input_path: PathBuf::from("/no/such/corpus.txt"),
        ..RunConfig::default()
    };
    let workers: Vec<std::sync::Arc<dyn WorkerEndpoint>> =
        vec![std::sync::Arc::new(LocalEndpoint::new(0)) as std::sync::Arc<dyn WorkerEndpoint>];

    let result = run_word_count(&config, &workers).await;

    assert!(matches!(result, Err(RunError::Config(ConfigError::Io { .. }))));
}
