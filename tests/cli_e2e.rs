//! End-to-end CLI tests for chatstats.
//!
//! These tests run the actual binary against backup fixtures and check the
//! files it writes.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// Monday 2024-01-15 09:00:00 UTC
const MON_0900: i64 = 1_705_309_200_000;

// ============================================================================
// Test Fixtures
// ============================================================================

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let backup = format!(
        r#"{{
  "conversations": [
    [
      {{"date": {}, "body": "hi there", "address": "+15550100", "type": 1}},
      {{"date": {}, "body": "hi", "address": "+15550100", "type": 2}},
      {{"date": "{}", "body": null, "address": "+15550100", "type": 1}}
    ],
    [
      {{"date": {}, "body": "second thread 😀"}}
    ]
  ]
}}"#,
        MON_0900,
        MON_0900 + 5 * 60_000,
        MON_0900 + 29 * 3_600_000,
        MON_0900
    );
    fs::write(dir.path().join("sms.json"), backup).unwrap();

    let all_null = format!(
        r#"{{"conversations": [[{{"date": {0}}}, {{"date": {0}, "body": ""}}]]}}"#,
        MON_0900
    );
    fs::write(dir.path().join("all_null.json"), all_null).unwrap();

    let no_date = r#"{"conversations": [[{"body": "when?"}]]}"#;
    fs::write(dir.path().join("no_date.json"), no_date).unwrap();

    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    fs::write(dir.path().join("stop.txt"), "hi\n").unwrap();
    fs::write(dir.path().join("empty_stop.txt"), "# nothing here\n\n").unwrap();

    dir
}

fn chatstats_cmd() -> Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstats"));
    cmd.env_remove("CHATSTATS_LOG");
    Command::from_std(cmd)
}

fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn run(dir: &TempDir, input: &str, extra: &[&str]) -> assert_cmd::assert::Assert {
    analysis_cmd(dir, input, extra).assert()
}

fn analysis_cmd(dir: &TempDir, input: &str, extra: &[&str]) -> Command {
    let mut args = vec![
        path(dir, input).to_str().unwrap().to_string(),
        path(dir, "norm.csv").to_str().unwrap().to_string(),
        path(dir, "corpus.csv").to_str().unwrap().to_string(),
        "--utc".to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    let mut cmd = chatstats_cmd();
    cmd.args(args);
    cmd
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_writes_records_and_corpus() {
        let dir = setup_fixtures();

        run(&dir, "sms.json", &[])
            .success()
            .stdout(predicate::str::contains("Found 3 messages"))
            .stdout(predicate::str::contains("Messages:   3"))
            .stdout(predicate::str::contains("Done"));

        let norm = fs::read_to_string(path(&dir, "norm.csv")).unwrap();
        assert_eq!(
            norm,
            "datetime,hour,month,weekday,length\n\
             01/15/24 09:00:00,9,1,0,8\n\
             01/15/24 09:05:00,9,1,0,2\n"
        );

        // "there" is an English stopword
        let corpus = fs::read_to_string(path(&dir, "corpus.csv")).unwrap();
        assert_eq!(corpus, "word,count\nhi,2\n");
    }

    #[test]
    fn test_prints_busiest_slot() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &[])
            .success()
            .stdout(predicate::str::contains("Busiest:    09:00, Monday, January"));
    }

    #[test]
    fn test_prints_top_words() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["--no-stopwords"])
            .success()
            .stdout(predicate::str::contains("Top words: hi (2), there (1)"));
    }

    #[test]
    fn test_no_stopwords() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["--no-stopwords"]).success();

        let corpus = fs::read_to_string(path(&dir, "corpus.csv")).unwrap();
        assert_eq!(corpus, "word,count\nhi,2\nthere,1\n");
    }

    #[test]
    fn test_custom_stopwords() {
        let dir = setup_fixtures();
        let stop = path(&dir, "stop.txt");
        run(&dir, "sms.json", &["--stopwords", stop.to_str().unwrap()]).success();

        let corpus = fs::read_to_string(path(&dir, "corpus.csv")).unwrap();
        assert_eq!(corpus, "word,count\nthere,1\n");
    }

    #[test]
    fn test_second_conversation_with_emoji() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["--conversation", "1"])
            .success()
            .stdout(predicate::str::contains("Found 1 messages"));

        let corpus = fs::read_to_string(path(&dir, "corpus.csv")).unwrap();
        assert!(corpus.contains(":grinning_face:,1"));
        assert!(corpus.contains("thread,1"));
    }

    #[test]
    fn test_keep_emoji_drops_glyphs() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["-c", "1", "--keep-emoji"]).success();

        let corpus = fs::read_to_string(path(&dir, "corpus.csv")).unwrap();
        assert!(!corpus.contains("grinning"));
    }
}

// ============================================================================
// Optional Outputs
// ============================================================================

mod optional_outputs {
    use super::*;

    #[test]
    fn test_daily_and_stats_files() {
        let dir = setup_fixtures();
        let daily = path(&dir, "daily.csv");
        let stats = path(&dir, "stats.json");

        run(
            &dir,
            "sms.json",
            &[
                "--daily",
                daily.to_str().unwrap(),
                "--stats",
                stats.to_str().unwrap(),
            ],
        )
        .success();

        assert_eq!(
            fs::read_to_string(&daily).unwrap(),
            "date,count\n01/15/24,2\n"
        );

        let stats: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&stats).unwrap()).unwrap();
        assert_eq!(stats["count"], 3);
        assert_eq!(stats["hour_histogram"][9], 2);
        assert_eq!(stats["hour_histogram"][14], 1);
        assert_eq!(stats["weekday_histogram"][1], 1);
        assert_eq!(stats["month_histogram"][1], 3);
    }

    #[test]
    fn test_json_format() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["--format", "json", "--no-stopwords"]).success();

        let norm: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path(&dir, "norm.csv")).unwrap()).unwrap();
        assert_eq!(norm.as_array().unwrap().len(), 2);
        assert_eq!(norm[0]["datetime"], "01/15/24 09:00:00");

        let corpus: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path(&dir, "corpus.csv")).unwrap()).unwrap();
        assert_eq!(corpus[0]["word"], "hi");
        assert_eq!(corpus[0]["count"], 2);
    }

    #[test]
    fn test_format_follows_records_extension() {
        let dir = setup_fixtures();
        let args = [
            path(&dir, "sms.json").to_str().unwrap().to_string(),
            path(&dir, "norm.json").to_str().unwrap().to_string(),
            path(&dir, "corpus.json").to_str().unwrap().to_string(),
            "--utc".to_string(),
        ];
        chatstats_cmd()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Format:   JSON"));

        let norm: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path(&dir, "norm.json")).unwrap()).unwrap();
        assert_eq!(norm[1]["datetime"], "01/15/24 09:05:00");
    }

    #[test]
    fn test_semicolon_delimiter() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["-d", ";"]).success();

        let norm = fs::read_to_string(path(&dir, "norm.csv")).unwrap();
        assert!(norm.starts_with("datetime;hour;month;weekday;length\n"));
    }

    #[test]
    fn test_offset_changes_hours() {
        let dir = setup_fixtures();
        let args = [
            path(&dir, "sms.json").to_str().unwrap().to_string(),
            path(&dir, "norm.csv").to_str().unwrap().to_string(),
            path(&dir, "corpus.csv").to_str().unwrap().to_string(),
            "--offset".to_string(),
            "+02:00".to_string(),
        ];
        chatstats_cmd()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("+02:00"));

        let norm = fs::read_to_string(path(&dir, "norm.csv")).unwrap();
        assert!(norm.contains("01/15/24 11:00:00,11,1,0,8"));
    }
}

// ============================================================================
// Edge Cases and Errors
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_all_null_writes_headers() {
        let dir = setup_fixtures();
        run(&dir, "all_null.json", &[])
            .success()
            .stdout(predicate::str::contains("Messages:   2"));

        assert_eq!(
            fs::read_to_string(path(&dir, "norm.csv")).unwrap(),
            "datetime,hour,month,weekday,length\n"
        );
        assert_eq!(
            fs::read_to_string(path(&dir, "corpus.csv")).unwrap(),
            "word,count\n"
        );
    }

    #[test]
    fn test_missing_date_fails() {
        let dir = setup_fixtures();
        run(&dir, "no_date.json", &[])
            .failure()
            .stderr(predicate::str::contains("has no timestamp"));
    }

    #[test]
    fn test_conversation_out_of_range() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["--conversation", "9"])
            .failure()
            .stderr(predicate::str::contains("Conversation #9 not found"));
    }

    #[test]
    fn test_invalid_json() {
        let dir = setup_fixtures();
        run(&dir, "broken.json", &[])
            .failure()
            .stderr(predicate::str::contains("SMS backup JSON"));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = setup_fixtures();
        run(&dir, "does_not_exist.json", &[])
            .failure()
            .stderr(predicate::str::contains("❌ Error: IO error"))
            .stderr(predicate::str::contains("run failed").not());
    }

    #[test]
    fn test_missing_arguments_shows_usage() {
        chatstats_cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_invalid_offset() {
        let dir = setup_fixtures();
        let args = [
            path(&dir, "sms.json").to_str().unwrap().to_string(),
            path(&dir, "norm.csv").to_str().unwrap().to_string(),
            path(&dir, "corpus.csv").to_str().unwrap().to_string(),
            "--offset".to_string(),
            "noon".to_string(),
        ];
        chatstats_cmd()
            .args(args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid UTC offset"));
    }
}

// ============================================================================
// Logging
// ============================================================================

mod logging {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &[])
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_verbose_emits_debug_events() {
        let dir = setup_fixtures();
        run(&dir, "sms.json", &["-v"])
            .success()
            .stderr(predicate::str::contains("aggregated stats"))
            .stderr(predicate::str::contains("built corpus"))
            .stdout(predicate::str::contains("aggregated stats").not());
    }

    #[test]
    fn test_env_filter_overrides_verbose() {
        let dir = setup_fixtures();
        analysis_cmd(&dir, "sms.json", &["-v"])
            .env("CHATSTATS_LOG", "off")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_env_filter_enables_debug() {
        let dir = setup_fixtures();
        analysis_cmd(&dir, "sms.json", &[])
            .env("CHATSTATS_LOG", "chatstats=debug")
            .assert()
            .success()
            .stderr(predicate::str::contains("normalized records"));
    }

    #[test]
    fn test_empty_stopword_file_warns() {
        let dir = setup_fixtures();
        let stop = path(&dir, "empty_stop.txt");
        run(&dir, "sms.json", &["--stopwords", stop.to_str().unwrap()])
            .success()
            .stderr(predicate::str::contains("stopword file contains no words"));

        // nothing filtered
        let corpus = fs::read_to_string(path(&dir, "corpus.csv")).unwrap();
        assert_eq!(corpus, "word,count\nhi,2\nthere,1\n");
    }
}
