use assert_cmd::Command;

#[test]
fn test_full_run_writes_all_transcripts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let results_dir = temp_dir.path().join("results");

    let mut cmd = Command::cargo_bin("patternlab").unwrap();
    cmd.arg("--results-dir")
        .arg(&results_dir)
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "All design patterns demonstrated successfully!",
        ));

    for filename in [
        "observer_stock_market.txt",
        "strategy_payment.txt",
        "factory_vehicles.txt",
        "singleton_config.txt",
        "adapter_media.txt",
        "decorator_coffee.txt",
        "summary.txt",
    ] {
        assert!(
            results_dir.join(filename).exists(),
            "expected {} to exist",
            filename
        );
    }
}

#[test]
fn test_observer_transcript_content() {
    let temp_dir = tempfile::tempdir().unwrap();
    let results_dir = temp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("patternlab").unwrap();
    cmd.arg("-d").arg(&results_dir).assert().success();

    let content =
        std::fs::read_to_string(results_dir.join("observer_stock_market.txt")).unwrap();
    assert!(content.contains("[StockTracker Pro] Stock AAPL price updated: $148.75"));
    assert!(content.contains("[TradingBot] Selling AAPL at high price $152.30"));
    assert!(content.contains("[TradingBot] Buying AAPL at low price $95.80"));
}

#[test]
fn test_decorator_transcript_shows_the_classic_total() {
    let temp_dir = tempfile::tempdir().unwrap();
    let results_dir = temp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("patternlab").unwrap();
    cmd.arg("-d").arg(&results_dir).assert().success();

    let content = std::fs::read_to_string(results_dir.join("decorator_coffee.txt")).unwrap();
    assert!(content.contains("Simple coffee, milk, sugar - $3.25"));
}

#[test]
fn test_adapter_transcript_handles_unsupported_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    let results_dir = temp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("patternlab").unwrap();
    cmd.arg("-d").arg(&results_dir).assert().success();

    let content = std::fs::read_to_string(results_dir.join("adapter_media.txt")).unwrap();
    assert!(content.contains("Playing MP3 file: song.mp3"));
    assert!(content.contains("Format avi not supported by any player"));
}

#[test]
fn test_summary_has_roster_and_timestamp() {
    let temp_dir = tempfile::tempdir().unwrap();
    let results_dir = temp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("patternlab").unwrap();
    cmd.arg("-d").arg(&results_dir).assert().success();

    let summary = std::fs::read_to_string(results_dir.join("summary.txt")).unwrap();
    assert!(summary.contains("DESIGN PATTERNS DEMONSTRATION SUMMARY"));
    assert!(summary.contains("Generated on:"));
    assert!(summary.contains("BEHAVIORAL PATTERNS:"));
    assert!(summary.contains("Singleton Pattern - Configuration Manager"));
    assert!(summary.contains("  - factory_vehicles.txt"));
}

#[test]
fn test_runs_in_cwd_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("patternlab").unwrap();
    cmd.current_dir(temp_dir.path()).assert().success();

    assert!(temp_dir.path().join("results").join("summary.txt").exists());
}
