use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn work_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("report-tools-cli-{tag}-{nanos}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn compute_statistics_prints_saves_and_warns_on_stdout() {
    let dir = work_dir("stats");
    let out = Command::new(env!("CARGO_BIN_EXE_compute_statistics"))
        .current_dir(&dir)
        .arg(fixture("numbers_with_bad_line.txt"))
        .arg(fixture("missing.txt"))
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Warning: Skipped invalid data at line 3"));
    assert!(stdout.contains("Warning: Skipping file - File not found:"));
    assert!(stdout.contains("\tnumbers_with_bad_line.txt\n"));
    assert!(stdout.contains("Results saved to: results/p1/StatisticsResults.txt"));
    assert!(stdout.contains("Skipped 1 file(s):"));

    let saved = fs::read_to_string(dir.join("results/p1/StatisticsResults.txt")).unwrap();
    assert!(saved.starts_with("\tnumbers_with_bad_line.txt\nCount\t3\n"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn convert_numbers_fails_when_no_file_is_usable() {
    let dir = work_dir("convert");
    let out = Command::new(env!("CARGO_BIN_EXE_convert_numbers"))
        .current_dir(&dir)
        .arg(fixture("empty.txt"))
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Error: No valid files to process"));
    assert!(!dir.join("results").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn compute_statistics_fails_when_results_cannot_be_saved() {
    let dir = work_dir("blocked");
    fs::write(dir.join("results"), "not a directory").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_compute_statistics"))
        .current_dir(&dir)
        .arg(fixture("population.txt"))
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("\tpopulation.txt\nCount\t8\n"));
    assert!(stdout.contains("Error: "));
    assert!(!stdout.contains("Results saved to:"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn count_words_requires_at_least_one_file() {
    let out = Command::new(env!("CARGO_BIN_EXE_count_words"))
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn count_words_writes_its_own_results_file() {
    let dir = work_dir("words");
    let out = Command::new(env!("CARGO_BIN_EXE_count_words"))
        .current_dir(&dir)
        .arg(fixture("words.txt"))
        .output()
        .unwrap();

    assert!(out.status.success());
    let saved = fs::read_to_string(dir.join("results/p3/WordCountResults.txt")).unwrap();
    assert!(saved.starts_with("# words.txt\nWord\tCount\nHello\t2\n"));

    let _ = fs::remove_dir_all(dir);
}
