//! 求人票入力テスト

use portfolio_ai::input::read_job_description;
use tempfile::tempdir;

/// --jd が --jd-file より優先される
#[test]
fn test_inline_text_wins() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jd.txt");
    std::fs::write(&path, "from file").unwrap();

    let text = read_job_description(Some("inline".to_string()), Some(&path)).unwrap();
    assert_eq!(text, "inline");
}

/// ファイルから読み込む
#[test]
fn test_read_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jd.txt");
    std::fs::write(&path, "Senior Rust Engineer\n- Tokio\n- Leptos\n").unwrap();

    let text = read_job_description(None, Some(&path)).unwrap();
    assert!(text.starts_with("Senior Rust Engineer"));
    assert!(text.contains("Leptos"));
}

/// どちらも指定がなければ空文字
#[test]
fn test_no_input_is_empty() {
    assert_eq!(read_job_description(None, None).unwrap(), "");
}
