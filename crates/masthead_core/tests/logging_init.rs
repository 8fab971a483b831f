use masthead_core::{init_logging, logging_status, Author, LogSettings, Magazine};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let dir_str = log_dir.path().to_str().unwrap();
    let other_str = other_dir.path().to_str().unwrap();

    let settings = LogSettings::new("info", dir_str).unwrap();
    init_logging(&settings).expect("first init should succeed");
    init_logging(&settings).expect("same settings should be idempotent");

    let level_error = init_logging(&LogSettings::new("debug", dir_str).unwrap())
        .expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging(&LogSettings::new("info", other_str).unwrap())
        .expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    let author = Author::new("Jane Doe").unwrap();
    let magazine = Magazine::new("TechNow", "Technology").unwrap();
    author.add_article(&magazine, "Logged Article").unwrap();
}
