use crate::Cli;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

static NEXT_DIR_ID: AtomicUsize = AtomicUsize::new(0);

pub(super) fn parse_cli(args: &[&str]) -> Cli {
    let mut argv = vec!["gqlscan"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

/// Creates a fresh directory under the system temp dir containing `files`.
pub(super) fn temp_dir_with_files(files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gqlscan-cli-tests-{}-{}",
        std::process::id(),
        NEXT_DIR_ID.fetch_add(1, Ordering::SeqCst),
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    for (name, contents) in files {
        std::fs::write(dir.join(name), contents).expect("temp file should be writable");
    }
    dir
}
