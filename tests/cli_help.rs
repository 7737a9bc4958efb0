use std::process::Command;

#[test]
fn test_help_mentions_routes_subcommand() {
    let bin = env!("CARGO_BIN_EXE_stagehand");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("routes"),
        "help output should mention the routes subcommand; got:\n{}",
        stdout
    );
    assert!(stdout.contains("--config"));
}
