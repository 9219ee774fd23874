use assert_cmd::Command;

fn dataset() -> &'static str {
    r#"{ "matrix": [[0, 5], [5, 0]], "names": ["Alpha", "Beta"] }"#
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn stderr_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}

#[test]
fn renders_svg_to_stdout() {
    let assert = Command::cargo_bin("chordial-cli")
        .unwrap()
        .write_stdin(dataset())
        .assert()
        .success();
    let out = stdout_of(assert);
    assert!(out.starts_with("<svg"));
    assert!(out.contains("group-arc"));
    assert!(out.contains("Alpha"));
}

#[test]
fn writes_svg_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    let output = dir.path().join("diagram.svg");
    std::fs::write(&input, dataset()).unwrap();

    Command::cargo_bin("chordial-cli")
        .unwrap()
        .arg("--out")
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("class=\"ribbon\""));
}

#[test]
fn legend_flag_overrides_the_dataset() {
    let assert = Command::cargo_bin("chordial-cli")
        .unwrap()
        .args(["--legend", "on"])
        .write_stdin(dataset())
        .assert()
        .success();
    assert!(stdout_of(assert).contains(">Legend<"));
}

#[test]
fn size_mismatch_fails_with_the_typed_message() {
    let assert = Command::cargo_bin("chordial-cli")
        .unwrap()
        .write_stdin(r#"{ "matrix": [[0]], "names": ["A", "B"] }"#)
        .assert()
        .failure();
    assert!(stderr_of(assert).contains("matrix size (1) does not match names length (2)"));
}

#[test]
fn unknown_flag_prints_usage() {
    let assert = Command::cargo_bin("chordial-cli")
        .unwrap()
        .arg("--bogus")
        .assert()
        .code(2);
    assert!(stderr_of(assert).contains("USAGE:"));
}
