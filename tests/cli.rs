use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn suvat() -> Command {
    Command::cargo_bin("suvat").expect("suvat bin")
}

#[test]
fn solves_free_fall_as_text() {
    suvat()
        .args(["--u", "0", "--a", "9.8", "--t", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(s) : 19.6 m"))
        .stdout(predicate::str::contains("(v) : 19.6 m/s"))
        .stdout(predicate::str::contains("using s = ut + at^2 / 2 and v = u + at"));
}

#[test]
fn long_names_and_negative_values() {
    suvat()
        .args(["--initial-velocity=-5", "--v", "5", "--time", "2", "--format", "csv"])
        .assert()
        .success()
        .stdout("s,u,v,a,t,known\n0,-5,5,5,2,uvt\n");
}

#[test]
fn json_output_parses() {
    let output = suvat()
        .args(["--s", "100", "--u", "0", "--v", "20", "--format", "json"])
        .output()
        .expect("run suvat");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["known"], "suv");
    assert_eq!(value["acceleration"], 2.0);
    assert_eq!(value["time"], 10.0);
}

#[test]
fn wrong_field_counts_fail_with_title() {
    suvat()
        .args(["--u", "0", "--a", "9.8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Three variables needed!"));

    suvat()
        .args(["--s", "1", "--u", "0", "--a", "9.8", "--t", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many variables given!"));
}

#[test]
fn unparsable_and_unsolvable_inputs_fail() {
    suvat()
        .args(["--u", "zero", "--a", "9.8", "--t", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input!"))
        .stderr(predicate::str::contains("'zero'"));

    suvat()
        .args(["--s", "0", "--u", "5", "--v", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot solve!"));
}

#[test]
fn config_file_sets_precision() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("suvat.toml");
    fs::write(&toml_path, "[display]\nprecision = 3\n").expect("write config");

    suvat()
        .args(["--u", "0", "--a", "9.8", "--t", "2", "--config"])
        .arg(&toml_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(s) : 19.600 m"));

    // The flag wins over the file.
    suvat()
        .args(["--u", "0", "--a", "9.8", "--t", "2", "--precision", "1", "--config"])
        .arg(&toml_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(t) : 2.0 s"));
}

#[test]
fn bad_config_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let yaml_path = dir.path().join("suvat.yaml");
    fs::write(&yaml_path, "display:\n  decimals: 3\n").expect("write config");

    suvat()
        .args(["--u", "0", "--a", "9.8", "--t", "2", "--config"])
        .arg(&yaml_path)
        .assert()
        .failure();
}

#[test]
fn shell_reads_commands_from_stdin() {
    Command::cargo_bin("suvat_shell")
        .expect("suvat_shell bin")
        .args(["--precision", "2"])
        .write_stdin("u=0\na=9.8\nt=2\ncalc\nexport csv\nreset\ncalc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(s) : 19.60 m"))
        .stdout(predicate::str::contains("known\n"))
        .stdout(predicate::str::contains("Three variables needed!"));
}

#[test]
fn log_level_and_format_names_are_parsed() {
    suvat()
        .args(["--u", "0", "--a", "9.8", "--t", "2", "--log-level", "OFF", "--format", "JSON"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"known\": \"uat\""))
        .stderr(predicate::str::is_empty());

    suvat()
        .args(["--u", "0", "--a", "9.8", "--t", "2", "--log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--log-level"));

    suvat()
        .args(["--u", "0", "--a", "9.8", "--t", "2", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'xml'"));
}
