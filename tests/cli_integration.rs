use assert_cmd::Command;
use predicates::prelude::*;

fn zont() -> Command {
    let mut cmd = Command::cargo_bin("zont").unwrap();
    // Keep the platform config dir out of the picture.
    let temp_dir = std::env::temp_dir().join("zont-cli-tests");
    cmd.env("ZONT_CONFIG_DIR", temp_dir);
    cmd
}

#[test]
fn converts_between_aliases() {
    zont()
        .args(["2024-01-15", "15:00", "UTC", "to", "EST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3:00 PM UTC"))
        .stdout(predicate::str::contains("10:00 AM EST"));
}

#[test]
fn annotates_a_forward_day_shift() {
    zont()
        .args(["2024-01-15", "23:30", "EST", "to", "JST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1:30 PM JST (+1 day)"));
}

#[test]
fn annotates_a_backward_day_shift() {
    zont()
        .args(["2024-01-15", "09:30", "JST", "to", "EST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7:30 PM EST (-1 day)"));
}

#[test]
fn accepts_full_identifiers() {
    zont()
        .args(["15:30", "UTC", "to", "Asia/Tokyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asia/Tokyo"));
}

#[test]
fn converts_now_without_failing() {
    zont()
        .args(["now", "America/New_York", "to", "Europe/London"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→"));
}

#[test]
fn alias_case_does_not_matter() {
    zont()
        .args(["2024-01-15", "15:00", "utc", "to", "est"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3:00 PM utc"));
}

#[test]
fn malformed_time_reports_and_fails() {
    zont()
        .args(["banana", "EST", "to", "PST"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse time"));
}

#[test]
fn out_of_range_time_reports_and_fails() {
    zont()
        .args(["25:99", "EST", "to", "PST"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time value out of range"));
}

#[test]
fn unknown_zone_suggests_candidates() {
    zont()
        .args(["3pm", "Nowherelandia", "to", "PST"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown timezone: Nowherelandia"))
        .stderr(predicate::str::contains("did you mean"));
}

#[test]
fn missing_to_keyword_is_a_usage_error() {
    zont()
        .args(["3pm", "EST", "PST"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: zont"));
}

#[test]
fn no_arguments_prints_help() {
    zont()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("zont 3pm EST to PST"));
}

#[test]
fn version_flag_reports_the_package_version() {
    zont()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zont"));
}
