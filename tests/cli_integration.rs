use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

const PAST_DAY_LOG: &str = "start,stop\n\
2024-03-04T09:00:00,2024-03-04T17:30:00\n";

#[test]
fn test_init_creates_config_and_empty_log() {
    let sb = Sandbox::new();

    sb.wt().arg("init").assert().success();

    assert_eq!(sb.read_log(), "start,stop\n");
    let conf = std::fs::read_to_string(sb.home().join(".worktime").join("worktime.conf")).unwrap();
    assert!(conf.contains("hours_per_day"));
    assert!(conf.contains("time_log.csv"));
}

#[test]
fn test_start_then_status_then_stop() {
    let sb = Sandbox::new();

    sb.wt()
        .arg("--start")
        .assert()
        .success()
        .stdout(contains("Clocked in at"));

    sb.wt()
        .assert()
        .success()
        .stdout(contains("Working since"))
        .stdout(contains("Worked today:"))
        .stdout(contains("End of day:"));

    sb.wt()
        .arg("--stop")
        .assert()
        .success()
        .stdout(contains("Clocked out at"));

    sb.wt()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Not working"));

    let log = sb.read_log();
    let rows: Vec<&str> = log.lines().skip(1).collect();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].ends_with(','), "session must be closed: {}", rows[0]);
}

#[test]
fn test_start_twice_is_rejected() {
    let sb = Sandbox::new();
    sb.wt().arg("--start").assert().success();
    let before = sb.read_log();

    sb.wt()
        .arg("--start")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("already clocked in"));

    assert_eq!(sb.read_log(), before);
}

#[test]
fn test_stop_on_empty_log_is_rejected() {
    let sb = Sandbox::new();
    sb.wt().arg("init").assert().success();

    sb.wt()
        .arg("--stop")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid state").and(contains("not clocked in")));

    assert_eq!(sb.read_log(), "start,stop\n");
}

#[test]
fn test_conflicting_flags_fail_before_touching_store() {
    let sb = Sandbox::new();

    sb.wt()
        .args(["--start", "--stop"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("cannot be used with"));

    sb.wt().args(["--start", "stats"]).assert().failure().code(2);

    assert!(!sb.log_path().exists());
}

#[test]
fn test_toggle_alternates() {
    let sb = Sandbox::new();

    sb.wt()
        .arg("toggle")
        .assert()
        .success()
        .stdout(contains("Clocked in"));
    sb.wt()
        .arg("toggle")
        .assert()
        .success()
        .stdout(contains("Clocked out"));

    assert_eq!(sb.read_log().lines().count(), 2);
}

#[test]
fn test_stats_on_empty_log() {
    let sb = Sandbox::new();

    sb.wt()
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(contains("\"Extra hours\""))
        .stdout(contains("\"minutes\": 0"));
}

#[test]
fn test_stats_half_hour_overtime() {
    let sb = Sandbox::new();
    sb.write_log(PAST_DAY_LOG);

    sb.wt()
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Mon 2024-03-04"))
        .stdout(contains("+00h 30m"))
        .stdout(contains("Extra hours"));

    let out = sb.wt().args(["stats", "--json"]).output().unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v[0]["label"], "2024-03-04");
    assert_eq!(v[0]["minutes"], 30);
    assert_eq!(v[1]["label"], "Extra hours");
    assert_eq!(v[1]["minutes"], 30);
}

#[test]
fn test_hours_per_day_override() {
    let sb = Sandbox::new();
    sb.write_log(PAST_DAY_LOG);

    sb.wt()
        .args(["stats", "--hours-per-day", "9"])
        .assert()
        .success()
        .stdout(contains("-00h 30m"));

    sb.wt()
        .args(["stats", "--hours-per-day", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_stats_window_keeps_total() {
    let sb = Sandbox::new();
    sb.write_log(
        "start,stop\n\
         2024-03-04T09:00:00,2024-03-04T18:00:00\n\
         2024-03-05T09:00:00,2024-03-05T17:00:00\n\
         2024-03-06T09:00:00,2024-03-06T16:00:00\n",
    );

    sb.wt()
        .args(["stats", "-n", "1"])
        .assert()
        .success()
        .stdout(contains("2024-03-06"))
        .stdout(contains("2024-03-04").not())
        .stdout(contains("Extra hours"));
}

#[test]
fn test_legacy_log_is_accepted() {
    let sb = Sandbox::new();
    // header without newline, space separated timestamps
    sb.write_log("start,stop\n2024-03-04 09:00:00,2024-03-04 17:30:00");

    sb.wt()
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(contains("\"minutes\": 30"));
}

#[test]
fn test_corrupt_log_is_reported() {
    let sb = Sandbox::new();
    sb.write_log("start,stop\nnot a date,\n");

    sb.wt()
        .arg("status")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unreadable").and(contains("line 2")));

    sb.wt().arg("--start").assert().failure().code(1);
    assert_eq!(sb.read_log(), "start,stop\nnot a date,\n");
}

#[test]
fn test_config_print_shows_overrides() {
    let sb = Sandbox::new();

    sb.wt()
        .args(["config", "--print", "--hours-per-day", "7.5"])
        .assert()
        .success()
        .stdout(contains("hours_per_day: 7.5"))
        .stdout(contains("summary_days: 10"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let sb = Sandbox::new();
    let dir = sb.home().join(".worktime");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("worktime.conf"), "hours_per_day: [oops").unwrap();

    sb.wt()
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("Failed to load configuration"));
}

#[test]
fn test_exclude_today_overrides_config() {
    let sb = Sandbox::new();
    let dir = sb.home().join(".worktime");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("worktime.conf"), "include_today: true\n").unwrap();
    sb.write_log(PAST_DAY_LOG);
    sb.wt().arg("--start").assert().success();

    let rows = |extra: &[&str]| -> Vec<serde_json::Value> {
        let out = sb
            .wt()
            .args(["stats", "--json"])
            .args(extra)
            .output()
            .unwrap();
        assert!(out.status.success());
        serde_json::from_slice(&out.stdout).unwrap()
    };

    // configured default: today's open day is listed
    assert_eq!(rows(&[]).len(), 3);
    assert_eq!(rows(&["--include-today"]).len(), 3);

    let without_today = rows(&["--exclude-today"]);
    assert_eq!(without_today.len(), 2);
    assert_eq!(without_today[0]["label"], "2024-03-04");
    assert_eq!(without_today[1]["label"], "Extra hours");
    assert_eq!(without_today[1]["minutes"], 30);
}
