use std::path::PathBuf;
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_disc-compare"))
}

fn disc_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("discs")
}

#[test]
fn test_seven_discs_exit_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("figures");
    let output = binary()
        .arg("compare")
        .arg("--disc-dir")
        .arg(disc_dir())
        .arg("--out")
        .arg(&out)
        .args(["putter_a", "midrange_b", "driver_c", "putter_a", "midrange_b", "driver_c", "putter_a"])
        .output()
        .expect("failed to run disc-compare");

    assert!(!output.status.success());
    assert!(!out.exists(), "no output directory may be created");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("7 discs given"), "stderr: {stderr}");
}

#[test]
fn test_coeffs_has_no_disc_limit() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("coeffs");
    let output = binary()
        .arg("coeffs")
        .arg("--disc-dir")
        .arg(disc_dir())
        .arg("--out")
        .arg(&out)
        .args(["putter_a", "midrange_b", "driver_c", "putter_a", "midrange_b", "driver_c", "nowhere"])
        .output()
        .expect("failed to run disc-compare");

    // All seven are loaded; only the unknown one fails.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("discs given"), "stderr: {stderr}");
    assert!(stderr.contains("disc `nowhere` could not be loaded"), "stderr: {stderr}");
    assert!(!out.exists());
}

#[test]
fn test_unknown_units_fail() {
    let tmp = tempfile::tempdir().unwrap();
    let output = binary()
        .args(["compare", "--units", "furlongs", "--out"])
        .arg(tmp.path())
        .arg("--disc-dir")
        .arg(disc_dir())
        .arg("putter_a")
        .output()
        .expect("failed to run disc-compare");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown unit system"), "stderr: {stderr}");
}

#[test]
fn test_list_bundled_discs() {
    let output = binary()
        .arg("list")
        .arg("--disc-dir")
        .arg(disc_dir())
        .output()
        .expect("failed to run disc-compare");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["driver_c", "midrange_b", "putter_a"]);
}
