use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oblique_throw"))
        .args(args)
        .output()
        .expect("Failed to execute oblique_throw")
}

#[test]
fn horizontal_throw_prints_both_zero_points() {
    let output = run_cli(&["-a", "0", "--no-plot"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("zero point: y(x) = 0"));
    assert!(stdout.contains("20.192751093846088 meters"));
    assert!(stdout.contains("zero point: y(t) = 0"));
    assert!(stdout.contains("2.019275109384609 seconds"));
}

#[test]
fn custom_parameters_are_echoed() {
    let output = run_cli(&[
        "--alpha",
        "-15",
        "--initial_velocity",
        "4.5",
        "--g_acceleration",
        "1.62",
        "--initial_height",
        "3",
        "--no-plot",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1.62 m/s²"));
    assert!(stdout.contains("4.5 m/s"));
    assert!(stdout.contains("3.0 m"));
    assert!(stdout.contains("-15.0°"));
}

#[test]
fn missing_angle_prints_usage_and_exits_cleanly() {
    let output = run_cli(&["--no-plot"]);

    assert!(output.status.success(), "Missing angle is not a failure");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--alpha"));
    assert!(!stdout.contains("zero point"));
}

#[test]
fn vertical_launch_is_rejected_without_partial_output() {
    let output = run_cli(&["-a", "90", "--no-plot"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
    assert!(output.stdout.is_empty());
}

#[test]
fn non_positive_gravity_is_rejected() {
    let output = run_cli(&["-a", "30", "-g", "0", "--no-plot"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Gravitational acceleration must be positive"));
}

#[test]
fn launch_below_ground_has_no_solution() {
    let output = run_cli(&["-a", "0", "-i", "1", "-y", "-10", "--no-plot"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No real solution"));
}
