use rstest::rstest;
use toothsync_config::load_toml;

fn base_config(detection: &str) -> String {
    format!(
        r#"
[wheel]
tooth_map = [2, 1, 1]

[timing]
tick_hz = 20000

[detection]
{detection}
"#
    )
}

#[test]
fn accepts_full_valid_config() {
    let toml = r#"
[wheel]
tooth_map = [2, 1, 1, 1, 1, 1]

[timing]
tick_hz = 20000

[detection]
max_accel_rad_s2 = 3000.0
error_rate = 0.02
normalization = "linear"

[logging]
level = "debug"

[sim]
ticks_per_position = 150
events = 64
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("valid config should pass");
    assert_eq!(cfg.wheel.tooth_map.len(), 6);
    assert_eq!(cfg.sim.events, 64);
}

#[test]
fn rejects_empty_tooth_map() {
    let toml = r#"
[wheel]
tooth_map = []

[timing]
tick_hz = 20000
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject empty tooth map");
    assert!(format!("{err}").contains("wheel.tooth_map must not be empty"));
}

#[test]
fn rejects_zero_width_gap() {
    let toml = r#"
[wheel]
tooth_map = [2, 0, 1]

[timing]
tick_hz = 20000
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject zero gap");
    assert!(format!("{err}").contains("wheel.tooth_map entries must be >= 1"));
}

#[test]
fn rejects_zero_tick_hz() {
    let toml = r#"
[wheel]
tooth_map = [2, 1, 1]

[timing]
tick_hz = 0
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject tick_hz=0");
    assert!(format!("{err}").contains("timing.tick_hz must be > 0"));
}

#[rstest]
#[case("error_rate = 0.0")]
#[case("error_rate = 1.0")]
#[case("error_rate = 1.5")]
#[case("error_rate = -0.1")]
fn rejects_out_of_range_error_rate(#[case] detection: &str) {
    let cfg = load_toml(&base_config(detection)).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject error_rate");
    assert!(format!("{err}").contains("detection.error_rate must be in (0, 1)"));
}

#[rstest]
#[case("max_accel_rad_s2 = 0.0")]
#[case("max_accel_rad_s2 = -10.0")]
#[case("max_accel_rad_s2 = inf")]
#[case("max_accel_rad_s2 = nan")]
fn rejects_non_positive_or_non_finite_max_accel(#[case] detection: &str) {
    let cfg = load_toml(&base_config(detection)).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject max_accel");
    assert!(format!("{err}").contains("detection.max_accel_rad_s2"));
}

#[test]
fn parses_softmax_normalization() {
    let cfg = load_toml(&base_config("normalization = \"softmax\"")).expect("parse TOML");
    cfg.validate().expect("softmax config is valid");
    assert_eq!(
        cfg.detection.normalization,
        toothsync_config::NormalizationMode::Softmax
    );
}

#[test]
fn rejects_unknown_normalization() {
    assert!(load_toml(&base_config("normalization = \"quadratic\"")).is_err());
}
