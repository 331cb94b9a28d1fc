use serde_json::Value;
use taxview_testing::TestFixture;

fn stdout_json(output: std::process::Output) -> Value {
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn params_json_is_the_ordered_name_array() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("params")
        .output()
        .unwrap();

    let json = stdout_json(output);
    assert_eq!(
        json,
        serde_json::json!([
            "Standard Deduction (Single)",
            "Standard Deduction (Married Filing Jointly)",
            "Child Tax Credit",
            "Estate Tax Exemption",
        ])
    );
}

#[test]
fn show_json_keeps_missing_years_as_null() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("show")
        .arg("Estate Tax Exemption")
        .output()
        .unwrap();

    let json = stdout_json(output);
    let points = json.as_array().expect("expected a JSON array");
    assert_eq!(points.len(), 11);

    let by_year = |year: i64| {
        points
            .iter()
            .find(|p| p["year"] == serde_json::json!(year))
            .unwrap_or_else(|| panic!("no point for year {year}"))
    };

    assert_eq!(by_year(2025)["value"], serde_json::json!(13990000.0));
    assert!(by_year(2030)["value"].is_null());
    assert!(
        points
            .iter()
            .all(|p| p["parameter"] == serde_json::json!("Estate Tax Exemption"))
    );
}

#[test]
fn check_json_reports_shape_and_missing_cells() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("check")
        .output()
        .unwrap();

    let json = stdout_json(output);
    assert_eq!(json["parameters"], serde_json::json!(4));
    assert_eq!(json["years"], serde_json::json!(11));
    assert_eq!(json["first_year"], serde_json::json!(2025));
    assert_eq!(json["last_year"], serde_json::json!(2035));
    assert_eq!(json["missing_cells"], serde_json::json!(1));
}
