//! Selection over the long-format point sequence.

use taxview_types::ParamPoint;

/// The ordered subsequence of points whose parameter equals `parameter`.
/// Empty when nothing matches; never an error.
pub fn filter_parameter(points: &[ParamPoint], parameter: &str) -> Vec<ParamPoint> {
    points
        .iter()
        .filter(|point| point.parameter == parameter)
        .cloned()
        .collect()
}

/// Distinct parameter names in first-occurrence order; the set offered to
/// the user as selectable.
pub fn parameter_names(points: &[ParamPoint]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for point in points {
        if !names.iter().any(|name| name == &point.parameter) {
            names.push(point.parameter.clone());
        }
    }
    names
}
