use std::fmt::Write;

// Segment colors, cycled around the wheel
pub const WHEEL_COLORS: [&str; 4] = [
    "#ef4444", // red-500
    "#f59e0b", // amber-500
    "#10b981", // emerald-500
    "#3b82f6", // blue-500
];

// Face color once every word is learned
pub const EMPTY_WHEEL_COLOR: &str = "#4b5563"; // gray-600

/// CSS background for a wheel face with `word_count` segments.
///
/// The gradient starts half a segment early so each label sits in the middle
/// of its color band.
pub fn conic_gradient(word_count: usize) -> String {
    if word_count == 0 {
        return EMPTY_WHEEL_COLOR.to_string();
    }
    let seg = 360.0 / word_count as f64;
    let mut css = format!("conic-gradient(from -{}deg", seg / 2.0);
    for i in 0..word_count {
        let color = WHEEL_COLORS[i % WHEEL_COLORS.len()];
        _ = write!(css, ", {} {}deg {}deg", color, i as f64 * seg, (i + 1) as f64 * seg);
    }
    css.push(')');
    css
}

/// Rotation of the label for segment `index`.
#[inline]
pub fn label_angle(index: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    index as f64 * (360.0 / word_count as f64)
}

#[inline]
pub fn rotate_transform(deg: f64) -> String {
    format!("rotate({}deg)", deg)
}
