//! Plain-text charts for terminal output.

use crate::dashboard::Histogram;

/// Horizontal bar chart, one line per label. Bars are scaled so the largest
/// value spans `width` characters; labels are left-aligned to a common column.
pub fn bar_chart_ascii<S: AsRef<str>>(labels: &[S], values: &[f64], width: usize) -> Vec<String> {
    if width == 0 || labels.is_empty() {
        return Vec::new();
    }
    let pad = labels
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let max = values
        .iter()
        .cloned()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    labels
        .iter()
        .zip(values)
        .map(|(label, &value)| {
            let bar_len = if max > 0.0 && value.is_finite() && value > 0.0 {
                ((value / max) * width as f64).round() as usize
            } else {
                0
            };
            let label = label.as_ref();
            let fill = pad - label.chars().count();
            format!(
                "{label}{} | {} {value:.2}",
                " ".repeat(fill),
                "#".repeat(bar_len)
            )
        })
        .collect()
}

/// One line per bin: `[lo, hi) ### (count)`. The bin at `marker` is flagged
/// with `<`, used to show where a single case falls.
pub fn histogram_ascii(histogram: &Histogram, width: usize, marker: Option<usize>) -> Vec<String> {
    if width == 0 || histogram.counts.is_empty() {
        return Vec::new();
    }
    let max_count = histogram.counts.iter().copied().max().unwrap_or(0);
    let last = histogram.counts.len() - 1;
    histogram
        .counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let bar_len = if max_count == 0 {
                0
            } else {
                (c * width) / max_count
            };
            let close = if i == last { ']' } else { ')' };
            let mut line = format!(
                "[{:6.2}, {:6.2}{close} {} ({c})",
                histogram.edges[i],
                histogram.edges[i + 1],
                "#".repeat(bar_len)
            );
            if marker == Some(i) {
                line.push_str(" <");
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bars_scale_to_width() {
        let lines = bar_chart_ascii(&["a", "bbb"], &[1.0, 2.0], 10);
        assert_eq!(lines, ["a   | ##### 1.00", "bbb | ########## 2.00"]);
    }

    #[test]
    fn zero_and_negative_values_have_no_bar() {
        let lines = bar_chart_ascii(&["x", "y"], &[0.0, -1.0], 5);
        assert_eq!(lines, ["x |  0.00", "y |  -1.00"]);
        assert!(bar_chart_ascii::<&str>(&[], &[], 5).is_empty());
    }

    #[test]
    fn histogram_marks_bin() {
        let h = Histogram {
            edges: vec![0.0, 1.0, 2.0],
            counts: vec![2, 4],
        };
        let lines = histogram_ascii(&h, 4, Some(0));
        assert_eq!(lines[0], "[  0.00,   1.00) ## (2) <");
        assert_eq!(lines[1], "[  1.00,   2.00] #### (4)");
    }
}
