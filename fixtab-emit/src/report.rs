use fixtab_analysis::ErrorReport;
use std::fmt::Write;

/// Render the per-class analysis as the fixed-width diagnostic listing.
///
/// One header line with the drop budget, then one record per class. Meant
/// for human review while choosing a format and threshold; the column
/// layout is kept stable so listings from different runs diff cleanly, but
/// no machine consumes it.
pub fn render(report: &ErrorReport) -> String {
    let mut out = String::new();
    let budget = &report.budget;
    let _ = writeln!(
        out,
        "drop {} / {}+{}",
        budget.total, budget.first, budget.second
    );

    for c in &report.classes {
        let _ = writeln!(
            out,
            "Thres={:2} X<={:10} x<={:13.5} y>={:7.4} Y>={:10} \
             err_X<={:7.2}% err_Y<={:7.2}% err<={:7.2}% ",
            c.class,
            c.x_int_hi,
            c.x_hi,
            c.y_lo,
            c.y_int_lo,
            c.input_error * 100.0,
            c.square_error * 100.0,
            c.worst_error() * 100.0,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtab_analysis::analyze;
    use fixtab_math::QFormat;

    fn q20_12_listing() -> String {
        render(&analyze(QFormat::new(12, 32).unwrap()).unwrap())
    }

    #[test]
    fn test_header_line() {
        assert!(q20_12_listing().starts_with("drop 6 / 3+3\n"));
    }

    #[test]
    fn test_one_record_per_class() {
        assert_eq!(q20_12_listing().lines().count(), 33);
    }

    #[test]
    fn test_threshold_class_record() {
        // Pinned record for the shipped Q20.12 threshold class
        let listing = q20_12_listing();
        let line = listing.lines().nth(14).unwrap();
        assert_eq!(
            line,
            "Thres=13 X<=     16383 x<=      3.99976 y>= 0.5000 Y>=      2048 \
             err_X<=   0.77% err_Y<=   0.97% err<=   0.97% "
        );
    }

    #[test]
    fn test_records_fixed_width() {
        let listing = q20_12_listing();
        let widths: Vec<usize> = listing.lines().skip(1).map(|l| l.len()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
