use weir::point::Point;
use weir::regression::errors::RegressionError;
use weir::regression::interpolant::InterpolationStrategy;
use weir::regression::pav::{IsotonicRegression, PavCfg, PavMode};
use weir::spline::monotone::ExtrapolationStrategy;
use weir::spline::traits::Interpolator;

type PavResult = Result<(), Box<dyn std::error::Error>>;

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn a_single_point_interpolates_as_a_constant() -> PavResult {
    let reg = IsotonicRegression::increasing(&[Point::new(2.3, 4.2)])?;

    let forward = reg.interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Tangent)?;
    assert!(approx_eq(forward.eval(7623.2), 4.2));

    let inverse =
        reg.inverse_interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Tangent)?;
    assert!(approx_eq(inverse.eval(361.2), 2.3));
    Ok(())
}

#[test]
fn sorts_points_by_x() -> PavResult {
    let unsorted = points(&[(5.0, 3.0), (3.0, 1.0), (4.0, 2.0)]);
    let sorted = points(&[(3.0, 1.0), (4.0, 2.0), (5.0, 3.0)]);

    let reg = IsotonicRegression::increasing(&unsorted)?;
    assert_eq!(reg.isotonic_points(), sorted.as_slice());
    Ok(())
}

#[test]
fn merges_points_with_the_same_x() -> PavResult {
    let input = points(&[(1.0, 5.0), (1.0, 6.0), (3.0, 10.0)]);
    let expected = vec![Point::with_weight(1.0, 5.5, 2.0), Point::new(3.0, 10.0)];

    let reg = IsotonicRegression::increasing(&input)?;
    assert_eq!(reg.isotonic_points(), expected.as_slice());
    Ok(())
}

#[test]
fn backtracks_to_merge_earlier_points() -> PavResult {
    let input = points(&[(1.0, 5.0), (2.0, 6.0), (3.0, 1.0)]);
    let expected = vec![Point::with_weight(2.0, (5.0 + 6.0 + 1.0) / 3.0, 3.0)];

    let reg = IsotonicRegression::increasing(&input)?;
    assert_eq!(reg.isotonic_points(), expected.as_slice());
    Ok(())
}

#[test]
fn leaves_an_increasing_set_unchanged() -> PavResult {
    let increasing = points(&[(3.0, 1.0), (4.0, 2.0), (5.0, 3.0)]);
    let reg = IsotonicRegression::increasing(&increasing)?;
    assert_eq!(reg.isotonic_points(), increasing.as_slice());
    Ok(())
}

#[test]
fn merges_a_single_violating_pair() -> PavResult {
    let input = points(&[(1.0, 2.0), (2.0, 1.0), (3.0, 5.0)]);
    let expected = vec![Point::with_weight(1.5, 1.5, 2.0), Point::new(3.0, 5.0)];

    let reg = IsotonicRegression::increasing(&input)?;
    assert_eq!(reg.isotonic_points(), expected.as_slice());
    Ok(())
}

#[test]
fn merges_equal_y_values_in_increasing_mode() -> PavResult {
    let input = points(&[(1.0, 2.0), (2.0, 2.0), (3.0, 5.0)]);
    let expected = vec![Point::with_weight(1.5, 2.0, 2.0), Point::new(3.0, 5.0)];

    let reg = IsotonicRegression::increasing(&input)?;
    assert_eq!(reg.isotonic_points(), expected.as_slice());
    Ok(())
}

#[test]
fn collapses_a_strictly_decreasing_set_in_increasing_mode() -> PavResult {
    let input = points(&[(1.0, 5.0), (2.0, 4.0), (3.0, 3.0)]);
    let expected = vec![Point::with_weight(2.0, 4.0, 3.0)];

    let reg = IsotonicRegression::increasing(&input)?;
    assert_eq!(reg.isotonic_points(), expected.as_slice());
    Ok(())
}

#[test]
fn leaves_a_decreasing_set_unchanged_in_decreasing_mode() -> PavResult {
    let decreasing = points(&[(1.0, 5.0), (2.0, 4.0), (3.0, 3.0)]);
    let cfg = PavCfg::new().set_mode(PavMode::Decreasing);
    let reg = IsotonicRegression::new(&decreasing, cfg)?;
    assert_eq!(reg.isotonic_points(), decreasing.as_slice());
    Ok(())
}

#[test]
fn merges_equal_y_values_in_decreasing_mode() -> PavResult {
    let input = points(&[(1.0, 5.0), (2.0, 2.0), (3.0, 2.0)]);
    let expected = vec![Point::new(1.0, 5.0), Point::with_weight(2.5, 2.0, 2.0)];

    let reg = IsotonicRegression::decreasing(&input)?;
    assert_eq!(reg.isotonic_points(), expected.as_slice());
    Ok(())
}

#[test]
fn merges_points_below_the_minimum_x_spacing() -> PavResult {
    let input = points(&[(0.0, 1.0), (5.0e-7, 2.0), (1.0, 3.0)]);
    let reg = IsotonicRegression::increasing(&input)?;

    assert_eq!(reg.isotonic_points().len(), 2);
    assert!(approx_eq(reg.isotonic_points()[0].x, 2.5e-7));
    assert!(approx_eq(reg.isotonic_points()[0].y, 1.5));
    assert_eq!(reg.isotonic_points()[0].weight, 2.0);
    Ok(())
}

#[test]
fn honors_a_custom_minimum_x_spacing() -> PavResult {
    let input = points(&[(0.0, 1.0), (0.4, 2.0), (1.0, 3.0)]);
    let cfg = PavCfg::new().set_x_min_spacing(0.5)?;

    let reg = IsotonicRegression::new(&input, cfg)?;
    let expected = vec![Point::with_weight(0.2, 1.5, 2.0), Point::new(1.0, 3.0)];
    assert_eq!(reg.isotonic_points(), expected.as_slice());
    Ok(())
}

#[test]
fn rejects_an_invalid_minimum_x_spacing() {
    assert!(matches!(
        PavCfg::new().set_x_min_spacing(-1.0).unwrap_err(),
        RegressionError::InvalidXMinSpacing { got } if got == -1.0
    ));
    assert!(matches!(
        PavCfg::new().set_x_min_spacing(f64::NAN).unwrap_err(),
        RegressionError::InvalidXMinSpacing { .. }
    ));
}

#[test]
fn rejects_empty_input() {
    assert!(matches!(
        IsotonicRegression::increasing(&[]).unwrap_err(),
        RegressionError::EmptyInput
    ));
}

#[test]
fn rejects_non_finite_coordinates() {
    let input = [Point::new(0.0, 1.0), Point::new(f64::NAN, 2.0)];
    assert!(matches!(
        IsotonicRegression::increasing(&input).unwrap_err(),
        RegressionError::NonFinitePoint { .. }
    ));
}

#[test]
fn rejects_non_positive_weights() {
    let input = [Point::with_weight(0.0, 1.0, 0.0)];
    assert!(matches!(
        IsotonicRegression::increasing(&input).unwrap_err(),
        RegressionError::InvalidWeight { got } if got == 0.0
    ));
}

#[test]
fn conserves_total_weight() -> PavResult {
    let input = vec![
        Point::with_weight(1.0, 9.0, 0.5),
        Point::with_weight(2.0, 3.0, 2.0),
        Point::with_weight(3.0, 7.0, 1.5),
        Point::with_weight(4.0, 2.0, 3.0),
        Point::with_weight(5.0, 8.0, 1.0),
    ];
    let total: f64 = input.iter().map(|p| p.weight).sum();

    let reg = IsotonicRegression::increasing(&input)?;
    let reduced_total: f64 = reg.isotonic_points().iter().map(|p| p.weight).sum();
    assert!(approx_eq(total, reduced_total));
    Ok(())
}

#[test]
fn result_is_independent_of_input_order() -> PavResult {
    let orderings = [
        points(&[(1.0, 5.0), (2.0, 6.0), (3.0, 1.0), (4.0, 4.0)]),
        points(&[(4.0, 4.0), (3.0, 1.0), (2.0, 6.0), (1.0, 5.0)]),
        points(&[(2.0, 6.0), (4.0, 4.0), (1.0, 5.0), (3.0, 1.0)]),
    ];

    let reference = IsotonicRegression::increasing(&orderings[0])?;
    for ordering in &orderings[1..] {
        let reg = IsotonicRegression::increasing(ordering)?;
        assert_eq!(reg.isotonic_points(), reference.isotonic_points());
    }
    Ok(())
}

#[test]
fn reduced_points_are_monotonic() -> PavResult {
    let input = points(&[
        (0.0, 1.2),
        (1.0, 0.8),
        (2.0, 2.1),
        (3.0, 1.9),
        (4.0, 3.4),
        (5.0, 3.3),
        (6.0, 4.0),
    ]);

    let increasing = IsotonicRegression::increasing(&input)?;
    for pair in increasing.isotonic_points().windows(2) {
        assert!(pair[0].y <= pair[1].y);
    }

    let decreasing = IsotonicRegression::decreasing(&input)?;
    for pair in decreasing.isotonic_points().windows(2) {
        assert!(pair[0].y >= pair[1].y);
    }
    Ok(())
}

#[test]
fn interpolates_increasing_points_exactly_at_controls() -> PavResult {
    let input = points(&[(3.0, 1.0), (4.0, 2.0), (5.0, 3.0), (8.0, 4.0)]);
    let reg = IsotonicRegression::increasing(&input)?;
    assert_eq!(reg.isotonic_points(), input.as_slice());

    let f = reg.interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Tangent)?;
    for point in &input {
        assert_eq!(f.eval(point.x), point.y);
    }
    for pair in input.windows(2) {
        let mid = f.eval((pair[0].x + pair[1].x) / 2.0);
        assert!(mid >= pair[0].y && mid <= pair[1].y);
    }
    Ok(())
}

#[test]
fn interpolates_decreasing_points_exactly_at_controls() -> PavResult {
    let input = points(&[(3.0, 4.0), (4.0, 3.0), (5.0, 2.0), (8.0, 1.0)]);
    let reg = IsotonicRegression::decreasing(&input)?;
    assert_eq!(reg.isotonic_points(), input.as_slice());

    let f = reg.interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Tangent)?;
    for point in &input {
        assert_eq!(f.eval(point.x), point.y);
    }
    for pair in input.windows(2) {
        let mid = f.eval((pair[0].x + pair[1].x) / 2.0);
        assert!(mid <= pair[0].y && mid >= pair[1].y);
    }
    Ok(())
}

#[test]
fn inverse_interpolates_exactly_at_controls() -> PavResult {
    let input = points(&[(3.0, 1.0), (4.0, 2.0), (5.0, 3.0), (8.0, 4.0)]);
    let reg = IsotonicRegression::increasing(&input)?;

    let inverse =
        reg.inverse_interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Tangent)?;
    for point in &input {
        assert_eq!(inverse.eval(point.y), point.x);
    }
    for pair in input.windows(2) {
        let mid = inverse.eval((pair[0].y + pair[1].y) / 2.0);
        assert!(mid >= pair[0].x && mid <= pair[1].x);
    }
    Ok(())
}

#[test]
fn forward_then_inverse_round_trips_within_tolerance() -> PavResult {
    let input = points(&[(3.0, 1.0), (4.0, 2.0), (5.0, 3.0), (6.0, 3.5)]);
    let reg = IsotonicRegression::increasing(&input)?;

    let forward = reg.interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Tangent)?;
    let inverse =
        reg.inverse_interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Tangent)?;

    // the forward and inverse splines coincide exactly at the knots and
    // drift slightly between them
    for k in 0..=20 {
        let x = 3.0 + 3.0 * k as f64 / 20.0;
        let round_trip = inverse.eval(forward.eval(x));
        assert!(
            (round_trip - x).abs() < 0.1,
            "round trip drifted at x={}: got {}",
            x,
            round_trip
        );
    }
    Ok(())
}

#[test]
fn eval_many_matches_eval() -> PavResult {
    let input = points(&[(0.0, 0.0), (1.0, 2.0), (2.0, 2.5)]);
    let reg = IsotonicRegression::increasing(&input)?;
    let f = reg.interpolator(InterpolationStrategy::Spline, ExtrapolationStrategy::Flat)?;

    let xs = [-1.0, 0.0, 0.5, 1.0, 1.5, 2.0, 3.0];
    let many = f.eval_many(&xs);
    assert_eq!(many.len(), xs.len());
    for (&x, &y) in xs.iter().zip(many.iter()) {
        assert_eq!(f.eval(x), y);
    }
    Ok(())
}
