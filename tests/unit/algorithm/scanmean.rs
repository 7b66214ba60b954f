//! Tests for the scan-order local mean fill

#[cfg(test)]
mod tests {
    use holefill::FillError;
    use holefill::algorithm::scanmean::mean_fill;
    use holefill::spatial::pixel::Connectivity;
    use ndarray::Array2;

    fn plane(rows: usize, columns: usize, values: &[f64]) -> Array2<f64> {
        Array2::from_shape_vec((rows, columns), values.to_vec()).unwrap()
    }

    // Tests a single hole takes the mean of its cardinal neighbours
    // Verified by including the diagonal neighbours in the mean
    #[test]
    fn test_single_hole_four_connectivity() {
        let mut image = plane(
            3,
            3,
            &[
                0.9, 0.2, 0.9, //
                0.4, -1.0, 0.6, //
                0.9, 0.8, 0.9,
            ],
        );

        assert_eq!(mean_fill(&mut image, Connectivity::Four).unwrap(), 1);

        let value = image.get([1, 1]).copied().unwrap();
        assert!((value - 0.5).abs() < 1e-12);
    }

    // Tests the diagonal neighbours participate under 8-connectivity
    // Verified by restricting the mean to cardinal neighbours
    #[test]
    fn test_single_hole_eight_connectivity() {
        let mut image = plane(
            2,
            2,
            &[
                -1.0, 0.2, //
                0.4, 0.9,
            ],
        );

        assert_eq!(mean_fill(&mut image, Connectivity::Eight).unwrap(), 1);

        let value = image.get([0, 0]).copied().unwrap();
        assert!((value - 0.5).abs() < 1e-12);
    }

    // Tests values cascade through a hole run along the scan direction
    // Verified by freezing neighbour reads at their pre-fill values
    #[test]
    fn test_cascade_along_scan_order() {
        let mut image = plane(1, 3, &[0.5, -1.0, -1.0]);

        assert_eq!(mean_fill(&mut image, Connectivity::Four).unwrap(), 2);

        // (0,1) averages only (0,0); (0,2) then averages the freshly
        // filled (0,1)
        assert!((image.get([0, 1]).copied().unwrap() - 0.5).abs() < 1e-12);
        assert!((image.get([0, 2]).copied().unwrap() - 0.5).abs() < 1e-12);
    }

    // Tests an image without holes is a no-op
    // Verified by reporting a non-zero fill count
    #[test]
    fn test_no_holes_noop() {
        let original = plane(2, 2, &[0.1, 0.2, 0.3, 0.4]);
        let mut image = original.clone();

        assert_eq!(mean_fill(&mut image, Connectivity::Eight).unwrap(), 0);
        assert_eq!(image, original);
    }

    // Tests a hole with no filled neighbour at visit time is rejected
    // Verified by averaging an empty neighbour set into NaN
    #[test]
    fn test_isolated_hole_fails() {
        let mut image = plane(1, 1, &[-1.0]);

        match mean_fill(&mut image, Connectivity::Eight) {
            Err(FillError::IsolatedHole { row, column }) => {
                assert_eq!((row, column), (0, 0));
            }
            other => unreachable!("Expected IsolatedHole, got {other:?}"),
        }
    }

    // Tests the first visited hole of an all-hole region touching the
    // corner is isolated even though later scan positions would not be
    // Verified by continuing the scan past the unfillable hole
    #[test]
    fn test_enclosed_leading_hole_fails() {
        let mut image = plane(
            2,
            2,
            &[
                -1.0, -1.0, //
                -1.0, 0.8,
            ],
        );

        match mean_fill(&mut image, Connectivity::Four) {
            Err(FillError::IsolatedHole { row, column }) => {
                assert_eq!((row, column), (0, 0));
            }
            other => unreachable!("Expected IsolatedHole, got {other:?}"),
        }
    }
}
