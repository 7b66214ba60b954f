//! Tests for grayscale loading, normalization, and PNG export

#[cfg(test)]
mod tests {
    use holefill::FillError;
    use holefill::io::image::{export_intensity_png, load_grayscale};
    use image::{ImageBuffer, Luma};
    use ndarray::Array2;

    // Tests 8-bit sources normalize by their full scale
    // Verified by normalizing against 256 instead of 255
    #[test]
    fn test_load_normalizes_8_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray8.png");

        let buffer =
            ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(2, 2, vec![0, 128, 255, 64]).unwrap();
        buffer.save(&path).unwrap();

        let plane = load_grayscale(&path).unwrap();
        assert_eq!(plane.dim(), (2, 2));

        assert!((plane.get([0, 0]).copied().unwrap() - 0.0).abs() < 1e-12);
        assert!((plane.get([0, 1]).copied().unwrap() - 128.0 / 255.0).abs() < 1e-12);
        assert!((plane.get([1, 0]).copied().unwrap() - 1.0).abs() < 1e-12);
        assert!((plane.get([1, 1]).copied().unwrap() - 64.0 / 255.0).abs() < 1e-12);
    }

    // Tests 16-bit grayscale keeps its native depth during normalization
    // Verified by squashing 16-bit samples through the 8-bit path
    #[test]
    fn test_load_normalizes_16_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray16.png");

        let buffer =
            ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(1, 3, vec![0, 32768, 65535]).unwrap();
        buffer.save(&path).unwrap();

        let plane = load_grayscale(&path).unwrap();
        assert_eq!(plane.dim(), (3, 1));

        assert!((plane.get([0, 0]).copied().unwrap() - 0.0).abs() < 1e-12);
        assert!((plane.get([1, 0]).copied().unwrap() - 32768.0 / 65535.0).abs() < 1e-9);
        assert!((plane.get([2, 0]).copied().unwrap() - 1.0).abs() < 1e-12);
    }

    // Tests a missing file surfaces as a load error with its path
    // Verified by silently substituting an empty plane
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.png");

        match load_grayscale(&path) {
            Err(FillError::ImageLoad { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }
    }

    // Tests export scales to 8-bit and round-trips through a decoder
    // Verified by exporting without the 255 scale factor
    #[test]
    fn test_export_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let plane =
            Array2::from_shape_vec((1, 3), vec![0.0, 0.5, 1.0]).unwrap();
        export_intensity_png(&plane, &path).unwrap();

        let reloaded = load_grayscale(&path).unwrap();
        assert_eq!(reloaded.dim(), (1, 3));

        assert!((reloaded.get([0, 0]).copied().unwrap() - 0.0).abs() < 1e-12);
        assert!((reloaded.get([0, 1]).copied().unwrap() - 0.5).abs() < 2.0 / 255.0);
        assert!((reloaded.get([0, 2]).copied().unwrap() - 1.0).abs() < 1e-12);
    }

    // Tests out-of-range values clamp instead of wrapping
    // Verified by letting a sentinel cell wrap to a bright value
    #[test]
    fn test_export_clamps_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clamped.png");

        let plane = Array2::from_shape_vec((1, 2), vec![-1.0, 2.0]).unwrap();
        export_intensity_png(&plane, &path).unwrap();

        let reloaded = load_grayscale(&path).unwrap();
        assert!((reloaded.get([0, 0]).copied().unwrap() - 0.0).abs() < 1e-12);
        assert!((reloaded.get([0, 1]).copied().unwrap() - 1.0).abs() < 1e-12);
    }

    // Tests export creates missing parent directories
    // Verified by saving into a non-existent directory directly
    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");

        let plane = Array2::from_shape_vec((1, 1), vec![0.5]).unwrap();
        export_intensity_png(&plane, &path).unwrap();

        assert!(path.exists());
    }
}
