//! Tests for shred construction and cached edge signatures

#[cfg(test)]
mod tests {
    use crate::unit::{default_averager, gradient_image, patterned_shred};
    use unshred::analysis::signature::{Side, StripeAverager};
    use unshred::io::error::UnshredError;
    use unshred::spatial::Shred;

    // Tests signatures cached at construction match a fresh computation
    // Verified by swapping left and right at construction
    #[test]
    fn test_cached_edges_match_averager() {
        let shred = patterned_shred(32, 32, 16);
        let averager = default_averager();

        assert_eq!(
            shred.left_edge(),
            &averager.average(shred.image(), Side::Left).expect("wide enough")
        );
        assert_eq!(
            shred.right_edge(),
            &averager.average(shred.image(), Side::Right).expect("wide enough")
        );
        assert_eq!(shred.edge(Side::Left), shred.left_edge());
        assert_eq!(shred.edge(Side::Right), shred.right_edge());
    }

    // Tests geometry accessors
    #[test]
    fn test_dimensions() {
        let shred = patterned_shred(64, 10, 7);

        assert_eq!(shred.origin(), 64);
        assert_eq!(shred.width(), 10);
        assert_eq!(shred.height(), 7);
        assert_eq!(shred.left_edge().len(), 7);
        assert_eq!(shred.image().dimensions(), (10, 7));
    }

    // Tests a strip narrower than k is rejected unless it is the trailing shred
    // Verified by clamping the column count in Shred::new
    #[test]
    fn test_narrow_strip_needs_trailing() {
        let averager = StripeAverager::new(8).expect("valid columns");

        let err = Shred::new(0, gradient_image(4, 3), &averager).unwrap_err();
        assert!(matches!(err, UnshredError::InvalidParameter { .. }));

        let trailing = Shred::trailing(32, gradient_image(4, 3), &averager).expect("clamped");
        assert_eq!(trailing.width(), 4);
        assert_eq!(trailing.left_edge(), trailing.right_edge());
        assert_eq!(
            trailing.left_edge(),
            &averager
                .clamped_to(4)
                .average(trailing.image(), Side::Left)
                .expect("fits")
        );
    }

    // Tests a trailing shred at least k wide uses the configured columns
    #[test]
    fn test_wide_trailing_matches_new() {
        let averager = default_averager();
        let trailing = Shred::trailing(0, gradient_image(16, 2), &averager).expect("wide enough");
        let regular = Shred::new(0, gradient_image(16, 2), &averager).expect("wide enough");

        assert_eq!(trailing.left_edge(), regular.left_edge());
        assert_eq!(trailing.right_edge(), regular.right_edge());
    }
}
