//! Tests for the greedy assembly state machine

#[cfg(test)]
mod tests {
    use crate::unit::{gradient_image, patterned_shred, solid_shred};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use unshred::algorithm::assembler::{AssemblyPhase, GreedyAssembler, reconstruct_image};
    use unshred::analysis::signature::Side;
    use unshred::io::configuration::ShredConfig;
    use unshred::spatial::Shred;
    use unshred::spatial::splitter::split_into_shreds;

    fn random_shreds(seed: u64, count: u32) -> Vec<Shred> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|i| {
                let color = [rng.random(), rng.random(), rng.random()];
                solid_shred(i * 8, 8, 12, color)
            })
            .collect()
    }

    // Tests every shred is placed exactly once and nothing remains
    // Verified by stopping the loop one step early
    #[test]
    fn test_assembly_is_complete() {
        for count in 1..10 {
            let assembler = GreedyAssembler::new(random_shreds(u64::from(count), count))
                .expect("valid shreds");
            assert_eq!(assembler.total_steps(), count as usize - 1);

            let reconstruction = assembler.run().expect("assembly succeeds");
            let mut order = reconstruction.order();
            order.sort_unstable();
            assert_eq!(order, (0..count).map(|i| i * 8).collect::<Vec<_>>());
            assert_eq!(reconstruction.seam_scores().len(), count as usize - 1);
        }
    }

    // Tests the same shreds always give the same order
    // Verified by iterating remaining shreds through a HashMap
    #[test]
    fn test_assembly_is_deterministic() {
        let first = GreedyAssembler::new(random_shreds(11, 12))
            .and_then(GreedyAssembler::run)
            .expect("assembly succeeds");
        let second = GreedyAssembler::new(random_shreds(11, 12))
            .and_then(GreedyAssembler::run)
            .expect("assembly succeeds");

        assert_eq!(first.order(), second.order());
    }

    // Tests phases move seeded -> growing -> complete with one placement per step
    // Verified by moving two shreds per step
    #[test]
    fn test_phase_transitions() {
        let mut assembler = GreedyAssembler::new(random_shreds(5, 3)).expect("valid shreds");
        assert_eq!(assembler.phase(), AssemblyPhase::Seeded);
        assert_eq!(
            (assembler.sequence_len(), assembler.remaining_len()),
            (1, 2)
        );

        assert!(assembler.step().expect("step succeeds").is_some());
        assert_eq!(assembler.phase(), AssemblyPhase::Growing);
        assert_eq!(
            (assembler.sequence_len(), assembler.remaining_len()),
            (2, 1)
        );

        assert!(assembler.step().expect("step succeeds").is_some());
        assert_eq!(assembler.phase(), AssemblyPhase::Complete);
        assert!(assembler.step().expect("step succeeds").is_none());
    }

    // Tests a single shred skips assembly and is returned alone
    #[test]
    fn test_single_shred() {
        let mut assembler =
            GreedyAssembler::new(vec![patterned_shred(0, 32, 16)]).expect("valid shreds");
        assert_eq!(assembler.phase(), AssemblyPhase::Complete);
        assert_eq!(assembler.total_steps(), 0);
        assert!(assembler.step().expect("step succeeds").is_none());

        let reconstruction = assembler.run().expect("assembly succeeds");
        assert_eq!(reconstruction.order(), vec![0]);
        assert!(reconstruction.seam_scores().is_empty());
        assert!(reconstruction.total_score().abs() < f64::EPSILON);
    }

    // Tests exact ties resolve to the lowest key, attached on the left
    // Verified by preferring Right on ties
    #[test]
    fn test_ties_attach_lowest_key_left() {
        let shreds = (0..4).map(|i| solid_shred(i * 10, 10, 6, [7, 7, 7])).collect();
        let mut assembler = GreedyAssembler::new(shreds).expect("valid shreds");

        let placement = assembler.step().expect("step succeeds").expect("placed");
        assert_eq!((placement.origin, placement.side), (10, Side::Left));

        let reconstruction = assembler.run().expect("assembly succeeds");
        assert_eq!(reconstruction.order(), vec![30, 20, 10, 0]);
    }

    // Tests seam scores line up with the final left-to-right order
    // Verified by appending every seam score at the back
    #[test]
    fn test_seam_scores_follow_order() {
        let shreds = vec![
            solid_shred(0, 8, 4, [50, 50, 50]),
            solid_shred(8, 8, 4, [60, 50, 50]),
            solid_shred(16, 8, 4, [75, 50, 50]),
        ];
        let reconstruction = GreedyAssembler::new(shreds)
            .and_then(GreedyAssembler::run)
            .expect("assembly succeeds");

        // 8 ties on both sides of the seed and goes left; 16 then fits best left of 8
        assert_eq!(reconstruction.order(), vec![16, 8, 0]);
        let seams = reconstruction.seam_scores();
        assert_eq!(seams.len(), 2);
        assert!((seams.first().copied().unwrap_or_default() - 60.0).abs() < 1e-9);
        assert!((seams.get(1).copied().unwrap_or_default() - 40.0).abs() < 1e-9);
        assert!((reconstruction.total_score() - 100.0).abs() < 1e-9);
    }

    // Tests malformed shred sets are rejected before any step
    // Verified by removing each validation in turn
    #[test]
    fn test_rejects_malformed_input() {
        let err = GreedyAssembler::new(Vec::new()).err().expect("empty input fails");
        assert!(err.is_configuration_error());

        let duplicates = vec![patterned_shred(0, 8, 4), patterned_shred(0, 8, 4)];
        assert!(GreedyAssembler::new(duplicates).is_err());

        let uneven = vec![patterned_shred(0, 8, 4), patterned_shred(8, 8, 5)];
        assert!(GreedyAssembler::new(uneven).is_err());

        let flat = vec![patterned_shred(0, 8, 0), patterned_shred(8, 8, 0)];
        let err = GreedyAssembler::new(flat).err().expect("zero rows fail");
        assert!(err.is_configuration_error());
    }

    // Tests step only reports completion once nothing remains, and keeps doing so
    // Verified by returning None when the selected shred is missing
    #[test]
    fn test_step_stops_only_when_complete() {
        for count in 1..8 {
            let mut assembler =
                GreedyAssembler::new(random_shreds(u64::from(count) + 100, count))
                    .expect("valid shreds");

            let mut placements = 0;
            while let Some(placement) = assembler.step().expect("step succeeds") {
                placements += 1;
                assert_eq!(assembler.sequence_len(), placements + 1);
                assert_eq!(placement.origin % 8, 0);
            }

            assert_eq!(placements, assembler.total_steps());
            assert_eq!(assembler.remaining_len(), 0);
            assert_eq!(assembler.phase(), AssemblyPhase::Complete);
            assert!(assembler.step().expect("step succeeds").is_none());
            assert_eq!(assembler.sequence_len(), count as usize);
        }
    }

    // Tests split, assemble and composite recovers an unshuffled image unchanged
    #[test]
    fn test_reconstruct_image_on_intact_input() {
        let image = gradient_image(96, 8);
        let config = ShredConfig::new(16, 4).expect("valid config");

        let shreds = split_into_shreds(&image, &config).expect("split succeeds");
        let order = GreedyAssembler::new(shreds)
            .and_then(GreedyAssembler::run)
            .expect("assembly succeeds")
            .order();
        assert_eq!(order, vec![0, 16, 32, 48, 64, 80]);

        let rebuilt = reconstruct_image(&image, &config).expect("reconstruction succeeds");
        assert_eq!(rebuilt, image);
    }
}
