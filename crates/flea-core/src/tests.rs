//! Unit tests for flea-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CellId, FleaId, TrialId};

    #[test]
    fn index_roundtrip() {
        let id = CellId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CellId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CellId::INVALID.0, u32::MAX);
        assert_eq!(FleaId::INVALID.0, u32::MAX);
        assert_eq!(FleaId::default(), FleaId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(FleaId(7).to_string(), "FleaId(7)");
        assert_eq!(TrialId(0).to_string(), "TrialId(0)");
    }
}

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn offset_clips_at_boundaries() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 3), None);
        assert_eq!(corner.offset(0, -1, 3), None);
        assert_eq!(corner.offset(1, 0, 3), Some(Coord::new(1, 0)));

        let far = Coord::new(2, 2);
        assert_eq!(far.offset(1, 0, 3), None);
        assert_eq!(far.offset(0, 1, 3), None);
        assert_eq!(far.offset(0, -1, 3), Some(Coord::new(2, 1)));
    }

    #[test]
    fn manhattan() {
        assert_eq!(Coord::new(1, 1).manhattan(Coord::new(1, 2)), 1);
        assert_eq!(Coord::new(0, 3).manhattan(Coord::new(2, 0)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(3, 14).to_string(), "[3, 14]");
    }
}

#[cfg(test)]
mod config {
    use crate::{BatchConfig, TrialConfig, DEFAULT_TRIALS};

    #[test]
    fn defaults_match_canonical_experiment() {
        let cfg = BatchConfig::default();
        assert_eq!(cfg.trial.grid_size, 30);
        assert_eq!(cfg.trial.rounds, 50);
        assert_eq!(cfg.trial.cell_count(), 900);
        assert_eq!(cfg.trials, DEFAULT_TRIALS);
        assert_eq!(cfg.seed, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn tiny_grid_rejected() {
        let cfg = TrialConfig { grid_size: 1, rounds: 50 };
        assert!(cfg.validate().is_err());
        let cfg = TrialConfig { grid_size: 2, rounds: 0 };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_trials_rejected() {
        let cfg = BatchConfig { trials: 0, ..BatchConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("trial count"), "got {err}");
    }
}

#[cfg(test)]
mod rng {
    use crate::{FixedPick, NeighborPicker, TrialId, TrialRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TrialRng::new(12345, TrialId(3));
        let mut r2 = TrialRng::new(12345, TrialId(3));
        for _ in 0..100 {
            assert_eq!(r1.pick(4), r2.pick(4));
        }
    }

    #[test]
    fn different_trials_differ() {
        let mut r0 = TrialRng::new(1, TrialId(0));
        let mut r1 = TrialRng::new(1, TrialId(1));
        let a: Vec<usize> = (0..32).map(|_| r0.pick(4)).collect();
        let b: Vec<usize> = (0..32).map(|_| r1.pick(4)).collect();
        assert_ne!(a, b, "seeds for adjacent trials should diverge");
    }

    #[test]
    fn pick_in_bounds_and_covers_all() {
        let mut rng = TrialRng::from_seed(0);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let i = rng.pick(3);
            assert!(i < 3);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform pick never chose some index");
    }

    #[test]
    fn fixed_pick_clamps() {
        let mut p = FixedPick(0);
        assert_eq!(p.pick(2), 0);
        assert_eq!(p.pick(4), 0);
        let mut p = FixedPick(3);
        assert_eq!(p.pick(4), 3);
        assert_eq!(p.pick(2), 1);
    }
}
