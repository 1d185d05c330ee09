use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

use crate::batch::BatchMatcher;
use crate::{
    BuildStrategy, EngineError, LotteryConfig, MatchEngine, Number, PickError, PickIndex, PlayerId,
};

fn random_picks(rng: &mut StdRng) -> Vec<Number> {
    sample(rng, 90, 5)
        .into_iter()
        .map(|i| i as Number + 1)
        .collect()
}

fn random_index(rng: &mut StdRng, players: usize) -> PickIndex {
    let population: Vec<Vec<Number>> = (0..players).map(|_| random_picks(rng)).collect();
    PickIndex::build(
        LotteryConfig::DEFAULT,
        || {
            population
                .iter()
                .enumerate()
                .map(|(i, picks)| (i as PlayerId + 1, picks.as_slice()))
        },
        BuildStrategy::Presized,
    )
    .unwrap()
}

#[test]
fn batch_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(5);
    let index = random_index(&mut rng, 200_000);
    let draws: Vec<Vec<Number>> = (0..64).map(|_| random_picks(&mut rng)).collect();

    let batch = BatchMatcher::new(Arc::new(index.clone()));
    let reports = batch.process_batch(&draws).unwrap();
    assert!(batch.pooled_scratch() >= 1);

    let mut engine = MatchEngine::new(index);
    engine.prepare();
    assert_eq!(reports.len(), draws.len());
    for (draw, report) in draws.iter().zip(&reports) {
        assert_eq!(&engine.process_and_reset(draw).unwrap(), report);
        assert_eq!(&batch.process_partitioned(draw).unwrap(), report);
    }

    // the pool is reused, draws never see counts of earlier draws
    assert_eq!(batch.process_batch(&draws).unwrap(), reports);
}

#[test]
fn invalid_draw_rejects_the_batch() {
    let mut index = PickIndex::new(LotteryConfig::DEFAULT);
    index.register_player(1, &[1, 2, 3, 4, 5]).unwrap();
    let batch = BatchMatcher::new(Arc::new(index));
    let res = batch.process_batch(&[[1u8, 2, 3, 4, 5], [1, 2, 3, 4, 4]]);
    assert_eq!(
        res,
        Err(EngineError::InvalidDraw(PickError::RepeatedNumber(4)))
    );
    assert_eq!(batch.pooled_scratch(), 0);
    let reports = batch.process_batch(&[[1u8, 2, 3, 4, 5], [1, 2, 60, 61, 62]]).unwrap();
    assert_eq!(reports[0].to_string(), "0 0 0 1");
    assert_eq!(reports[1].to_string(), "1 0 0 0");
}

#[test]
fn empty_population() {
    let batch = BatchMatcher::new(Arc::new(PickIndex::new(LotteryConfig::DEFAULT)));
    let report = batch.process_partitioned(&[1, 2, 3, 4, 5]).unwrap();
    assert_eq!(report.to_string(), "0 0 0 0");
    assert!(batch.process_batch::<[Number; 5]>(&[]).unwrap().is_empty());
}

#[test]
fn partitioned_draws_reuse_one_scratch() {
    let mut rng = StdRng::seed_from_u64(17);
    let batch = BatchMatcher::new(Arc::new(random_index(&mut rng, 1_000)));
    assert_eq!(batch.pooled_scratch(), 0);
    let draw = random_picks(&mut rng);
    let first = batch.process_partitioned(&draw).unwrap();
    assert_eq!(batch.pooled_scratch(), 1);
    for _ in 0..3 {
        assert_eq!(batch.process_partitioned(&draw).unwrap(), first);
        assert_eq!(batch.pooled_scratch(), 1);
    }
}
