#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lotto_engine::{Counting, LotteryConfig, MatchEngine, Number, PickIndex, Report};

#[derive(Arbitrary, Debug)]
struct Input {
    players: Vec<[Number; 5]>,
    draws: Vec<[Number; 5]>,
    sparse: bool,
}

fuzz_target!(|input: Input| {
    let config = LotteryConfig::DEFAULT;
    let mut index = PickIndex::new(config);
    let mut registered = Vec::new();
    for (i, picks) in input.players.iter().enumerate() {
        let valid = config.validate(picks).is_ok();
        assert_eq!(index.register_player(i as u32 + 1, picks).is_ok(), valid);
        if valid {
            registered.push(*picks);
        }
    }
    let counting = if input.sparse {
        Counting::Sparse
    } else {
        Counting::Dense
    };
    let mut engine = MatchEngine::with_counting(index, counting);
    engine.prepare();
    for draw in &input.draws {
        let Ok(report) = engine.process(draw) else {
            assert!(config.validate(draw).is_err());
            continue;
        };
        let mut expected = Report::new(config.picks);
        for picks in &registered {
            expected.increment_winners_having(picks.iter().filter(|n| draw.contains(n)).count());
        }
        assert_eq!(report, expected);
        engine.reset();
    }
});
