mod matching;

criterion::criterion_main!(matching::benches);
