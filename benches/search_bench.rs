use breakthrough::{new_initial_state, search, Strategy};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_search(c: &mut Criterion) {
    let b = new_initial_state(8, 8, 2);
    c.bench_function("search_rusher_8x8_startpos", |ben| {
        let mut rng = SmallRng::seed_from_u64(1);
        ben.iter(|| {
            let r = search(black_box(&b), Strategy::Rusher, &mut rng);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
