//! Battle simulator and fusion throughput.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use elemental_battlegrounds::battle::simulate_battle;
use elemental_battlegrounds::core::GameRng;
use elemental_battlegrounds::economy::{OpponentStrategy, Relic};
use elemental_battlegrounds::fusion::{FusionResolver, RecipeBook};
use elemental_battlegrounds::units::{Catalog, UnitInstance};
use elemental_battlegrounds::{GameConfig, HeroHooks};

fn boards(round: u32, seed: u64) -> (Vec<UnitInstance>, Vec<UnitInstance>) {
    let catalog = Catalog::builtin();
    let config = GameConfig::default().with_base_board_limit(7);
    let mut rng = GameRng::new(seed);
    let a = OpponentStrategy::Balanced.generate(&catalog, &config, round, 7, &mut rng);
    let b = OpponentStrategy::FusedLover.generate(&catalog, &config, round, 7, &mut rng);
    (a, b)
}

fn bench_battle(c: &mut Criterion) {
    let mut group = c.benchmark_group("battle");
    group.throughput(Throughput::Elements(1));

    for round in [2u32, 8, 14] {
        let (a, b) = boards(round, 7);
        group.bench_function(format!("round_{round}"), |bench| {
            bench.iter(|| black_box(simulate_battle(black_box(&a), black_box(&b), None, None)));
        });
    }

    let (a, b) = boards(14, 9);
    let strength = Relic::Strength;
    let fortitude = Relic::Fortitude;
    group.bench_function("round_14_relics", |bench| {
        bench.iter(|| {
            black_box(simulate_battle(
                &a,
                &b,
                Some(&strength as &dyn HeroHooks),
                Some(&fortitude as &dyn HeroHooks),
            ))
        });
    });
    group.finish();
}

fn bench_fusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("fusion");
    let base = ["Fire", "Water", "Earth", "Air", "Lightning", "Ash", "Flora", "Frost"];

    group.bench_function("resolve_fresh", |bench| {
        bench.iter_batched(
            || (Catalog::builtin(), FusionResolver::new(RecipeBook::builtin(), GameRng::new(3), 6)),
            |(mut catalog, mut resolver)| {
                for a in base {
                    for b in base {
                        black_box(resolver.resolve(&mut catalog, a, b));
                    }
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_battle, bench_fusion);
criterion_main!(benches);
