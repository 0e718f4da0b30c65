use criterion::{criterion_group, criterion_main, Criterion};
use matroid::{set, Matroid, Payload};
use matroid_core::sets::subsets_of_size;

fn uniform(rank: usize, size: u16) -> Matroid<u16> {
    let ground = set(1..=size);
    let bases = subsets_of_size(&ground, rank).into_iter().collect();
    Matroid::new(ground, Payload::Bases(bases)).unwrap()
}

fn bench_dual_and_minors(c: &mut Criterion) {
    let matroid = uniform(3, 7);
    c.bench_function("dual_circuits_u37", |b| {
        b.iter(|| {
            let fresh = Matroid::from_trusted(matroid.ground_set().clone(), matroid.payload().clone());
            fresh.dual().circuits().len()
        })
    });
    c.bench_function("contract_two_u37", |b| {
        b.iter(|| matroid.contract(&set([1, 2])).unwrap().rank())
    });
}

fn bench_isomorphism(c: &mut Criterion) {
    let first = uniform(2, 6);
    let second = uniform(2, 6);
    c.bench_function("isomorphism_u26", |b| {
        b.iter(|| first.is_isomorphic_to(&second))
    });
}

criterion_group!(benches, bench_dual_and_minors, bench_isomorphism);
criterion_main!(benches);
