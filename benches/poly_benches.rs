use RustedPoly::symbolic::polynomial::Polynomial;
use RustedPoly::symbolic::term::Term;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn dense_terms(n: i64) -> Vec<Term> {
    (0..n).map(|e| Term::new(e % 7 - 3, e)).collect()
}

fn bench_insert_ascending(c: &mut Criterion) {
    // every insertion lands in front of the current leading term
    let terms = dense_terms(200);
    c.bench_function("insert 200 ascending terms", |b| {
        b.iter(|| Polynomial::from_terms(black_box(terms.iter().copied())))
    });
}

fn bench_insert_descending(c: &mut Criterion) {
    // every insertion scans the whole list and is appended
    let terms: Vec<Term> = dense_terms(200).into_iter().rev().collect();
    c.bench_function("insert 200 descending terms", |b| {
        b.iter(|| Polynomial::from_terms(black_box(terms.iter().copied())))
    });
}

fn bench_add(c: &mut Criterion) {
    let p = Polynomial::from_terms(dense_terms(200));
    let q = -p.clone();
    c.bench_function("add cancelling polynomials", |b| {
        b.iter(|| {
            let mut sum = p.clone();
            sum.add(black_box(&q));
            sum
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = Polynomial::from_terms(dense_terms(200)).to_string();
    c.bench_function("parse rendered polynomial", |b| {
        b.iter(|| black_box(text.as_str()).parse::<Polynomial>())
    });
}

criterion_group!(
    benches,
    bench_insert_ascending,
    bench_insert_descending,
    bench_add,
    bench_parse
);
criterion_main!(benches);
