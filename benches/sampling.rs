use criterion::{black_box, criterion_group, criterion_main, Criterion};
use statfit::distribution::{Binomial, Cauchy, Continuous, Gaussian, InverseTransform};
use statfit::fit::{fit_cauchy, fit_gaussian, FitOptions};

fn bench_sampling(c: &mut Criterion) {
    let rs: Vec<f64> = (0..10_000).map(|i| (i as f64 + 0.5) / 10_000.0).collect();

    c.bench_function("binomial_new_1000", |b| {
        b.iter(|| Binomial::new(black_box(1000), black_box(0.3)))
    });

    let binomial = Binomial::new(1000, 0.3).unwrap();
    c.bench_function("binomial_sample_10k", |b| {
        b.iter(|| {
            let mut acc = 0;
            for &r in &rs {
                acc += binomial.sample(r);
            }
            black_box(acc)
        })
    });

    let cauchy = Cauchy::new(2.0, 3.0).unwrap();
    c.bench_function("cauchy_sample_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &r in &rs {
                acc += cauchy.sample(r);
            }
            black_box(acc)
        })
    });
}

fn bench_fit(c: &mut Criterion) {
    let truth = Cauchy::new(2.0, 3.0).unwrap();
    let x: Vec<f64> = (0..=200).map(|i| -20.0 + 0.2 * i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&x| truth.pdf(x)).collect();
    let options = FitOptions::default().with_epsilon(1e-20);

    c.bench_function("fit_cauchy_201", |b| {
        b.iter(|| fit_cauchy(black_box(&x), black_box(&y), &options))
    });

    let truth = Gaussian::new(2.0, 3.0).unwrap();
    let y: Vec<f64> = x.iter().map(|&x| truth.pdf(x)).collect();
    c.bench_function("fit_gaussian_201", |b| {
        b.iter(|| fit_gaussian(black_box(&x), black_box(&y), &options))
    });
}

criterion_group!(benches, bench_sampling, bench_fit);
criterion_main!(benches);
