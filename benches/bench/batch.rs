// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::{GROUP, ND};
use globfold::Batch;

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}batch", GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let subject = "service/api/v2/users/42/profile.json";

    for n in [16, 256, 4096] {
        let patterns: Vec<String> = (0..n).map(|i| format!("service/*/v{}/*/{}*.json", i % 7, i)).collect();

        c.throughput(Throughput::Elements(n as u64));
        for concurrency in [1, 4] {
            let batch = Batch::new().concurrency(concurrency);
            c.bench_function(BenchmarkId::new(format!("run{}c{}", ND, concurrency), n), |b| {
                b.iter(|| batch.run(black_box(&patterns), subject));
            });
        }
    }
}
