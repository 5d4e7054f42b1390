use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ompvv_log::{Outcome, TestResult};
use ompvv_report::{Summary, render_csv, render_json};

/// Build `n` results spread over the known extensions with some failures
fn sample_results(n: usize) -> Vec<TestResult> {
    (0..n)
        .map(|i| TestResult {
            test_name: format!("test_{i}.{}", ["c", "cpp", "F90"][i % 3]),
            test_path: format!("tests/4.5/test_{i}"),
            system: "summit".to_string(),
            commit: "463391f".to_string(),
            spec_version: "4.5".to_string(),
            compiler_name: "gcc 8.1.1".to_string(),
            compiler_command: "gcc -O3 -fopenmp".to_string(),
            compiler_result: Some(if i % 11 == 0 { Outcome::Fail } else { Outcome::Pass }),
            compiler_output: "warning: unused variable, 'x'\n".repeat(3),
            runtime_result: (i % 11 != 0).then(|| {
                if i % 5 == 0 { Outcome::Fail } else { Outcome::Pass }
            }),
            runtime_output: "[OMPVV_INFO] Test is running on device.\n".repeat(5),
            ..Default::default()
        })
        .collect()
}

fn render_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for n in [10, 1000] {
        let results = sample_results(n);
        group.bench_with_input(BenchmarkId::new("json", n), &results, |b, results| {
            b.iter(|| render_json(results).expect("render failed"))
        });
        group.bench_with_input(BenchmarkId::new("csv", n), &results, |b, results| {
            b.iter(|| render_csv(results))
        });
        group.bench_with_input(BenchmarkId::new("summary", n), &results, |b, results| {
            b.iter(|| Summary::from_results(results).to_string())
        });
    }

    group.finish();
}

criterion_group!(benches, render_benchmarks);
criterion_main!(benches);
