use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use foldscan::fold_str;
use std::hint::black_box;

fn generate_text(base: &str, target_len: usize) -> String {
    let repetitions = (target_len / base.len()).max(1);
    let mut result = String::with_capacity(target_len);
    for _ in 0..repetitions {
        result.push_str(base);
        if result.len() >= target_len {
            break;
        }
    }
    result.truncate(target_len.min(result.len()));
    result
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_by_script");

    let cases = [
        ("ascii", "The Quick Brown Fox Jumps Over The Lazy Dog. "),
        ("latin_expansions", "Straße GROẞE İstanbul ﬃre ﬂy "),
        ("cyrillic", "ПРИВЕТ МИР КАК ДЕЛА "),
        ("greek", "ΕΛΛΗΝΙΚΗ ΔΗΜΟΚΡΑΤΙΑ ΚΑΛΗΜΕΡΑ "),
        ("cjk_no_op", "价格与质量的关系分析 "),
    ];

    for (name, base) in cases {
        for &(size_name, target_bytes) in &[("short", 200), ("medium", 2000), ("long", 20000)] {
            let text = generate_text(base, target_bytes);
            let bench_id = BenchmarkId::new(name, size_name);
            group.bench_with_input(bench_id, &text, |b, text| {
                b.iter(|| fold_str(black_box(text)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fold);
criterion_main!(benches);
