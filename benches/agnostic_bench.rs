use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use foldscan::{find_str, fold_str, is_case_agnostic_str};
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

/// Compares the classifier itself against the cost of a full fold on the
/// same input, across agnostic and non-agnostic text.
fn bench_classifier_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_case_agnostic_vs_fold");

    let cases = [
        ("cjk_and_symbols", "价格：¥1234, 数量：567件 "),
        ("digits_and_punctuation", "1234-5678, 90.12% (ref #42) "),
        ("mixed_with_letters", "Order #42: 价格 is ¥1234 "),
    ];

    for (name, base) in cases {
        let text = generate_text(base, 4000);
        group.bench_with_input(BenchmarkId::new("is_case_agnostic", name), &text, |b, text| {
            b.iter(|| is_case_agnostic_str(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("fold_then_compare", name), &text, |b, text| {
            b.iter(|| fold_str(black_box(text)) == fold_str(black_box(text)));
        });
    }

    group.finish();
}

/// Compares find()'s case-agnostic fast path (memchr byte search) against
/// a haystack/needle pair that forces the full dispatcher path.
fn bench_fast_path_vs_full_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_fast_path_vs_full");

    let agnostic_haystack = generate_text("价格：¥1234, 数量：567件 ", 8000);
    let cased_haystack = generate_text("Order number forty two costs ¥1234 today ", 8000);

    group.bench_function("agnostic_needle_memchr_path", |b| {
        b.iter(|| find_str(black_box(&agnostic_haystack), black_box("¥1234")));
    });

    group.bench_function("cased_needle_full_dispatch", |b| {
        b.iter(|| find_str(black_box(&cased_haystack), black_box("FORTY TWO")));
    });

    group.finish();
}

criterion_group!(benches, bench_classifier_cost, bench_fast_path_vs_full_dispatch);
criterion_main!(benches);
