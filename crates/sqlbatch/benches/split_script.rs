//! Benchmark – `sqlbatch::BatchSplitter`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sqlbatch::{BatchSplitter, RepeatMode, SplitOptions};

/// Produce a deterministic script of `batches` batches mixing the constructs
/// the splitter has to look through: comments, nested comments, literals with
/// escaped quotes and look-alike keywords.
fn make_script(batches: usize) -> String {
    let mut s = String::new();
    for i in 0..batches {
        s.push_str("-- batch header, not a go\n");
        s.push_str("/* outer /* inner go */ still a comment */\n");
        s.push_str(&format!(
            "insert into log (id, note) values ({i}, 'it''s a go');\n"
        ));
        s.push_str("if @x = 1 goto done;\nselect category from cargo;\n");
        if i % 4 == 0 {
            s.push_str("go 2\n");
        } else {
            s.push_str("GO\n");
        }
    }
    s
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for &batches in &[10usize, 100, 1_000] {
        let script = make_script(batches);
        group.throughput(Throughput::Bytes(script.len() as u64));
        for (name, repeat) in [("wrap", RepeatMode::Wrap), ("delegate", RepeatMode::Delegate)] {
            let splitter = BatchSplitter::new(SplitOptions {
                repeat,
                ..SplitOptions::default()
            });
            group.bench_with_input(BenchmarkId::new(name, batches), &script, |b, script| {
                b.iter(|| {
                    let out = splitter.split(black_box(script)).expect("script is well formed");
                    black_box(out.len())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
