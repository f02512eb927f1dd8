use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dotedges_core::Converter;

const TIERS: [(&str, usize); 3] = [("small", 1_000), ("medium", 50_000), ("large", 500_000)];

/// Synthetic dot dump: one header, `edges` edge lines over a node pool of
/// roughly `edges / 4` names, one node declaration every 16 lines.
fn synthetic_dot(edges: usize) -> String {
    let pool = (edges / 4).max(1);
    let mut out = String::from("digraph G {\n");
    for i in 0..edges {
        if i % 16 == 0 {
            out.push_str(&format!("\tNode0x{:x} [shape=record];\n", i % pool));
        }
        let src = (i * 7919) % pool;
        let dst = (i * 104_729 + 13) % pool;
        let label = if i % 3 == 0 { "red" } else { "blue" };
        out.push_str(&format!("\tNode0x{src:x} -> Node0x{dst:x}[color={label}];\n"));
    }
    out.push_str("}\n");
    out
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert.tiered");

    for (name, edges) in TIERS {
        let input = synthetic_dot(edges);
        group.throughput(Throughput::Elements(edges as u64));

        group.bench_with_input(BenchmarkId::new("scan", name), &input, |b, input| {
            b.iter(|| {
                let mut conv = Converter::new();
                conv.scan(input.as_bytes()).expect("scan in-memory input");
                black_box(conv.finish())
            });
        });

        group.bench_with_input(BenchmarkId::new("scan+write", name), &input, |b, input| {
            let mut buf = Vec::with_capacity(input.len());
            b.iter(|| {
                buf.clear();
                let mut conv = Converter::new();
                conv.scan(input.as_bytes()).expect("scan in-memory input");
                conv.edges().write_to(&mut buf).expect("write to vec");
                black_box(buf.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
