use criterion::Criterion;

// Benchmark suite for glyphsheet. Run with:
//    cargo bench

/// Bench: draw all 256 glyph cells
fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_sheet", |b| {
        b.iter(|| glyphsheet::sheet::generate())
    });
}

/// Bench: PNG-encode a generated sheet
fn bench_encode(c: &mut Criterion) {
    let canvas = glyphsheet::sheet::generate();
    c.bench_function("encode_png", |b| {
        b.iter(|| canvas.encode_png().expect("encode"))
    });
}

fn main() {
    let mut c = Criterion::default();

    bench_generate(&mut c);
    bench_encode(&mut c);

    c.final_summary();
}
