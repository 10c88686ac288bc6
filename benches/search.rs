use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordguard::Automaton;

// ── Hand-rolled LCG (no external deps) ──────────────────────────────────────

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }
    /// Returns a value in [0, bound).
    fn next_range(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

// ── Hiragana dictionary and text ────────────────────────────────────────────

/// 'ぁ' (U+3041) .. 'ん' (U+3093) — 83 hiragana codepoints
const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_COUNT: u64 = 83;

fn hiragana(rng: &mut Lcg) -> char {
    char::from_u32(HIRAGANA_START + rng.next_range(HIRAGANA_COUNT) as u32).unwrap()
}

fn generate_patterns(n: usize, seed: u64) -> Vec<String> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let len = (rng.next_range(4) + 2) as usize; // 2..=5
            (0..len).map(|_| hiragana(&mut rng)).collect()
        })
        .collect()
}

fn generate_text(len: usize, seed: u64) -> String {
    let mut rng = Lcg::new(seed);
    (0..len).map(|_| hiragana(&mut rng)).collect()
}

// ── Benchmarks ──────────────────────────────────────────────────────────────

fn bench_build(c: &mut Criterion) {
    let patterns = generate_patterns(50_000, 42);
    c.bench_function("build_50k_char", |b| {
        b.iter(|| Automaton::from_patterns(black_box(&patterns)).unwrap());
    });
}

fn bench_scan(c: &mut Criterion) {
    let ac = Automaton::from_patterns(generate_patterns(50_000, 42)).unwrap();
    let text = generate_text(10_000, 999);

    c.bench_function("scan_10k_chars", |b| {
        b.iter(|| black_box(ac.scan(black_box(&text))));
    });
    c.bench_function("match_count_10k_chars", |b| {
        b.iter(|| black_box(ac.match_count(black_box(&text))));
    });

    // ASCII text never touches a hiragana dictionary
    let miss = "the quick brown fox jumps over the lazy dog ".repeat(250);
    c.bench_function("scan_10k_unmapped", |b| {
        b.iter(|| black_box(ac.scan(black_box(&miss))));
    });
}

fn bench_redact(c: &mut Criterion) {
    let ac = Automaton::from_patterns(generate_patterns(50_000, 42)).unwrap();
    let text = generate_text(10_000, 999);

    c.bench_function("mask_10k_chars", |b| {
        b.iter(|| black_box(ac.mask(black_box(&text))));
    });
    c.bench_function("replace_10k_chars", |b| {
        b.iter(|| black_box(ac.replace(black_box(&text), "**")));
    });
}

criterion_group!(benches, bench_build, bench_scan, bench_redact);
criterion_main!(benches);
