//! Corpus Benchmarking Tool
//!
//! Measures the throughput of the analysis pipeline on a large text file,
//! such as a concatenated book corpus or a plain-text dump.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: both canonical forms (clean and raw)
//! 2. **Segmentation**: word tokens and sentences over the clean form
//! 3. **Analysis**: the full feature battery over pre-normalized text
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/corpus_bench /path/to/corpus.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Analyze ===
//! --------------------------------
//! Mode        : Analyze
//! Elapsed     : 0.452 s
//! Throughput  : 0.218 GiB/s
//! Tokens      : 15_489_234
//! Tokens/sec  : 34_265_478
//! --------------------------------
//! ```
//!
//! Build in release mode and use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use lexprint_core::analyzer::normalizer::TextNormalizer;
use lexprint_core::analyzer::tokenizer::Segmenter;
use lexprint_core::stylometry::StylometricAnalyzer;
use lexprint_types::NormalizedText;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("Usage: corpus_bench <path>");
        return ExitCode::FAILURE;
    };

    println!("Loading file...");
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let input = String::from_utf8_lossy(&bytes);

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    let forms = bench_normalize(&input);
    bench_segment(&forms.clean);

    match StylometricAnalyzer::new() {
        Ok(analyzer) => bench_analyze(&analyzer, &forms),
        Err(e) => {
            eprintln!("analyzer setup failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn bench_normalize(input: &str) -> NormalizedText {
    let clean = TextNormalizer::clean();
    let raw = TextNormalizer::raw();
    let mut forms = NormalizedText {
        clean: String::with_capacity(input.len()),
        raw: String::with_capacity(input.len()),
    };

    println!("=== Normalize ===");

    warmup(|| {
        clean.normalize_into(input, &mut forms.clean);
        raw.normalize_into(input, &mut forms.raw);
    });

    let elapsed = measure(|| {
        clean.normalize_into(input, &mut forms.clean);
        raw.normalize_into(input, &mut forms.raw);
    });

    print_perf("Normalize", input.len(), elapsed, 0);
    forms
}

fn bench_segment(clean: &str) {
    let segmenter = Segmenter::new();

    println!("=== Segment ===");

    warmup(|| {
        let mut sink = 0u64;
        segmenter.tokenize(clean, |_w, _p| sink += 1);
        segmenter.split_sentences(clean, |_s, _p| sink += 1);
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        segmenter.tokenize(clean, |_w, _p| local += 1);
        segmenter.split_sentences(clean, |_s, _p| {
            std::hint::black_box(());
        });
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Segment", clean.len(), elapsed, tokens);
}

fn bench_analyze(analyzer: &StylometricAnalyzer, forms: &NormalizedText) {
    println!("=== Analyze ===");

    warmup(|| {
        std::hint::black_box(analyzer.analyze(forms).is_ok());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = analyzer
            .analyze(forms)
            .map(|report| report.total_words as u64)
            .unwrap_or(0);
        std::hint::black_box(tokens);
    });

    print_perf("Analyze", forms.clean.len(), elapsed, tokens);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
