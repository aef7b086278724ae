//! Benchmarks for NFA compilation and DFA matching

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use likematch::{Condition, Nfa};

/// `%seg1%seg2%...%`: each segment must appear in order.
fn segments_nfa(segments: &[&[u8]]) -> Nfa {
    let any = Condition::prefix(0, 0).unwrap();
    let mut b = Nfa::builder();
    let mut prev = b.add_start_state().unwrap();
    b.add_transition(prev, any, prev).unwrap();
    for segment in segments {
        for &byte in *segment {
            let next = b.add_state();
            b.add_transition(prev, Condition::value(byte), next).unwrap();
            prev = next;
        }
        b.add_transition(prev, any, prev).unwrap();
    }
    b.set_accept(prev).unwrap();
    b.build().unwrap()
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_dfa");
    for len in [4usize, 16, 64] {
        let needle: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
        let nfa = segments_nfa(&[&needle]);
        group.bench_with_input(BenchmarkId::new("contains", len), &nfa, |b, nfa| {
            b.iter(|| black_box(nfa).to_dfa())
        });
    }

    let nfa = segments_nfa(&[b"foo", b"bar", b"baz"]);
    group.bench_function("three_segments", |b| b.iter(|| black_box(&nfa).to_dfa()));
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let nfa = segments_nfa(&[b"needle"]);
    let dfa = nfa.to_dfa();
    let mut haystack = vec![b'x'; 4096];
    haystack.extend_from_slice(b"needle");

    c.bench_function("dfa_match_4k", |b| {
        b.iter(|| dfa.matches(black_box(&haystack)))
    });
    c.bench_function("nfa_match_4k", |b| {
        b.iter(|| nfa.matches(black_box(&haystack)))
    });
}

criterion_group!(benches, bench_compile, bench_match);
criterion_main!(benches);
