use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strand_align::{Alignment, SequenceCollection};
use strand_seq::DnaSequence;

fn random_records(n_seqs: usize, seq_len: usize) -> Vec<(String, String)> {
    let bases = [b'A', b'C', b'G', b'T', b'-'];
    let mut state: u64 = 42;
    (0..n_seqs)
        .map(|i| {
            let seq: Vec<u8> = (0..seq_len)
                .map(|_| {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                    bases[((state >> 33) % 5) as usize]
                })
                .collect();
            (
                format!("seq_{} sample {}", i, i % 7),
                String::from_utf8(seq).unwrap(),
            )
        })
        .collect()
}

fn build(records: &[(String, String)]) -> Alignment<DnaSequence> {
    Alignment::from_records(
        records.iter().map(|(h, s)| (h.as_str(), s.as_str())),
        |raw, id, desc| Ok(DnaSequence::from_record(raw, id, desc)),
        false,
    )
    .unwrap()
}

fn bench_from_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_records");

    for &n in &[100usize, 1000, 10_000] {
        let records = random_records(n, 500);
        group.bench_with_input(BenchmarkId::new("validate", n), &records, |b, recs| {
            b.iter(|| {
                SequenceCollection::from_records(
                    black_box(recs).iter().map(|(h, s)| (h.as_str(), s.as_str())),
                    |raw, id, desc| Ok(DnaSequence::from_record(raw, id, desc)),
                    true,
                )
            })
        });
    }

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    let aln = build(&random_records(1000, 1000));
    group.bench_function("degap_1k", |b| b.iter(|| black_box(&aln).degap()));
    group.bench_function("to_fasta_1k", |b| b.iter(|| black_box(&aln).to_fasta()));
    group.bench_function("is_valid_1k", |b| b.iter(|| black_box(&aln).is_valid()));
    group.bench_function("count_center_spread_1k", |b| {
        b.iter(|| black_box(&aln).count_center_spread())
    });

    group.finish();
}

criterion_group!(benches, bench_from_records, bench_transforms);
criterion_main!(benches);
