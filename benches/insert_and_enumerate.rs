use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use word_trie::wordlist::index::Index;
use word_trie::wordlist::trie::Trie;

fn random_words(count: usize, max_len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len)
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = random_words(50_000, 12);

    {
        let mut group = c.benchmark_group("insert");
        group.sample_size(10);
        group.bench_function("50k words", |b| {
            b.iter(|| {
                let mut trie = Trie::new();
                trie.add_all(words.iter().map(|w| w.as_str()));
                black_box(trie.size())
            })
        });
    }

    {
        let mut trie = Trie::new();
        trie.add_all(words.iter().map(|w| w.as_str()));

        let mut group = c.benchmark_group("enumerate");
        group.sample_size(10);
        group.bench_function("50k words", |b| {
            b.iter(|| black_box(trie.enumerate_words()))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
