use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexto_rs::{Tokenizer, Trie, TrieBuilder};

const WORDS: &str = "ฉัน\nชอบ\nกิน\nข้าว\nผัด\nข้าวผัด\nไป\nตลาด\nรถ\nรถไฟ\nไฟ\nฟ้า\nสวัสดี\nครับ\nประเทศ\nไทย";

fn sample_text() -> String {
    "ฉันชอบกินข้าวผัด ไปตลาดด้วยรถไฟฟ้า <b>Hello</b> 2024, สวัสดีครับประเทศไทย! ".repeat(50)
}

fn bench_tokenize(c: &mut Criterion) {
    let mut builder = TrieBuilder::new();
    builder.load_words(WORDS);
    let tokenizer = Tokenizer::new(builder.build());
    let empty = Tokenizer::new(Trie::new());
    let text = sample_text();

    c.bench_function("tokenize_with_dictionary", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&text)))
    });

    c.bench_function("tokenize_empty_dictionary", |b| {
        b.iter(|| empty.tokenize(black_box(&text)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
