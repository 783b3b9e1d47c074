use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use calluna::index::IndexSet;
use calluna::{
    EngineConfig, IdentityInflector, IdentityLemmatizer, ParagraphRecord, ParagraphTable,
    SearchEngine, SearchRequest,
};

const WORDS: &[&str] = &[
    "engine", "index", "paragraph", "corpus", "query", "phrase", "wildcard", "posting",
    "rotation", "biword", "score", "rank", "vocabulary", "term", "document", "page",
    "search", "retrieval", "boolean", "union", "intersection", "prefix", "suffix", "lemma",
];

/// Deterministic synthetic corpus: every paragraph cycles through the word
/// list from a different offset.
fn corpus(paragraphs: usize, words_per_paragraph: usize) -> ParagraphTable {
    let mut table = ParagraphTable::new();
    for i in 0..paragraphs {
        let tokenized: Vec<&str> = (0..words_per_paragraph)
            .map(|j| WORDS[(i * 7 + j) % WORDS.len()])
            .collect();
        let tokenized = tokenized.join(" ");
        table.push(ParagraphRecord {
            document_name: format!("doc-{}", i / 50),
            page_number: (i / 10) as u32,
            paragraph_number: (i % 10) as u32,
            text: tokenized.clone(),
            tokenized,
        });
    }
    table
}

fn build_engine(paragraphs: usize) -> SearchEngine {
    SearchEngine::new(
        corpus(paragraphs, 40),
        Box::new(IdentityLemmatizer),
        Box::new(IdentityInflector),
        EngineConfig::default(),
    )
}

fn bench_index_build(c: &mut Criterion) {
    let table = corpus(1000, 40);
    c.bench_function("index_build_1000_paragraphs", |b| {
        b.iter(|| IndexSet::build(black_box(&table)))
    });
}

fn bench_term_query(c: &mut Criterion) {
    let engine = build_engine(1000);
    let request = SearchRequest::new("index query retrieval");
    c.bench_function("term_query_ranked", |b| {
        b.iter(|| engine.search(black_box(&request)).unwrap())
    });
}

fn bench_phrase_query(c: &mut Criterion) {
    let engine = build_engine(1000);
    let request = SearchRequest::builder("index paragraph corpus")
        .phrase(true)
        .build();
    c.bench_function("phrase_query", |b| {
        b.iter(|| engine.search(black_box(&request)).unwrap())
    });
}

fn bench_wildcard_query(c: &mut Criterion) {
    let engine = build_engine(1000);
    let request = SearchRequest::builder("p*").ranked(false).build();
    c.bench_function("wildcard_query", |b| {
        b.iter(|| engine.search(black_box(&request)).unwrap())
    });
}

fn bench_suggest(c: &mut Criterion) {
    let engine = build_engine(1000);
    c.bench_function("suggest_prefix", |b| {
        b.iter(|| engine.suggest(black_box("pa"), 5))
    });
}

criterion_group!(
    benches,
    bench_index_build,
    bench_term_query,
    bench_phrase_query,
    bench_wildcard_query,
    bench_suggest
);
criterion_main!(benches);
