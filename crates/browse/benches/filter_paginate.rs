//! Benchmarks for filtering and pagination
//!
//! Run with: cargo bench --package browse
//!
//! Uses the built-in demonstration catalog.

use browse::{BookFilter, CatalogBrowser, FilterKey};
use catalog::Catalog;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;

fn bench_apply_filters(c: &mut Criterion) {
    let catalog = Catalog::demo();
    let mut filter = BookFilter::new();
    filter.update(FilterKey::Title, "книга");
    filter.update(FilterKey::Language, "english");

    c.bench_function("book_filter_apply", |b| {
        b.iter(|| {
            let matching = filter.apply(black_box(catalog.books()));
            black_box(matching.len())
        })
    });
}

fn bench_load_page(c: &mut Criterion) {
    let mut browser = CatalogBrowser::new(Arc::new(Catalog::demo()));
    browser.update_filter(FilterKey::Format, "PDF");

    c.bench_function("catalog_browser_load", |b| {
        b.iter(|| {
            let view = browser.load(black_box(2));
            black_box(view.total_matches)
        })
    });
}

criterion_group!(benches, bench_apply_filters, bench_load_page);
criterion_main!(benches);
