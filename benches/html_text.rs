//! Benchmarks for rendering job descriptions.
//!
//! These benchmarks measure HTML to display line conversion for typical and
//! long job descriptions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jobbank_tui::utils::text_processing::render_trusted_html;

const DESCRIPTION: &str = "<h3>About the role</h3>\
<p>We&rsquo;re looking for a <strong>Senior Rust Engineer</strong> to join our \
fully remote platform team.</p>\
<ul><li>Design async services with Tokio</li><li>Own CI &amp; release tooling</li>\
<li>Mentor engineers across time zones</li></ul>\
<p>Salary: $140k&ndash;$170k<br>Apply before 2024-12-01.</p>";

fn bench_render_description(c: &mut Criterion) {
    c.bench_function("render_trusted_html_description", |b| {
        b.iter(|| render_trusted_html(black_box(DESCRIPTION)))
    });
}

fn bench_render_long_description(c: &mut Criterion) {
    let long = DESCRIPTION.repeat(50);
    c.bench_function("render_trusted_html_long_description", |b| {
        b.iter(|| render_trusted_html(black_box(&long)))
    });
}

criterion_group!(
    benches,
    bench_render_description,
    bench_render_long_description
);
criterion_main!(benches);
