use chatmark_engine::{ChatMessage, extract_artifacts, render_markdown};
use criterion::{Criterion, criterion_group, criterion_main};

/// A transcript of `n` assistant replies covering every block kind.
fn generate_transcript(n: usize) -> String {
    let mut content = String::new();
    for i in 0..n {
        content.push_str(&format!("## Answer {i}\n\n"));
        content.push_str("Here's **what** you asked for, with `inline code` and a [link](https://example.com).\n\n");
        content.push_str("| Plan | Price |\n|------|-------|\n| Pro | $20 |\n\n");
        content.push_str("- [x] done\n- [ ] ~~pending~~\n\n1. first\n2. second\n\n");
        content.push_str("> a quote\n\n---\n\n");
        content.push_str("```javascript\nconsole.log(\"hi\");\n```\n\n");
    }
    content
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_transcript(100);
    group.bench_function("render_markdown", |b| {
        b.iter(|| {
            let blocks = render_markdown(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    let message = ChatMessage::assistant(content.clone());
    group.bench_function("extract_artifacts", |b| {
        b.iter(|| {
            let artifacts = extract_artifacts(std::hint::black_box(&message));
            std::hint::black_box(artifacts);
        });
    });

    let plain = "Thanks for reaching out, we'll get back to you shortly.\n".repeat(200);
    group.bench_function("render_plain", |b| {
        b.iter(|| {
            let blocks = render_markdown(std::hint::black_box(&plain));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
