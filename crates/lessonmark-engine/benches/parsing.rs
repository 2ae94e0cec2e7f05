use criterion::{Criterion, criterion_group, criterion_main};
use lessonmark_engine::{ContentType, RawContent, RenderMode, parsing::segment, render};
mod common;

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_lesson_content(100);
    group.bench_function("segment", |b| {
        b.iter(|| {
            let blocks = segment(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let lesson = RawContent::from(common::generate_lesson_content(100));
    group.bench_function("blocks_view", |b| {
        b.iter(|| {
            let units = render(
                std::hint::black_box(&lesson),
                ContentType::LessonPlan,
                RenderMode::Blocks,
            );
            std::hint::black_box(units);
        });
    });

    let quiz = RawContent::from(common::generate_quiz(200));
    group.bench_function("mcq_cards", |b| {
        b.iter(|| {
            let units = render(std::hint::black_box(&quiz), ContentType::Mcq, RenderMode::Cards);
            std::hint::black_box(units);
        });
    });

    let slides = RawContent::from(common::generate_slides(200));
    group.bench_function("slide_cards", |b| {
        b.iter(|| {
            let units = render(std::hint::black_box(&slides), ContentType::Ppt, RenderMode::Cards);
            std::hint::black_box(units);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_segment, bench_render);
criterion_main!(benches);
