use blockdeck::generator::sample_deck;
use blockdeck::registry;
use blockdeck::templates::Template;
use blockdeck::ui::theme::ThemePalette;
use criterion::{Criterion, criterion_group, criterion_main};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn bench_render_sample_deck(c: &mut Criterion) {
    let deck = sample_deck();
    let theme = ThemePalette::dark();
    let area = Rect::new(0, 0, 120, 40);

    c.bench_function("render_full_sample_deck", |b| {
        b.iter(|| {
            for block in &deck.blocks {
                let kind = registry::resolve(&block.template_name).unwrap();
                let mut template = registry::build(kind, &block.payload);
                let mut buf = Buffer::empty(area);
                template.render(area, &mut buf, &theme, None);
            }
        })
    });
}

fn bench_decode_card_grid(c: &mut Criterion) {
    let deck = sample_deck();
    let block = &deck.blocks[0];
    let kind = registry::resolve(&block.template_name).unwrap();

    c.bench_function("mount_card_grid", |b| {
        b.iter(|| registry::build(kind, &block.payload))
    });
}

criterion_group!(benches, bench_render_sample_deck, bench_decode_card_grid);
criterion_main!(benches);
