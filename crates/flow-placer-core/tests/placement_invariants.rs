use flow_placer_core::prelude::*;
use rand::{Rng, SeedableRng};

fn disjoint(rects: &[Rect]) -> bool {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].intersects(&rects[j]) {
                return false;
            }
        }
    }
    true
}

fn random_items(rng: &mut rand::rngs::StdRng, n: usize) -> Vec<ItemSpec> {
    let aligns = [Align::Start, Align::Center, Align::End, Align::Stretch];
    (0..n)
        .map(|_| {
            let w = rng.gen_range(0..=64);
            let h = rng.gen_range(0..=64);
            let grow = if rng.gen_bool(0.3) { rng.gen_range(1..=4) } else { 0 };
            ItemSpec::new(w, h)
                .with_align(aligns[rng.gen_range(0..aligns.len())])
                .with_grow(grow)
        })
        .collect()
}

fn random_config(rng: &mut rand::rngs::StdRng, direction: GrowDirection) -> PlacerConfig {
    PlacerConfig::builder()
        .direction(direction)
        .parallel_items(rng.gen_range(0..=6))
        .item_spacing(rng.gen_range(0..=4))
        .line_spacing(rng.gen_range(0..=4))
        .build()
}

fn check(cfg: &PlacerConfig, available: Size, items: &[ItemSpec]) {
    let placer = build_from_config(cfg);
    let out = placer.compute_placement(available, items);
    let again = placer.compute_placement(available, items);
    assert_eq!(out, again, "placement must be repeatable");

    assert_eq!(out.rects.len(), items.len());
    for (r, it) in out.rects.iter().zip(items) {
        assert!(r.size().covers(&it.min_size), "{:?} smaller than {:?}", r, it.min_size);
    }
    assert!(disjoint(&out.rects));

    // lines partition the items in order
    let mut next = 0;
    for line in &out.lines {
        assert_eq!(line.first, next);
        assert!(line.count > 0);
        if cfg.parallel_items > 0 {
            assert!(line.count <= cfg.parallel_items as usize);
        }
        next += line.count;
    }
    assert_eq!(next, items.len());

    let horizontal = cfg.direction == GrowDirection::Horizontal;
    for w in out.lines.windows(2) {
        assert!(w[0].offset + w[0].thickness <= w[1].offset);
    }
    for line in &out.lines {
        let rects = &out.rects[line.first..line.first + line.count];
        for pair in rects.windows(2) {
            if horizontal {
                assert!(pair[0].x + pair[0].w <= pair[1].x);
            } else {
                assert!(pair[0].y + pair[0].h <= pair[1].y);
            }
        }
        for r in rects {
            let (cross, cross_len) = if horizontal { (r.y, r.h) } else { (r.x, r.w) };
            assert!(cross >= line.offset);
            assert!(cross + cross_len <= line.offset + line.thickness);
        }
        // multi-item lines never exceed the available main size
        let main_avail = if horizontal { available.w } else { available.h };
        if line.count > 1 {
            assert!(line.extent <= main_avail);
        }
    }
    for r in &out.rects {
        assert!(r.x + r.w <= out.size.w);
        assert!(r.y + r.h <= out.size.h);
    }
}

#[test]
fn random_inputs_respect_invariants() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for round in 0..200 {
        let direction = if round % 2 == 0 {
            GrowDirection::Horizontal
        } else {
            GrowDirection::Vertical
        };
        let cfg = random_config(&mut rng, direction);
        let n = rng.gen_range(0..60);
        let items = random_items(&mut rng, n);
        let available = Size::new(rng.gen_range(0..=400), rng.gen_range(0..=400));
        check(&cfg, available, &items);
    }
}

#[test]
fn identical_inputs_give_identical_outputs_across_instances() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let items = random_items(&mut rng, 120);
    for direction in [GrowDirection::Horizontal, GrowDirection::Vertical] {
        let a = build(direction, 0).compute_placement(Size::new(256, 256), &items);
        let b = build(direction, 0).compute_placement(Size::new(256, 256), &items);
        assert_eq!(a, b);
    }
}
