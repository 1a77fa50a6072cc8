use flow_placer_core::prelude::*;

fn squares(n: usize) -> Vec<ItemSpec> {
    vec![ItemSpec::new(10, 10); n]
}

#[test]
fn build_selects_strategy_by_direction() {
    let h = build(GrowDirection::Horizontal, 0);
    let v = build(GrowDirection::Vertical, 5);
    assert_eq!(h.direction(), GrowDirection::Horizontal);
    assert_eq!(v.direction(), GrowDirection::Vertical);
    assert_eq!(h.parallel_items(), 0);
    assert_eq!(v.parallel_items(), 5);
}

#[test]
fn horizontal_placer_flows_row_wise() {
    let placer = build(GrowDirection::Horizontal, 0);
    let out = placer.compute_placement(Size::new(100, 100), &squares(3));
    assert!(out.rects.iter().all(|r| r.y == 0));
    assert!(out.rects.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn vertical_placer_flows_column_wise() {
    let placer = build(GrowDirection::Vertical, 0);
    let out = placer.compute_placement(Size::new(100, 100), &squares(3));
    assert!(out.rects.iter().all(|r| r.x == 0));
    assert!(out.rects.windows(2).all(|w| w[0].y < w[1].y));
}

#[test]
fn build_from_tag_accepts_known_tags() {
    assert_eq!(build_from_tag(0, 1).direction(), GrowDirection::Horizontal);
    assert_eq!(build_from_tag(1, 1).direction(), GrowDirection::Vertical);
}

#[test]
#[should_panic(expected = "unknown grow direction tag 7")]
fn build_from_tag_panics_on_unknown_tag() {
    let _ = build_from_tag(7, 0);
}

#[test]
fn build_from_config_carries_spacing() {
    let cfg = PlacerConfig::builder()
        .direction(GrowDirection::Vertical)
        .parallel_items(2)
        .item_spacing(3)
        .build();
    let placer = build_from_config(&cfg);
    assert_eq!(placer.direction(), GrowDirection::Vertical);
    let out = placer.compute_placement(Size::new(100, 100), &squares(2));
    assert_eq!(out.rects[1], Rect::new(0, 13, 10, 10));
}

#[test]
fn placers_can_be_used_from_other_threads() {
    let placers: Vec<Box<dyn Placer>> = vec![
        build(GrowDirection::Horizontal, 0),
        build(GrowDirection::Vertical, 0),
    ];
    let handles: Vec<_> = placers
        .into_iter()
        .map(|p| std::thread::spawn(move || p.compute_placement(Size::new(25, 25), &squares(5))))
        .collect();
    let results: Vec<Placement> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0].size, Size::new(20, 30));
    assert_eq!(results[1].size, Size::new(30, 20));
}

#[test]
fn concrete_placers_match_factory_output() {
    let items = squares(9);
    let available = Size::new(35, 35);
    let boxed = build(GrowDirection::Horizontal, 2);
    let concrete = HorizontalListPlacer::new(2);
    assert_eq!(
        boxed.compute_placement(available, &items),
        concrete.compute_placement(available, &items)
    );
    let boxed = build(GrowDirection::Vertical, 2);
    let concrete = VerticalListPlacer::new(2);
    assert_eq!(
        boxed.compute_placement(available, &items),
        concrete.compute_placement(available, &items)
    );
}
