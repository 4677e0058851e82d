#[cfg(test)]
mod tests {
    use tab_garden::engine::Garden;
    use tab_garden::hover::TooltipSink;
    use tab_garden::layout::GridLayout;
    use tab_garden::tabs::Tab;
    use tab_garden::tooltip::TooltipOverlay;

    #[derive(Default)]
    struct RecordingSink {
        shows: Vec<(String, f64, f64)>,
        hides: usize,
    }

    impl TooltipSink for RecordingSink {
        fn show(&mut self, text: &str, x: f64, y: f64) {
            self.shows.push((text.to_string(), x, y));
        }

        fn hide(&mut self) {
            self.hides += 1;
        }
    }

    fn garden_of(tabs: &[Tab]) -> Garden {
        let mut garden = Garden::with_seed(GridLayout::new(80.0), 21);
        garden.resize(800.0, 600.0);
        garden.plant(tabs);
        garden
    }

    fn tab(id: u64, title: &str, url: &str) -> Tab {
        Tab {
            id,
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn hovering_a_plant_shows_title_and_origin() {
        let garden = garden_of(&[tab(1, "Rust docs", "https://doc.rust-lang.org/std/")]);
        let position = garden.entities()[0].position;

        let mut sink = RecordingSink::default();
        garden.pointer_moved(position.x + 2.0, position.y - 2.0, &mut sink);

        assert_eq!(sink.shows.len(), 1);
        let (text, x, y) = &sink.shows[0];
        assert_eq!(text, "Rust docs (doc.rust-lang.org)");
        assert_eq!(*x, position.x + 2.0);
        assert_eq!(*y, position.y - 2.0);
        assert_eq!(sink.hides, 0);
    }

    #[test]
    fn pointer_away_from_plants_hides_the_tooltip() {
        let garden = garden_of(&[tab(1, "a", "https://a.example/")]);
        let mut sink = RecordingSink::default();
        garden.pointer_moved(5.0, 5.0, &mut sink);
        assert!(sink.shows.is_empty());
        assert_eq!(sink.hides, 1);
    }

    #[test]
    fn adjacent_plants_resolve_to_the_later_one() {
        // spacing 80, radius widened past half a cell: the pointer midway
        // between two plants is inside both radii and the later one wins
        let mut garden = garden_of(&[
            tab(1, "left", "https://left.example/"),
            tab(2, "right", "https://right.example/"),
        ]);
        garden.set_hover_radius(50.0);
        let left = garden.entities()[0].position;
        let mut sink = RecordingSink::default();
        garden.pointer_moved(left.x + 40.0, left.y, &mut sink);
        assert_eq!(sink.shows.len(), 1);
        assert!(sink.shows[0].0.starts_with("right"));
    }

    #[test]
    fn malformed_origin_degrades_to_placeholder() {
        let garden = garden_of(&[tab(3, "settings", "about:preferences")]);
        let position = garden.entities()[0].position;
        let mut sink = RecordingSink::default();
        garden.pointer_moved(position.x, position.y, &mut sink);
        assert_eq!(sink.shows[0].0, "settings (unknown origin)");
    }

    #[test]
    fn overlay_latches_effects_like_any_sink() {
        let garden = garden_of(&[tab(4, "docs", "https://docs.example/")]);
        let position = garden.entities()[0].position;
        let mut overlay = TooltipOverlay::new();

        garden.pointer_moved(position.x, position.y, &mut overlay);
        assert!(overlay.visible());
        assert_eq!(overlay.text(), Some("docs (docs.example)"));

        garden.pointer_moved(position.x + 500.0, position.y, &mut overlay);
        assert!(!overlay.visible());
    }
}
