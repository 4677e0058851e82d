#[cfg(test)]
mod tests {
    use std::io::Write;

    use tab_garden::activity::{ActivityRead, MemoryActivityStore};
    use tab_garden::engine::Garden;
    use tab_garden::layout::GridLayout;
    use tab_garden::tabs::{FileTabSource, SampleTabSource, TabSource, TabSourceError};

    #[test]
    fn file_listing_grows_a_matching_garden() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 100, "title": "inbox", "url": "https://mail.example/"}},
                {{"id": 200, "title": "build", "url": "https://ci.example/run/7"}},
                {{"id": 300, "url": "https://wiki.example/Home"}}
            ]"#
        )
        .unwrap();

        let tabs = FileTabSource::new(file.path()).tabs().unwrap();
        let mut garden = Garden::with_seed(GridLayout::default(), 2);
        garden.resize(800.0, 600.0);
        garden.plant(&tabs);

        assert_eq!(garden.tab_ids(), vec![100, 200, 300]);
        assert_eq!(garden.entities()[2].label, "");
    }

    #[test]
    fn sample_listing_is_always_available() {
        let tabs = SampleTabSource.tabs().unwrap();
        assert!(!tabs.is_empty());
        let mut garden = Garden::with_seed(GridLayout::default(), 2);
        garden.resize(800.0, 600.0);
        garden.plant(&tabs);
        assert_eq!(garden.len(), tabs.len());
    }

    #[test]
    fn startup_prune_reconciles_stale_activity() {
        // the store remembers tabs 1..=6 from a previous session; only
        // 2, 4, 6 are still open
        let mut store = MemoryActivityStore::new();
        for id in 1..=6 {
            store.record_created(id);
        }

        let tabs = [2u64, 4, 6]
            .iter()
            .map(|id| tab_garden::tabs::Tab {
                id: *id,
                title: format!("tab {id}"),
                url: format!("https://example.com/{id}"),
            })
            .collect::<Vec<_>>();
        let mut garden = Garden::with_seed(GridLayout::default(), 2);
        garden.resize(800.0, 600.0);
        garden.plant(&tabs);

        let removed = store.prune(&garden.tab_ids());
        assert_eq!(removed, 3);
        assert!(store.last_active(4).is_some());
        assert!(store.last_active(5).is_none());
        assert!(store.age(6).is_some());
    }

    #[test]
    fn unreadable_listing_reports_the_path() {
        let err = FileTabSource::new("/no/such/tabs.json").tabs().unwrap_err();
        assert!(matches!(err, TabSourceError::Io { .. }));
        assert!(err.to_string().contains("/no/such/tabs.json"));
    }
}
