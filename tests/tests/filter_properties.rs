use std::sync::OnceLock;

use adipo_data::{CaseFilter, DatasetRecord};
use adipo_stats::summarize;
use proptest::prelude::*;
use tests::shipped_dataset;

fn dataset() -> &'static [DatasetRecord] {
    static DATA: OnceLock<Vec<DatasetRecord>> = OnceLock::new();
    DATA.get_or_init(shipped_dataset)
}

proptest! {
    #[test]
    fn age_window_selects_exactly_the_matching_rows(min in 10.0f64..70.0, span in 0.0f64..40.0) {
        let filter = CaseFilter::new().age_between(min, min + span);
        let rows = filter.apply(dataset());
        let expected = dataset()
            .iter()
            .filter(|r| r.case.age >= min && r.case.age <= min + span)
            .count();
        prop_assert_eq!(rows.len(), expected);
    }

    #[test]
    fn dashboard_accounts_for_every_selected_row(min in 10.0f64..50.0, bins in 1usize..40) {
        let rows = CaseFilter::new().age_min(min).apply(dataset());
        match summarize(&rows, bins) {
            Ok(dashboard) => {
                prop_assert_eq!(dashboard.overview.records, rows.len());
                prop_assert_eq!(dashboard.bmi.total(), rows.len());
                prop_assert_eq!(dashboard.by_gender.total(), rows.len());
            }
            Err(_) => prop_assert!(rows.is_empty()),
        }
    }
}
