//! Row selection for the dashboard.

use adipo_case::{Frequency, Gender, YesNo};

use crate::record::DatasetRecord;

/// Conjunction of optional criteria over dataset rows.
///
/// An unset criterion matches every row. A criterion set to an empty list
/// matches nothing, like a multi-select with every option cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseFilter {
    genders: Option<Vec<Gender>>,
    age_min: Option<f64>,
    age_max: Option<f64>,
    family_history: Option<Vec<YesNo>>,
    caec: Option<Vec<Frequency>>,
    favc: Option<Vec<YesNo>>,
}

impl CaseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.genders = Some(genders.into_iter().collect());
        self
    }

    pub fn age_min(mut self, min: f64) -> Self {
        self.age_min = Some(min);
        self
    }

    pub fn age_max(mut self, max: f64) -> Self {
        self.age_max = Some(max);
        self
    }

    /// Inclusive on both ends.
    pub fn age_between(self, min: f64, max: f64) -> Self {
        self.age_min(min).age_max(max)
    }

    pub fn family_history(mut self, values: impl IntoIterator<Item = YesNo>) -> Self {
        self.family_history = Some(values.into_iter().collect());
        self
    }

    pub fn caec(mut self, values: impl IntoIterator<Item = Frequency>) -> Self {
        self.caec = Some(values.into_iter().collect());
        self
    }

    pub fn favc(mut self, values: impl IntoIterator<Item = YesNo>) -> Self {
        self.favc = Some(values.into_iter().collect());
        self
    }

    /// True when no criterion is set.
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, record: &DatasetRecord) -> bool {
        fn allowed<T: PartialEq>(set: &Option<Vec<T>>, value: &T) -> bool {
            set.as_ref().map_or(true, |set| set.contains(value))
        }

        let case = &record.case;
        allowed(&self.genders, &case.gender)
            && self.age_min.map_or(true, |min| case.age >= min)
            && self.age_max.map_or(true, |max| case.age <= max)
            && allowed(&self.family_history, &case.family_history)
            && allowed(&self.caec, &case.caec)
            && allowed(&self.favc, &case.favc)
    }

    pub fn apply<'a>(&self, records: &'a [DatasetRecord]) -> Vec<&'a DatasetRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adipo_case::{ObesityLevel, RawCase, Transport};

    fn record(gender: Gender, age: f64, family_history: YesNo, caec: Frequency) -> DatasetRecord {
        DatasetRecord {
            case: RawCase {
                gender,
                age,
                height: 170.0,
                weight: 70.0,
                family_history,
                favc: YesNo::Yes,
                fcvc: 2.0,
                ncp: 3.0,
                caec,
                smoke: YesNo::No,
                ch2o: 2.0,
                scc: YesNo::No,
                faf: 1.0,
                tue: 1.0,
                calc: Frequency::No,
                mtrans: Transport::Walking,
            },
            level: ObesityLevel::NormalWeight,
        }
    }

    fn sample() -> Vec<DatasetRecord> {
        vec![
            record(Gender::Female, 18.0, YesNo::Yes, Frequency::Sometimes),
            record(Gender::Male, 25.0, YesNo::No, Frequency::Frequently),
            record(Gender::Female, 40.0, YesNo::No, Frequency::Always),
            record(Gender::Male, 61.0, YesNo::Yes, Frequency::No),
        ]
    }

    #[test]
    fn unrestricted_filter_keeps_everything() {
        let rows = sample();
        let filter = CaseFilter::new();
        assert!(filter.is_unrestricted());
        assert_eq!(filter.apply(&rows).len(), 4);
    }

    #[test]
    fn age_range_is_inclusive() {
        let rows = sample();
        let kept = CaseFilter::new().age_between(18.0, 40.0).apply(&rows);
        let ages: Vec<f64> = kept.iter().map(|r| r.case.age).collect();
        assert_eq!(ages, [18.0, 25.0, 40.0]);
        assert_eq!(CaseFilter::new().age_min(41.0).apply(&rows).len(), 1);
    }

    #[test]
    fn criteria_combine_with_and() {
        let rows = sample();
        let kept = CaseFilter::new()
            .genders([Gender::Female])
            .family_history([YesNo::No])
            .apply(&rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].case.age, 40.0);

        let kept = CaseFilter::new()
            .caec([Frequency::Frequently, Frequency::Always])
            .favc([YesNo::Yes])
            .apply(&rows);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let rows = sample();
        let filter = CaseFilter::new().genders(Vec::<Gender>::new());
        assert!(!filter.is_unrestricted());
        assert!(filter.apply(&rows).is_empty());
    }
}
