//! Cohort summary statistics and real-world benchmark figures.
//!
//! Benchmarks are CDC statistics for US adults with diagnosed diabetes and
//! give a rough yardstick for the synthetic distributions. Only the numbers
//! live here; rendering belongs to the CLI.

use std::collections::BTreeMap;

use trialgen_model::{Ethnicity, PatientRecord, Sex};

/// Benchmark sex proportions (CDC, US adults with diagnosed diabetes).
pub const SEX_BENCHMARK: [(Sex, f64); 2] = [(Sex::Male, 0.52), (Sex::Female, 0.48)];

/// Benchmark ethnicity proportions (CDC, US adults with diagnosed diabetes).
pub const ETHNICITY_BENCHMARK: [(Ethnicity, f64); 5] = [
    (Ethnicity::White, 0.61),
    (Ethnicity::Black, 0.15),
    (Ethnicity::Hispanic, 0.16),
    (Ethnicity::Asian, 0.06),
    (Ethnicity::Other, 0.02),
];

/// Benchmark mean age.
pub const AGE_BENCHMARK_MEAN: f64 = 52.1;

/// Benchmark mean BMI.
pub const BMI_BENCHMARK_MEAN: f64 = 34.6;

// LOINC codes from the built-in lab table; lab values live only in the
// enriched sub-records, so means are recovered by code.
const HBA1C_LOINC: &str = "4548-4";
const BMI_LOINC: &str = "39156-5";

/// Aggregate view of one generated batch.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortSummary {
    pub total: usize,
    pub eligible: usize,
    /// Ineligibility reasons by frequency, descending (ties by name).
    pub reason_counts: Vec<(String, usize)>,
    /// Counts per sex, in category order.
    pub sex_counts: Vec<(Sex, usize)>,
    /// Counts per ethnicity, in category order.
    pub ethnicity_counts: Vec<(Ethnicity, usize)>,
    pub mean_age: Option<f64>,
    pub mean_hba1c: Option<f64>,
    pub mean_bmi: Option<f64>,
}

impl CohortSummary {
    pub fn from_records(records: &[PatientRecord]) -> Self {
        let total = records.len();
        let eligible = records.iter().filter(|record| record.trial_eligible).count();

        let mut reason_map: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            for reason in &record.ineligibility_reasons {
                *reason_map.entry(reason.as_str()).or_default() += 1;
            }
        }
        let mut reason_counts: Vec<(String, usize)> = reason_map
            .into_iter()
            .map(|(reason, count)| (reason.to_string(), count))
            .collect();
        reason_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let sex_counts = Sex::ALL
            .iter()
            .map(|sex| {
                let count = records.iter().filter(|record| record.sex == *sex).count();
                (*sex, count)
            })
            .collect();
        let ethnicity_counts = Ethnicity::ALL
            .iter()
            .map(|ethnicity| {
                let count = records
                    .iter()
                    .filter(|record| record.ethnicity == *ethnicity)
                    .count();
                (*ethnicity, count)
            })
            .collect();

        let mean_age = mean(records.iter().map(|record| f64::from(record.age)));
        let mean_hba1c = mean_lab_value(records, HBA1C_LOINC);
        let mean_bmi = mean_lab_value(records, BMI_LOINC);

        Self {
            total,
            eligible,
            reason_counts,
            sex_counts,
            ethnicity_counts,
            mean_age,
            mean_hba1c,
            mean_bmi,
        }
    }

    pub fn ineligible(&self) -> usize {
        self.total - self.eligible
    }

    /// Fraction of the cohort that passed screening; 0 for an empty cohort.
    pub fn eligible_fraction(&self) -> f64 {
        fraction(self.eligible, self.total)
    }
}

/// `part / total`, or 0 when the denominator is zero.
pub fn fraction(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 { None } else { Some(sum / count as f64) }
}

fn mean_lab_value(records: &[PatientRecord], loinc_code: &str) -> Option<f64> {
    mean(
        records
            .iter()
            .flat_map(|record| &record.lab_results)
            .filter(|lab| lab.loinc_code == loinc_code)
            .map(|lab| lab.value),
    )
}
