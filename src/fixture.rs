//! The demo income dataset.
//!
//! Twenty rows of quarterly income per customer, kept verbatim from the
//! exercise data. Returned by value so callers and tests own their copy;
//! there is no process-wide mutable dataset.

use crate::record::{Month, Record};

/// Build the demo dataset: five customers over four quarters.
#[must_use]
pub fn demo_dataset() -> Vec<Record> {
    vec![
        Record::new(1, Month::Sep16, "BizSupplies", 69000.0),
        Record::new(2, Month::Sep16, "Dynamic Attire", 60000.0),
        Record::new(3, Month::Sep16, "Harmonic Sonics", 61000.0),
        Record::new(4, Month::Sep16, "Plumb'n'Stuff", 66000.0),
        Record::new(5, Month::Sep16, "Other", 34000.0),
        Record::new(6, Month::Dec16, "BizSupplies", 71000.0),
        Record::new(7, Month::Dec16, "Dynamic Attire", 59000.0),
        Record::new(8, Month::Dec16, "Harmonic Sonics", 64000.0),
        Record::new(9, Month::Dec16, "Plumb'n'Stuff", 71000.0),
        Record::new(10, Month::Dec16, "Other", 44000.0),
        Record::new(11, Month::Mar17, "BizSupplies", 73000.0),
        Record::new(12, Month::Mar17, "Dynamic Attire", 61000.0),
        Record::new(13, Month::Mar17, "Harmonic Sonics", 63000.0),
        Record::new(14, Month::Mar17, "Plumb'n'Stuff", 74000.0),
        Record::new(15, Month::Mar17, "Other", 46000.0),
        Record::new(16, Month::Jun17, "BizSupplies", 76000.0),
        Record::new(17, Month::Jun17, "Dynamic Attire", 65000.0),
        Record::new(18, Month::Jun17, "Harmonic Sonics", 66000.0),
        Record::new(19, Month::Jun17, "Plumb'n'Stuff", 76000.0),
        Record::new(20, Month::Jun17, "Other", 45000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_shape() {
        let data = demo_dataset();
        assert_eq!(data.len(), 20);
        // Five customers per month, four months.
        for month in Month::ALL {
            assert_eq!(data.iter().filter(|r| r.month == month).count(), 5);
        }
    }

    #[test]
    fn test_demo_dataset_incomes_non_negative() {
        assert!(demo_dataset().iter().all(|r| r.income >= 0.0));
    }

    #[test]
    fn test_demo_dataset_fresh_copies() {
        let mut a = demo_dataset();
        let b = demo_dataset();
        a[0].income = 0.0;
        // Mutating one copy must not leak into another.
        assert!((b[0].income - 69000.0).abs() < f64::EPSILON);
    }
}
