use chrono::{Local, NaiveDate};
use rand::{Rng, RngCore};

/// Batch id for `date` and a sequence number, `MBG-YYYYMMDD-NNN`.
pub fn format_batch_id(date: NaiveDate, sequence: u16) -> String {
    format!("MBG-{}-{sequence:03}", date.format("%Y%m%d"))
}

/// Fresh batch id for today's local date with a random sequence in `1..=999`.
pub fn new_batch_id(rng: &mut dyn RngCore) -> String {
    let sequence = rng.random_range(1..=999);
    format_batch_id(Local::now().date_naive(), sequence)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use regex::Regex;

    use super::*;

    #[test]
    fn formats_date_and_padded_sequence() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).expect("date");
        assert_eq!(format_batch_id(date, 7), "MBG-20250106-007");
        assert_eq!(format_batch_id(date, 999), "MBG-20250106-999");
    }

    #[test]
    fn new_ids_have_the_batch_shape() {
        let shape = Regex::new(r"^MBG-\d{8}-\d{3}$").expect("regex");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            let id = new_batch_id(&mut rng);
            assert!(shape.is_match(&id), "{id}");
            assert!(!id.ends_with("-000"));
        }
    }
}
