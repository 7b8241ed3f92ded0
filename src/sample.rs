//! Synthetic deal records for trying pipelines against a real collection.
//!
//! Each record has the shape `{date, opportunity, state, deal_price}`. Dates
//! are emitted as extended JSON (`{"$date": "..."}`) so the output can be
//! loaded with `mongoimport --jsonArray`.

use chrono::{NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use rand::Rng;
use serde_json::{Value as Json, json};

const STATES: [&str; 2] = ["fail", "success"];

/// One generated deal.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub date: NaiveDate,
    pub opportunity: f64,
    pub state: &'static str,
    pub deal_price: f64,
}

impl Deal {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let day = rng.gen_range(1..=31_u32);
        let date = NaiveDate::from_ymd_opt(2021, 10, day).unwrap_or_default();
        let opportunity =
            round2(rng.gen_range(100_000..=1_000_000_u32) as f64 * rng.gen_range(0.0..1.0));
        let state = STATES[rng.gen_range(0..STATES.len())];
        let deal_price =
            round2(rng.gen_range(10_000..=100_000_u32) as f64 * rng.gen_range(0.0..1.0));

        Deal {
            date,
            opportunity,
            state,
            deal_price,
        }
    }

    pub fn to_json(&self) -> Json {
        let midnight = Utc.from_utc_datetime(&self.date.and_time(NaiveTime::default()));
        json!({
            "date": { "$date": midnight.to_rfc3339_opts(SecondsFormat::Millis, true) },
            "opportunity": self.opportunity,
            "state": self.state,
            "deal_price": self.deal_price,
        })
    }
}

/// Generates `count` deals.
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<Deal> {
    (0..count).map(|_| Deal::random(rng)).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn deals_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for deal in generate(200, &mut rng) {
            assert_eq!(deal.date.format("%Y-%m").to_string(), "2021-10");
            assert!((0.0..=1_000_000.0).contains(&deal.opportunity));
            assert!((0.0..=100_000.0).contains(&deal.deal_price));
            assert!(STATES.contains(&deal.state));
            assert_eq!(round2(deal.opportunity), deal.opportunity);
        }
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let a = generate(10, &mut StdRng::seed_from_u64(42));
        let b = generate(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn date_is_extended_json() {
        let deal = Deal {
            date: NaiveDate::from_ymd_opt(2021, 10, 5).unwrap(),
            opportunity: 1.5,
            state: "success",
            deal_price: 2.25,
        };
        assert_eq!(
            deal.to_json()["date"],
            json!({ "$date": "2021-10-05T00:00:00.000Z" })
        );
    }
}
