use super::SAMPLE_PAYLOAD;
use crate::{Metric, Totals, format_count, parse_locations};

#[test]
fn test_sample_payload_parses_in_order() {
    let locations = parse_locations(SAMPLE_PAYLOAD).unwrap();
    assert_eq!(locations.len(), 16);
    assert_eq!(locations[0].country, "Thailand");
    assert_eq!(locations[8].title(), "Hubei, China");
    assert_eq!(locations[12].title(), "France");
}

#[test]
fn test_totals_match_payload_latest() {
    let locations = parse_locations(SAMPLE_PAYLOAD).unwrap();
    let totals = Totals::from_locations(&locations);

    assert_eq!(totals.get(Metric::Confirmed), 186_840);
    assert_eq!(totals.get(Metric::Recovered), 67_427);
    assert_eq!(totals.get(Metric::Deaths), 9_113);
    assert_eq!(format_count(totals.get(Metric::Confirmed)), "186,840");
}

#[test]
fn test_totals_equal_fieldwise_sums() {
    let locations = parse_locations(SAMPLE_PAYLOAD).unwrap();
    let totals = Totals::from_locations(&locations);

    for metric in Metric::ALL {
        let expected: u64 = locations.iter().map(|l| l.latest.get(metric)).sum();
        assert_eq!(totals.get(metric), expected, "{}", metric.key());
    }
}
