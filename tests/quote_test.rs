//! Itemized quotes and their wire shape

use pretty_assertions::assert_eq;
use shipfee::{calculate_shipping_fee, quote, Error, Zone};

const TOLERANCE: f64 = 1e-4;

#[test]
fn breakdown_terms_add_up() {
    let q = quote(30.0, Zone::International, true).unwrap();
    assert_eq!(q.zone, Zone::International);
    assert!((q.base_fee - 20.0).abs() <= TOLERANCE);
    assert!((q.heavy_surcharge - 7.5).abs() <= TOLERANCE);
    assert!((q.subtotal - 27.5).abs() <= TOLERANCE);
    assert!((q.insurance_cost - 0.4125).abs() <= TOLERANCE);
    assert!((q.total - 27.9125).abs() <= TOLERANCE);
}

#[test]
fn uninsured_quote_has_zero_insurance() {
    let q = quote(5.0, Zone::Domestic, false).unwrap();
    assert_eq!(q.heavy_surcharge, 0.0);
    assert_eq!(q.insurance_cost, 0.0);
    assert_eq!(q.total, q.subtotal);
}

#[test]
fn quote_agrees_with_string_entry_point() {
    for zone in Zone::ALL {
        for weight in [0.01, 5.0, 10.0, 10.01, 30.0, 50.0] {
            for insured in [false, true] {
                let total = quote(weight, zone, insured).unwrap().total;
                let fee = calculate_shipping_fee(weight, zone.as_str(), insured).unwrap();
                assert_eq!(total, fee, "({weight}, {zone}, {insured})");
            }
        }
    }
}

#[test]
fn quote_validates_weight() {
    assert_eq!(quote(0.0, Zone::Domestic, false), Err(Error::InvalidWeight));
    assert_eq!(quote(50.01, Zone::Express, true), Err(Error::InvalidWeight));
}

#[test]
fn zone_serializes_to_canonical_name() {
    assert_eq!(serde_json::to_string(&Zone::Domestic).unwrap(), "\"Domestic\"");
    assert_eq!(
        serde_json::from_str::<Zone>("\"Express\"").unwrap(),
        Zone::Express
    );
    assert!(serde_json::from_str::<Zone>("\"domestic\"").is_err());
}

#[test]
fn breakdown_json_shape() {
    let q = quote(30.0, Zone::Express, false).unwrap();
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "zone": "Express",
            "base_fee": 30.0,
            "heavy_surcharge": 7.5,
            "subtotal": 37.5,
            "insurance_cost": 0.0,
            "total": 37.5,
        })
    );

    let back: shipfee::FeeBreakdown = serde_json::from_value(json).unwrap();
    assert_eq!(back, q);
}
