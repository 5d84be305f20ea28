//! Structural JSON round trips.

use argent_model::codes::{AddressUse, UnitsOfTime};
use argent_model::types::element_definition::{Base, Constraint, Type};
use argent_model::codes::ConstraintSeverity;
use argent_model::{
    Address, Bounds, DataValue, ElementDefinition, Extension, FhirString, Period, Repeat, Timing,
    Uri,
};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn address_serializes_flat_and_camel_case() {
    let address = Address::builder()
        .id("a1")
        .r#use(AddressUse::Home)
        .line("534 Erewhon St")
        .city("PleasantVille")
        .postal_code("3999")
        .build()
        .unwrap();

    let value = serde_json::to_value(&address).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "a1",
            "use": "home",
            "line": ["534 Erewhon St"],
            "city": "PleasantVille",
            "postalCode": "3999",
        })
    );

    let back: Address = serde_json::from_value(value).unwrap();
    assert_eq!(back, address);
}

#[test]
fn primitives_with_extensions_use_the_object_form() {
    let ext = Extension::builder()
        .url("http://example.org/verified")
        .value(DataValue::String(FhirString::from("yes")))
        .build()
        .unwrap();
    let city = FhirString::builder().value("Boston").extension(ext).build().unwrap();
    let address = Address::builder().city(city).build().unwrap();

    let value = serde_json::to_value(&address).unwrap();
    assert_eq!(
        value,
        json!({
            "city": {
                "extension": [{
                    "url": "http://example.org/verified",
                    "value": { "string": "yes" },
                }],
                "value": "Boston",
            }
        })
    );

    let back: Address = serde_json::from_value(value).unwrap();
    assert_eq!(back, address);
}

#[test]
fn timing_bounds_round_trip_with_their_variant() {
    let timing = Timing::builder()
        .repeat(
            Repeat::builder()
                .bounds(Period::builder().start("2024-03-01").build().unwrap())
                .frequency(3u32)
                .period(Decimal::ONE)
                .period_unit(UnitsOfTime::Day)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let value = serde_json::to_value(&timing).unwrap();
    assert_eq!(
        value["repeat"]["bounds"],
        json!({ "Period": { "start": "2024-03-01" } })
    );
    assert_eq!(value["repeat"]["periodUnit"], json!("d"));

    let back: Timing = serde_json::from_value(value).unwrap();
    assert_eq!(back, timing);
    match back.repeat.unwrap().bounds.unwrap() {
        Bounds::Period(period) => assert_eq!(period.start.unwrap().as_str(), Some("2024-03-01")),
        other => panic!("unexpected bounds: {other:?}"),
    }
}

#[test]
fn element_definition_round_trips() {
    let ed = ElementDefinition::builder()
        .path("Patient.birthDate")
        .short("The date of birth for the individual")
        .min(0u32)
        .max("1")
        .base(
            Base::builder()
                .path("Patient.birthDate")
                .min(0u32)
                .max("1")
                .build()
                .unwrap(),
        )
        .r#type(Type::builder().code(Uri::from("date")).build().unwrap())
        .constraint(
            Constraint::builder()
                .key("ele-1")
                .severity(ConstraintSeverity::Error)
                .human("All FHIR elements must have a @value or children")
                .build()
                .unwrap(),
        )
        .is_summary(true)
        .build()
        .unwrap();

    let value = serde_json::to_value(&ed).unwrap();
    assert_eq!(value["path"], json!("Patient.birthDate"));
    assert_eq!(value["base"]["max"], json!("1"));
    assert_eq!(value["constraint"][0]["severity"], json!("error"));

    let back: ElementDefinition = serde_json::from_value(value).unwrap();
    assert_eq!(back, ed);
}

#[test]
fn unknown_codes_fail_deserialization() {
    let result: Result<Address, _> = serde_json::from_value(json!({ "use": "mailing" }));
    assert!(result.is_err());
}

#[test]
fn deserialization_is_structural_and_skips_builder_checks() {
    // Decoding mirrors the input JSON; it does not re-run build(). An empty
    // object decodes to an instance that rebuilding would reject.
    let address: Address = serde_json::from_value(json!({})).unwrap();
    assert!(address.to_builder().build().is_err());
}
