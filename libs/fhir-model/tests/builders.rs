//! Construction-time validation and value semantics across the model.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use argent_model::codes::{AddressUse, NameUse};
use argent_model::{
    Address, Boolean, Coding, Error, Extension, FhirString, HumanName, Period, Reference,
    Signature,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn ele_1_rejects_empty_elements() {
    assert!(matches!(
        Address::builder().build(),
        Err(Error::MissingValueOrChildren("Address"))
    ));
    assert!(matches!(
        HumanName::builder().build(),
        Err(Error::MissingValueOrChildren("HumanName"))
    ));
    assert!(matches!(
        FhirString::builder().build(),
        Err(Error::MissingValueOrChildren("string"))
    ));
}

#[test]
fn a_single_child_field_satisfies_ele_1() {
    assert!(Address::builder().city("Boston").build().is_ok());
    assert!(Period::builder().start("2024-01-01").build().is_ok());
}

#[test]
fn an_extension_alone_satisfies_ele_1_for_primitives() {
    let ext = Extension::builder()
        .url("http://hl7.org/fhir/StructureDefinition/data-absent-reason")
        .value(Boolean::from(true))
        .build()
        .unwrap();
    let s = FhirString::builder().extension(ext).build().unwrap();
    assert!(s.value.is_none());
    assert_eq!(s.extension.len(), 1);
}

#[test]
fn string_lexical_rules_are_enforced_at_build() {
    assert!(matches!(
        FhirString::builder().value("bad\u{0}value").build(),
        Err(Error::InvalidString(_))
    ));
    // An invalid string nested in a complex type is caught by that type's
    // build(), even though the primitive itself was made via From.
    assert!(matches!(
        HumanName::builder().family("nul\u{0}name").build(),
        Err(Error::InvalidString(_))
    ));
    assert!(matches!(
        Address::builder().city("   ").build(),
        Err(Error::InvalidString(_))
    ));
    assert!(HumanName::builder().family("O'Brien").build().is_ok());
}

#[test]
fn missing_required_fields_name_the_field() {
    let err = Signature::builder().build().unwrap_err();
    assert!(matches!(err, Error::EmptyRequired("type")));

    let err = Extension::builder().build().unwrap_err();
    assert!(matches!(err, Error::MissingRequired("url")));
}

#[test]
fn equal_values_hash_equally() {
    let build = || {
        Address::builder()
            .r#use(AddressUse::Home)
            .line("534 Erewhon St")
            .city("PleasantVille")
            .state("VT")
            .postal_code("3999")
            .build()
            .unwrap()
    };
    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = a.to_builder().city("Springfield").build().unwrap();
    assert_ne!(a, c);
}

#[test]
fn to_builder_round_trip_is_identity() {
    let name = HumanName::builder()
        .id("n1")
        .r#use(NameUse::Maiden)
        .family("Windsor")
        .given("Peter")
        .given("James")
        .period(Period::builder().end("2002").build().unwrap())
        .build()
        .unwrap();
    let rebuilt = name.to_builder().build().unwrap();
    assert_eq!(name, rebuilt);
    assert_eq!(hash_of(&name), hash_of(&rebuilt));
}

#[test]
fn builders_do_not_share_state() {
    let base = Coding::builder().system("http://loinc.org");
    let a = base.clone().code("8480-6").build().unwrap();
    let b = base.code("8462-4").build().unwrap();
    assert_ne!(a, b);
    assert_eq!(a.system, b.system);
}

#[test]
fn reference_display_alone_is_enough() {
    let reference = Reference::builder().display("Dr. Example").build().unwrap();
    assert!(reference.reference.is_none());
    assert!(reference.identifier.is_none());
}
