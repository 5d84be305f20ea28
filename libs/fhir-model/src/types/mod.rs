//! Concrete data types of the element model.
//!
//! One module per type, each following the same shape: a struct with an
//! embedded [`crate::element::ElementData`] or
//! [`crate::element::BackboneData`], a staged builder whose `build()`
//! validates, and `Element`/`Visitable` impls.
//!
//! The serde impls are structural, not a conformant FHIR wire format, and
//! `Deserialize` does not re-run the builder checks: a deserialized value
//! mirrors the input JSON even where `build()` would have rejected it.
//! Callers that need validated instances rebuild via `to_builder().build()`.

mod address;
mod attachment;
mod coding;
mod dosage;
pub mod element_definition;
mod extension;
mod human_name;
mod identifier;
mod period;
mod quantity;
mod reference;
mod signature;
mod timing;
mod value;

pub use address::{Address, AddressBuilder};
pub use attachment::{Attachment, AttachmentBuilder};
pub use coding::{CodeableConcept, CodeableConceptBuilder, Coding, CodingBuilder};
pub use dosage::{
    AsNeeded, Dosage, DosageBuilder, Dose, DoseAndRate, DoseAndRateBuilder, Rate,
};
pub use element_definition::{ElementDefinition, ElementDefinitionBuilder, MinMaxValue};
pub use extension::{Extension, ExtensionBuilder};
pub use human_name::{HumanName, HumanNameBuilder};
pub use identifier::{Identifier, IdentifierBuilder};
pub use period::{Period, PeriodBuilder};
pub use quantity::{
    Duration, Quantity, QuantityBuilder, Range, RangeBuilder, Ratio, RatioBuilder, SimpleQuantity,
};
pub use reference::{Reference, ReferenceBuilder};
pub use signature::{Signature, SignatureBuilder};
pub use timing::{Bounds, Repeat, RepeatBuilder, Timing, TimingBuilder};
pub use value::DataValue;
