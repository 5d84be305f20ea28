//! The open choice of data types carried by `Extension.value[x]` and the
//! value-carrying fields of `ElementDefinition`.
//!
//! Each variant holds one complete element, so a populated choice field is
//! correct by construction; there is no runtime whitelist to consult. The
//! enum serializes externally tagged with the FHIR type name, which keeps
//! the string-carried primitives (uri, code, date, ...) distinguishable.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::primitive::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, Decimal, FhirString, Id, Instant,
    Integer, Markdown, PositiveInt, Time, UnsignedInt, Uri, Url,
};
use crate::types::{
    Address, Attachment, CodeableConcept, Coding, Dosage, Extension, HumanName, Identifier, Period,
    Quantity, Range, Ratio, Reference, Signature, Timing,
};
use crate::visitor::{Visitable, Visitor};

/// One value drawn from the open set of data types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataValue {
    #[serde(rename = "base64Binary")]
    Base64Binary(Base64Binary),
    #[serde(rename = "boolean")]
    Boolean(Boolean),
    #[serde(rename = "canonical")]
    Canonical(Canonical),
    #[serde(rename = "code")]
    Code(Code),
    #[serde(rename = "date")]
    Date(Date),
    #[serde(rename = "dateTime")]
    DateTime(DateTime),
    #[serde(rename = "decimal")]
    Decimal(Decimal),
    #[serde(rename = "id")]
    Id(Id),
    #[serde(rename = "instant")]
    Instant(Instant),
    #[serde(rename = "integer")]
    Integer(Integer),
    #[serde(rename = "markdown")]
    Markdown(Markdown),
    #[serde(rename = "positiveInt")]
    PositiveInt(PositiveInt),
    #[serde(rename = "string")]
    String(FhirString),
    #[serde(rename = "time")]
    Time(Time),
    #[serde(rename = "unsignedInt")]
    UnsignedInt(UnsignedInt),
    #[serde(rename = "uri")]
    Uri(Uri),
    #[serde(rename = "url")]
    Url(Url),
    Address(Address),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    Dosage(Dosage),
    HumanName(HumanName),
    Identifier(Identifier),
    Period(Period),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    Reference(Reference),
    Signature(Signature),
    Timing(Timing),
}

macro_rules! delegate {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            DataValue::Base64Binary($inner) => $body,
            DataValue::Boolean($inner) => $body,
            DataValue::Canonical($inner) => $body,
            DataValue::Code($inner) => $body,
            DataValue::Date($inner) => $body,
            DataValue::DateTime($inner) => $body,
            DataValue::Decimal($inner) => $body,
            DataValue::Id($inner) => $body,
            DataValue::Instant($inner) => $body,
            DataValue::Integer($inner) => $body,
            DataValue::Markdown($inner) => $body,
            DataValue::PositiveInt($inner) => $body,
            DataValue::String($inner) => $body,
            DataValue::Time($inner) => $body,
            DataValue::UnsignedInt($inner) => $body,
            DataValue::Uri($inner) => $body,
            DataValue::Url($inner) => $body,
            DataValue::Address($inner) => $body,
            DataValue::Attachment($inner) => $body,
            DataValue::CodeableConcept($inner) => $body,
            DataValue::Coding($inner) => $body,
            DataValue::Dosage($inner) => $body,
            DataValue::HumanName($inner) => $body,
            DataValue::Identifier($inner) => $body,
            DataValue::Period($inner) => $body,
            DataValue::Quantity($inner) => $body,
            DataValue::Range($inner) => $body,
            DataValue::Ratio($inner) => $body,
            DataValue::Reference($inner) => $body,
            DataValue::Signature($inner) => $body,
            DataValue::Timing($inner) => $body,
        }
    };
}

impl DataValue {
    /// The FHIR type name declared by the active variant. For the
    /// string-carried primitives this is more specific than what the inner
    /// element reports.
    pub fn declared_type(&self) -> &'static str {
        match self {
            DataValue::Base64Binary(_) => "base64Binary",
            DataValue::Boolean(_) => "boolean",
            DataValue::Canonical(_) => "canonical",
            DataValue::Code(_) => "code",
            DataValue::Date(_) => "date",
            DataValue::DateTime(_) => "dateTime",
            DataValue::Decimal(_) => "decimal",
            DataValue::Id(_) => "id",
            DataValue::Instant(_) => "instant",
            DataValue::Integer(_) => "integer",
            DataValue::Markdown(_) => "markdown",
            DataValue::PositiveInt(_) => "positiveInt",
            DataValue::String(_) => "string",
            DataValue::Time(_) => "time",
            DataValue::UnsignedInt(_) => "unsignedInt",
            DataValue::Uri(_) => "uri",
            DataValue::Url(_) => "url",
            DataValue::Address(_) => "Address",
            DataValue::Attachment(_) => "Attachment",
            DataValue::CodeableConcept(_) => "CodeableConcept",
            DataValue::Coding(_) => "Coding",
            DataValue::Dosage(_) => "Dosage",
            DataValue::HumanName(_) => "HumanName",
            DataValue::Identifier(_) => "Identifier",
            DataValue::Period(_) => "Period",
            DataValue::Quantity(_) => "Quantity",
            DataValue::Range(_) => "Range",
            DataValue::Ratio(_) => "Ratio",
            DataValue::Reference(_) => "Reference",
            DataValue::Signature(_) => "Signature",
            DataValue::Timing(_) => "Timing",
        }
    }
}

impl Element for DataValue {
    fn id(&self) -> Option<&str> {
        delegate!(self, inner => inner.id())
    }

    fn extension(&self) -> &[Extension] {
        delegate!(self, inner => inner.extension())
    }

    fn type_name(&self) -> &'static str {
        delegate!(self, inner => inner.type_name())
    }

    fn has_value(&self) -> bool {
        delegate!(self, inner => inner.has_value())
    }

    fn has_children(&self) -> bool {
        delegate!(self, inner => inner.has_children())
    }
}

impl Visitable for DataValue {
    /// Delegates to the active variant under the declared field name, so
    /// the visitor observes the variant's own node rather than the choice
    /// wrapper.
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        delegate!(self, inner => inner.accept(name, index, visitor))
    }
}

macro_rules! data_value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for DataValue {
                fn from(value: $ty) -> Self {
                    DataValue::$variant(value)
                }
            }
        )+
    };
}

// From impls exist only where the Rust type maps to a single variant; the
// string-carried primitives and the unsigned aliases need an explicit
// variant choice.
data_value_from! {
    Boolean => Boolean,
    Integer => Integer,
    Decimal => Decimal,
    Address => Address,
    Attachment => Attachment,
    CodeableConcept => CodeableConcept,
    Coding => Coding,
    Dosage => Dosage,
    HumanName => HumanName,
    Identifier => Identifier,
    Period => Period,
    Quantity => Quantity,
    Range => Range,
    Ratio => Ratio,
    Reference => Reference,
    Signature => Signature,
    Timing => Timing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_type_is_more_specific_than_the_inner_node() {
        let value = DataValue::Uri(Uri::from("http://example.org"));
        assert_eq!(value.declared_type(), "uri");
        assert_eq!(value.type_name(), "string");
    }

    #[test]
    fn tagged_serialization_distinguishes_string_kinds() {
        let uri = DataValue::Uri(Uri::from("http://example.org"));
        let json = serde_json::to_value(&uri).unwrap();
        assert_eq!(json, serde_json::json!({ "uri": "http://example.org" }));
        let back: DataValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, uri);
    }
}
