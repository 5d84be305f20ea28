use serde::{Deserialize, Serialize};

use crate::code::Coded;
use crate::codes::{AddressType, AddressUse};
use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::FhirString;
use crate::types::{Extension, Period};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A postal address, expressed using postal conventions rather than GPS or
/// other location positioning formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(flatten)]
    pub element: ElementData,

    /// The purpose of this address (home | work | temp | old | billing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<Coded<AddressUse>>,

    /// Whether the address is postal, physical, or both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Coded<AddressType>>,

    /// Text representation of the full address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FhirString>,

    /// Street name, number, direction, P.O. box, etc., in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<FhirString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<FhirString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<FhirString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FhirString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<FhirString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<FhirString>,

    /// Time period when the address was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    pub fn to_builder(&self) -> AddressBuilder {
        AddressBuilder {
            element: self.element.clone(),
            r#use: self.r#use.clone(),
            r#type: self.r#type.clone(),
            text: self.text.clone(),
            line: self.line.clone(),
            city: self.city.clone(),
            district: self.district.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            period: self.period.clone(),
        }
    }
}

impl Element for Address {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Address"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || self.r#use.is_some()
            || self.r#type.is_some()
            || self.text.is_some()
            || !self.line.is_empty()
            || self.city.is_some()
            || self.district.is_some()
            || self.state.is_some()
            || self.postal_code.is_some()
            || self.country.is_some()
            || self.period.is_some()
    }
}

impl Visitable for Address {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.r#use, "use", visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.text, "text", visitor);
                accept_all(&self.line, "line", visitor);
                accept_opt(&self.city, "city", visitor);
                accept_opt(&self.district, "district", visitor);
                accept_opt(&self.state, "state", visitor);
                accept_opt(&self.postal_code, "postalCode", visitor);
                accept_opt(&self.country, "country", visitor);
                accept_opt(&self.period, "period", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    element: ElementData,
    r#use: Option<Coded<AddressUse>>,
    r#type: Option<Coded<AddressType>>,
    text: Option<FhirString>,
    line: Vec<FhirString>,
    city: Option<FhirString>,
    district: Option<FhirString>,
    state: Option<FhirString>,
    postal_code: Option<FhirString>,
    country: Option<FhirString>,
    period: Option<Period>,
}

impl AddressBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.element.extension = extension;
        self
    }

    pub fn r#use(mut self, r#use: impl Into<Coded<AddressUse>>) -> Self {
        self.r#use = Some(r#use.into());
        self
    }

    pub fn r#type(mut self, r#type: impl Into<Coded<AddressType>>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn line(mut self, line: impl Into<FhirString>) -> Self {
        self.line.push(line.into());
        self
    }

    pub fn set_line(mut self, line: Vec<FhirString>) -> Self {
        self.line = line;
        self
    }

    pub fn city(mut self, city: impl Into<FhirString>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn district(mut self, district: impl Into<FhirString>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn state(mut self, state: impl Into<FhirString>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<FhirString>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn country(mut self, country: impl Into<FhirString>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn build(self) -> Result<Address> {
        let address = Address {
            element: self.element,
            r#use: self.r#use,
            r#type: self.r#type,
            text: self.text,
            line: self.line,
            city: self.city,
            district: self.district,
            state: self.state,
            postal_code: self.postal_code,
            country: self.country,
            period: self.period,
        };
        validation::check_element_strings(&address)?;
        validation::require_value_or_children(&address)?;
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_populated_field_satisfies_ele_1() {
        assert!(Address::builder().city("Ann Arbor").build().is_ok());
        assert!(Address::builder().build().is_err());
    }

    #[test]
    fn lines_keep_insertion_order() {
        let address = Address::builder()
            .r#use(AddressUse::Home)
            .line("534 Erewhon St")
            .line("Apt 2")
            .city("PleasantVille")
            .state("VT")
            .postal_code("3999")
            .build()
            .unwrap();
        assert_eq!(address.line[0].as_str(), Some("534 Erewhon St"));
        assert_eq!(address.line[1].as_str(), Some("Apt 2"));
        assert_eq!(address.r#use.unwrap().code_str(), Some("home"));
    }
}
