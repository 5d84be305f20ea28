use serde::{Deserialize, Serialize};

use crate::code::Coded;
use crate::codes::NameUse;
use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::FhirString;
use crate::types::{Extension, Period};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A name of a human, with parts and usage information.
///
/// Names may change, and a person may have several simultaneously for
/// different uses; `period` scopes when this one applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    #[serde(flatten)]
    pub element: ElementData,

    /// The purpose of this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<Coded<NameUse>>,

    /// Text representation of the full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FhirString>,

    /// Family name, often called surname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<FhirString>,

    /// Given names, including middle names, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<FhirString>,

    /// Parts that come before the name, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix: Vec<FhirString>,

    /// Parts that come after the name, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suffix: Vec<FhirString>,

    /// Time period when the name was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl HumanName {
    pub fn builder() -> HumanNameBuilder {
        HumanNameBuilder::default()
    }

    pub fn to_builder(&self) -> HumanNameBuilder {
        HumanNameBuilder {
            element: self.element.clone(),
            r#use: self.r#use.clone(),
            text: self.text.clone(),
            family: self.family.clone(),
            given: self.given.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            period: self.period.clone(),
        }
    }
}

impl Element for HumanName {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "HumanName"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || self.r#use.is_some()
            || self.text.is_some()
            || self.family.is_some()
            || !self.given.is_empty()
            || !self.prefix.is_empty()
            || !self.suffix.is_empty()
            || self.period.is_some()
    }
}

impl Visitable for HumanName {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.r#use, "use", visitor);
                accept_opt(&self.text, "text", visitor);
                accept_opt(&self.family, "family", visitor);
                accept_all(&self.given, "given", visitor);
                accept_all(&self.prefix, "prefix", visitor);
                accept_all(&self.suffix, "suffix", visitor);
                accept_opt(&self.period, "period", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HumanNameBuilder {
    element: ElementData,
    r#use: Option<Coded<NameUse>>,
    text: Option<FhirString>,
    family: Option<FhirString>,
    given: Vec<FhirString>,
    prefix: Vec<FhirString>,
    suffix: Vec<FhirString>,
    period: Option<Period>,
}

impl HumanNameBuilder {
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

    pub fn r#use(mut self, r#use: impl Into<Coded<NameUse>>) -> Self {
        self.r#use = Some(r#use.into());
        self
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn family(mut self, family: impl Into<FhirString>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn given(mut self, given: impl Into<FhirString>) -> Self {
        self.given.push(given.into());
        self
    }

    pub fn set_given(mut self, given: Vec<FhirString>) -> Self {
        self.given = given;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<FhirString>) -> Self {
        self.prefix.push(prefix.into());
        self
    }

    pub fn set_prefix(mut self, prefix: Vec<FhirString>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn suffix(mut self, suffix: impl Into<FhirString>) -> Self {
        self.suffix.push(suffix.into());
        self
    }

    pub fn set_suffix(mut self, suffix: Vec<FhirString>) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn build(self) -> Result<HumanName> {
        let human_name = HumanName {
            element: self.element,
            r#use: self.r#use,
            text: self.text,
            family: self.family,
            given: self.given,
            prefix: self.prefix,
            suffix: self.suffix,
            period: self.period,
        };
        validation::check_element_strings(&human_name)?;
        validation::require_value_or_children(&human_name)?;
        Ok(human_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_parts_keep_insertion_order() {
        let name = HumanName::builder()
            .r#use(NameUse::Official)
            .family("Chalmers")
            .given("Peter")
            .given("James")
            .prefix("Mr")
            .build()
            .unwrap();
        assert_eq!(name.given[0].as_str(), Some("Peter"));
        assert_eq!(name.given[1].as_str(), Some("James"));
        assert!(HumanName::builder().build().is_err());
    }

    #[test]
    fn value_equality_and_to_builder() {
        let a = HumanName::builder().family("Windsor").given("Peter").build().unwrap();
        let b = a.to_builder().build().unwrap();
        assert_eq!(a, b);
        let c = a.to_builder().given("James").build().unwrap();
        assert_ne!(a, c);
    }
}
