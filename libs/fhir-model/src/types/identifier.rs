use serde::{Deserialize, Serialize};

use crate::code::Coded;
use crate::codes::IdentifierUse;
use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::{FhirString, Uri};
use crate::types::{CodeableConcept, Extension, Period, Reference};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// An identifier intended for computation, e.g. an MRN or a driver's
/// license number.
///
/// `assigner` is boxed because Identifier and [`Reference`] refer to each
/// other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(flatten)]
    pub element: ElementData,

    /// The purpose of this identifier (usual | official | temp | secondary | old).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<Coded<IdentifierUse>>,

    /// Coded type of the identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,

    /// Namespace for the identifier value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Uri>,

    /// The value that is unique within the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FhirString>,

    /// Time period when the identifier is/was valid for use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization that issued the identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    pub fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            element: self.element.clone(),
            r#use: self.r#use.clone(),
            r#type: self.r#type.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            period: self.period.clone(),
            assigner: self.assigner.clone(),
        }
    }
}

impl Element for Identifier {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Identifier"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || self.r#use.is_some()
            || self.r#type.is_some()
            || self.system.is_some()
            || self.value.is_some()
            || self.period.is_some()
            || self.assigner.is_some()
    }
}

impl Visitable for Identifier {
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
                accept_opt(&self.system, "system", visitor);
                accept_opt(&self.value, "value", visitor);
                accept_opt(&self.period, "period", visitor);
                if let Some(assigner) = &self.assigner {
                    assigner.accept("assigner", None, visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierBuilder {
    element: ElementData,
    r#use: Option<Coded<IdentifierUse>>,
    r#type: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Box<Reference>>,
}

impl IdentifierBuilder {
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

    pub fn r#use(mut self, r#use: impl Into<Coded<IdentifierUse>>) -> Self {
        self.r#use = Some(r#use.into());
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn value(mut self, value: impl Into<FhirString>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn assigner(mut self, assigner: Reference) -> Self {
        self.assigner = Some(Box::new(assigner));
        self
    }

    pub fn build(self) -> Result<Identifier> {
        let identifier = Identifier {
            element: self.element,
            r#use: self.r#use,
            r#type: self.r#type,
            system: self.system,
            value: self.value,
            period: self.period,
            assigner: self.assigner,
        };
        validation::check_element_strings(&identifier)?;
        validation::require_value_or_children(&identifier)?;
        Ok(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::IdentifierUse;

    #[test]
    fn identifier_with_assigner_reference() {
        let identifier = Identifier::builder()
            .r#use(IdentifierUse::Official)
            .system("http://hospital.example.org/mrn")
            .value("12345")
            .assigner(Reference::builder().display("Example Hospital").build().unwrap())
            .build()
            .unwrap();
        assert_eq!(identifier.r#use.as_ref().unwrap().code_str(), Some("official"));
        assert_eq!(identifier.assigner.unwrap().type_name(), "Reference");
    }
}
