use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::{FhirString, Uri};
use crate::types::{Extension, Identifier};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A reference from one resource to another, by literal URL, by logical
/// identifier, or by display text alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(flatten)]
    pub element: ElementData,

    /// Literal reference: a relative, internal, or absolute URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<FhirString>,

    /// Expected type of the target, when the reference itself does not
    /// convey it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Uri>,

    /// Logical reference, used when no literal reference exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Identifier>>,

    /// Text alternative for the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<FhirString>,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            element: self.element.clone(),
            reference: self.reference.clone(),
            r#type: self.r#type.clone(),
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        }
    }
}

impl Element for Reference {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Reference"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || self.reference.is_some()
            || self.r#type.is_some()
            || self.identifier.is_some()
            || self.display.is_some()
    }
}

impl Visitable for Reference {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.reference, "reference", visitor);
                accept_opt(&self.r#type, "type", visitor);
                if let Some(identifier) = &self.identifier {
                    identifier.accept("identifier", None, visitor);
                }
                accept_opt(&self.display, "display", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    element: ElementData,
    reference: Option<FhirString>,
    r#type: Option<Uri>,
    identifier: Option<Box<Identifier>>,
    display: Option<FhirString>,
}

impl ReferenceBuilder {
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

    pub fn reference(mut self, reference: impl Into<FhirString>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn r#type(mut self, r#type: impl Into<Uri>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(Box::new(identifier));
        self
    }

    pub fn display(mut self, display: impl Into<FhirString>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn build(self) -> Result<Reference> {
        let reference = Reference {
            element: self.element,
            reference: self.reference,
            r#type: self.r#type,
            identifier: self.identifier,
            display: self.display,
        };
        validation::check_element_strings(&reference)?;
        validation::require_value_or_children(&reference)?;
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_logical_references() {
        let literal = Reference::builder().reference("Patient/123").build().unwrap();
        assert_eq!(literal.reference.as_ref().unwrap().as_str(), Some("Patient/123"));

        let logical = Reference::builder()
            .identifier(
                Identifier::builder()
                    .system("urn:ietf:rfc:3986")
                    .value("urn:oid:1.2.3.4")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert!(logical.reference.is_none());
        assert!(Reference::builder().build().is_err());
    }
}
