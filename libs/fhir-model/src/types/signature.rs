use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::{Base64Binary, Code, Instant};
use crate::types::{Coding, Extension, Reference};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A digital signature along with supporting context.
///
/// Unlike most data types, three fields are mandatory: at least one
/// signature type coding, the time of signing, and who signed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(flatten)]
    pub element: ElementData,

    /// Indication of the reason the entity signed the object.
    pub r#type: Vec<Coding>,

    /// When the signature was created.
    pub when: Instant,

    /// Who signed.
    pub who: Reference,

    /// The party represented by the signer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,

    /// Mime type of the target being signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_format: Option<Code>,

    /// Mime type of the signature itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig_format: Option<Code>,

    /// The actual signature content, base64 encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Base64Binary>,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    pub fn to_builder(&self) -> SignatureBuilder {
        SignatureBuilder {
            element: self.element.clone(),
            r#type: self.r#type.clone(),
            when: Some(self.when.clone()),
            who: Some(self.who.clone()),
            on_behalf_of: self.on_behalf_of.clone(),
            target_format: self.target_format.clone(),
            sig_format: self.sig_format.clone(),
            data: self.data.clone(),
        }
    }
}

impl Element for Signature {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Signature"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Visitable for Signature {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(&self.r#type, "type", visitor);
                self.when.accept("when", None, visitor);
                self.who.accept("who", None, visitor);
                accept_opt(&self.on_behalf_of, "onBehalfOf", visitor);
                accept_opt(&self.target_format, "targetFormat", visitor);
                accept_opt(&self.sig_format, "sigFormat", visitor);
                accept_opt(&self.data, "data", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignatureBuilder {
    element: ElementData,
    r#type: Vec<Coding>,
    when: Option<Instant>,
    who: Option<Reference>,
    on_behalf_of: Option<Reference>,
    target_format: Option<Code>,
    sig_format: Option<Code>,
    data: Option<Base64Binary>,
}

impl SignatureBuilder {
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

    pub fn r#type(mut self, r#type: Coding) -> Self {
        self.r#type.push(r#type);
        self
    }

    pub fn set_type(mut self, r#type: Vec<Coding>) -> Self {
        self.r#type = r#type;
        self
    }

    pub fn when(mut self, when: impl Into<Instant>) -> Self {
        self.when = Some(when.into());
        self
    }

    pub fn who(mut self, who: Reference) -> Self {
        self.who = Some(who);
        self
    }

    pub fn on_behalf_of(mut self, on_behalf_of: Reference) -> Self {
        self.on_behalf_of = Some(on_behalf_of);
        self
    }

    pub fn target_format(mut self, target_format: impl Into<Code>) -> Self {
        self.target_format = Some(target_format.into());
        self
    }

    pub fn sig_format(mut self, sig_format: impl Into<Code>) -> Self {
        self.sig_format = Some(sig_format.into());
        self
    }

    pub fn data(mut self, data: impl Into<Base64Binary>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn build(self) -> Result<Signature> {
        let signature = Signature {
            element: self.element,
            r#type: validation::check_non_empty(self.r#type, "type")?,
            when: validation::require(self.when, "when")?,
            who: validation::require(self.who, "who")?,
            on_behalf_of: self.on_behalf_of,
            target_format: self.target_format,
            sig_format: self.sig_format,
            data: self.data,
        };
        validation::check_element_strings(&signature)?;
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn author_type() -> Coding {
        Coding::builder()
            .system("urn:iso-astm:E1762-95:2013")
            .code("1.2.840.10065.1.12.1.1")
            .display("Author's Signature")
            .build()
            .unwrap()
    }

    #[test]
    fn all_three_required_fields_are_enforced() {
        let who = Reference::builder().reference("Practitioner/1").build().unwrap();

        let err = Signature::builder()
            .when("2024-02-27T08:39:24+10:00")
            .who(who.clone())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyRequired("type")));

        let err = Signature::builder()
            .r#type(author_type())
            .who(who.clone())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequired("when")));

        let err = Signature::builder()
            .r#type(author_type())
            .when("2024-02-27T08:39:24+10:00")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequired("who")));

        let signature = Signature::builder()
            .r#type(author_type())
            .when("2024-02-27T08:39:24+10:00")
            .who(who)
            .build()
            .unwrap();
        assert_eq!(signature.r#type.len(), 1);
    }
}
