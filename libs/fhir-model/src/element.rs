//! Base element contracts
//!
//! FHIR models `Element -> BackboneElement -> concrete type` as an
//! inheritance chain. Here that becomes composition: every concrete
//! type embeds [`ElementData`] (or [`BackboneData`]) by value and implements
//! the [`Element`] trait for the shared contract.

use serde::{Deserialize, Serialize};

use crate::types::Extension;

/// Common state shared by every element: an optional intra-resource id and
/// an ordered list of extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

/// Common state for backbone elements, which additionally carry modifier
/// extensions. Modifier extensions change the meaning of the element that
/// contains them and must never be silently ignored by consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackboneData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(
        rename = "modifierExtension",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub modifier_extension: Vec<Extension>,
}

/// Contract implemented by every node in the element tree.
///
/// `has_value`/`has_children` drive the ele-1 invariant check
/// ([`crate::validation::require_value_or_children`]): concrete types OR
/// their own fields into `has_children`, so an element passes exactly when
/// it carries a primitive value or at least one populated child.
pub trait Element {
    /// Intra-resource id of this element, if any.
    fn id(&self) -> Option<&str>;

    /// Extensions attached to this element.
    fn extension(&self) -> &[Extension];

    /// The FHIR type name of this node (e.g. `"Address"`, `"boolean"`).
    /// Choice-typed fields surface the runtime variant through this.
    fn type_name(&self) -> &'static str;

    /// Whether this element carries a primitive value. Only primitives do.
    fn has_value(&self) -> bool {
        false
    }

    /// Whether this element has at least one populated child field.
    fn has_children(&self) -> bool {
        !self.extension().is_empty()
    }
}

/// Marker contract for backbone elements, exposing modifier extensions so
/// consumers can honor the must-not-ignore rule generically.
pub trait Backbone: Element {
    fn modifier_extension(&self) -> &[Extension];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_data_defaults_to_empty() {
        let data = ElementData::default();
        assert!(data.id.is_none());
        assert!(data.extension.is_empty());
    }

    #[test]
    fn backbone_data_serializes_modifier_extension_camel_case() {
        let data = BackboneData {
            id: Some("b1".into()),
            extension: Vec::new(),
            modifier_extension: Vec::new(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "b1" }));
    }
}
