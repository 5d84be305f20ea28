//! Immutable FHIR R4 element model.
//!
//! Every data type is an immutable value object constructed through a
//! per-type builder whose `build()` validates structural invariants, so an
//! invalid instance can never be observed. The types support value
//! equality/hashing, structural JSON via serde, and a five-hook visitor
//! traversal over the element tree.
//!
//! ```
//! use argent_model::{codes::NameUse, HumanName};
//!
//! let name = HumanName::builder()
//!     .r#use(NameUse::Official)
//!     .family("Chalmers")
//!     .given("Peter")
//!     .given("James")
//!     .build()?;
//!
//! assert_eq!(name.family.as_ref().unwrap().as_str(), Some("Chalmers"));
//! # Ok::<(), argent_model::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod code;
pub mod codes;
pub mod element;
pub mod error;
pub mod primitive;
pub mod types;
pub mod validation;
pub mod visitor;

pub use code::{CodeValue, Coded};
pub use element::{Backbone, BackboneData, Element, ElementData};
pub use error::{Error, Result};
pub use primitive::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, Decimal, FhirString, Id, Instant,
    Integer, Markdown, PositiveInt, Primitive, PrimitiveBuilder, Time, UnsignedInt, Uri, Url,
};
pub use types::*;
pub use visitor::{ElementCounter, Visitable, Visitor};
