//! Value-set enumerations used by the concrete types
//!
//! Each enum is a closed set of legal codes; the variants are the typed
//! constants and `from_code` is the single string-to-constant mapping.

use crate::code::value_set;

value_set! {
    /// The use of an address (home | work | temp | old | billing).
    AddressUse ("AddressUse") {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Billing => "billing",
    }
}

value_set! {
    /// The type of an address (postal | physical | both).
    AddressType ("AddressType") {
        Postal => "postal",
        Physical => "physical",
        Both => "both",
    }
}

value_set! {
    /// The use of a human name.
    NameUse ("NameUse") {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Nickname => "nickname",
        Anonymous => "anonymous",
        Old => "old",
        Maiden => "maiden",
    }
}

value_set! {
    /// Identifies the purpose for an identifier.
    IdentifierUse ("IdentifierUse") {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}

value_set! {
    /// How a quantity value should be understood when it is not exact.
    QuantityComparator ("QuantityComparator") {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
    }
}

value_set! {
    /// Whether an audited event succeeded or failed.
    AuditEventOutcome ("AuditEventOutcome") {
        /// The operation completed successfully.
        Success => "0",
        /// The action was not successful but no significant failure occurred.
        MinorFailure => "4",
        /// The action was aborted due to a significant failure.
        SeriousFailure => "8",
        /// An error of such magnitude occurred that the system is no longer
        /// available for use.
        MajorFailure => "12",
    }
}

value_set! {
    /// UCUM units of time used by Timing.repeat.
    UnitsOfTime ("UnitsOfTime") {
        Second => "s",
        Minute => "min",
        Hour => "h",
        Day => "d",
        Week => "wk",
        Month => "mo",
        Year => "a",
    }
}

value_set! {
    /// Days of the week.
    DayOfWeek ("DayOfWeek") {
        Monday => "mon",
        Tuesday => "tue",
        Wednesday => "wed",
        Thursday => "thu",
        Friday => "fri",
        Saturday => "sat",
        Sunday => "sun",
    }
}

value_set! {
    /// Real-world events that a scheduled action can be tied to.
    EventTiming ("EventTiming") {
        Morning => "MORN",
        EarlyMorning => "MORN.early",
        LateMorning => "MORN.late",
        Noon => "NOON",
        Afternoon => "AFT",
        EarlyAfternoon => "AFT.early",
        LateAfternoon => "AFT.late",
        Evening => "EVE",
        EarlyEvening => "EVE.early",
        LateEvening => "EVE.late",
        Night => "NIGHT",
        AfterSleep => "PHS",
        BeforeSleep => "HS",
        AfterWaking => "WAKE",
        WithMeal => "C",
        WithBreakfast => "CM",
        WithLunch => "CD",
        WithDinner => "CV",
        BeforeMeal => "AC",
        BeforeBreakfast => "ACM",
        BeforeLunch => "ACD",
        BeforeDinner => "ACV",
        AfterMeal => "PC",
        AfterBreakfast => "PCM",
        AfterLunch => "PCD",
        AfterDinner => "PCV",
    }
}

value_set! {
    /// How a property is represented when serialized.
    PropertyRepresentation ("PropertyRepresentation") {
        XmlAttr => "xmlAttr",
        XmlText => "xmlText",
        TypeAttr => "typeAttr",
        CdaText => "cdaText",
        Xhtml => "xhtml",
    }
}

value_set! {
    /// How slices are distinguished from each other.
    DiscriminatorType ("DiscriminatorType") {
        Value => "value",
        Exists => "exists",
        Pattern => "pattern",
        Type => "type",
        Profile => "profile",
    }
}

value_set! {
    /// Whether additional slices are allowed beyond those defined.
    SlicingRules ("SlicingRules") {
        Closed => "closed",
        Open => "open",
        OpenAtEnd => "openAtEnd",
    }
}

value_set! {
    /// How resource references can be aggregated.
    AggregationMode ("AggregationMode") {
        Contained => "contained",
        Referenced => "referenced",
        Bundled => "bundled",
    }
}

value_set! {
    /// Whether a reference needs to be version specific or version
    /// independent, or whether either can be used.
    ReferenceVersionRules ("ReferenceVersionRules") {
        Either => "either",
        Independent => "independent",
        Specific => "specific",
    }
}

value_set! {
    /// Severity of an element definition constraint.
    ConstraintSeverity ("ConstraintSeverity") {
        Error => "error",
        Warning => "warning",
    }
}

value_set! {
    /// Indication of the degree of conformance expectations associated with
    /// a terminology binding.
    BindingStrength ("BindingStrength") {
        Required => "required",
        Extensible => "extensible",
        Preferred => "preferred",
        Example => "example",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Coded, CodeValue};
    use crate::error::Error;

    #[test]
    fn from_code_matches_exactly() {
        assert_eq!(
            AuditEventOutcome::from_code("4").unwrap(),
            AuditEventOutcome::MinorFailure
        );
        assert_eq!(NameUse::from_code("official").unwrap(), NameUse::Official);
    }

    #[test]
    fn unrecognized_codes_are_rejected() {
        let err = AuditEventOutcome::from_code("99").unwrap_err();
        match err {
            Error::UnrecognizedCode { code, value_set } => {
                assert_eq!(code, "99");
                assert_eq!(value_set, "AuditEventOutcome");
            }
            other => panic!("unexpected error: {other}"),
        }
        // Matching is exact, not case-folded.
        assert!(AddressUse::from_code("Home").is_err());
    }

    #[test]
    fn coded_factory_produces_typed_constants() {
        let outcome = Coded::<AuditEventOutcome>::of("4").unwrap();
        assert_eq!(outcome.value, Some(AuditEventOutcome::MinorFailure));
        assert_eq!(outcome.code_str(), Some("4"));
        assert!(Coded::<AuditEventOutcome>::of("99").is_err());
    }

    #[test]
    fn serde_uses_the_bare_code_string() {
        let json = serde_json::to_value(EventTiming::BeforeBreakfast).unwrap();
        assert_eq!(json, serde_json::json!("ACM"));
        let back: EventTiming = serde_json::from_value(json).unwrap();
        assert_eq!(back, EventTiming::BeforeBreakfast);
    }

    #[test]
    fn values_lists_every_constant_in_order() {
        assert_eq!(QuantityComparator::values().len(), 4);
        assert_eq!(QuantityComparator::values()[0], QuantityComparator::LessThan);
        assert_eq!(DayOfWeek::values().len(), 7);
    }
}
