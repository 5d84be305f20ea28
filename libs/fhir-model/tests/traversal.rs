//! Visitor traversal: ordering, pruning, and skipping.

use argent_model::codes::NameUse;
use argent_model::{
    DataValue, Dosage, DoseAndRate, Element, ElementCounter, Extension, FhirString, HumanName,
    Period,
    Quantity, Visitable, Visitor,
};
use rust_decimal::Decimal;

/// Records every traversal event as a flat list of strings.
#[derive(Debug, Default)]
struct EventLog {
    events: Vec<String>,
}

impl Visitor for EventLog {
    fn visit_start(&mut self, name: &str, index: Option<usize>, element: &dyn Element) {
        match index {
            Some(i) => self.events.push(format!("start {name}[{i}] {}", element.type_name())),
            None => self.events.push(format!("start {name} {}", element.type_name())),
        }
    }

    fn visit_end(&mut self, name: &str, index: Option<usize>, _element: &dyn Element) {
        match index {
            Some(i) => self.events.push(format!("end {name}[{i}]")),
            None => self.events.push(format!("end {name}")),
        }
    }

    fn visit_string(&mut self, name: &str, value: &str) {
        self.events.push(format!("string {name}={value}"));
    }
}

fn sample_name() -> HumanName {
    HumanName::builder()
        .id("n1")
        .extension(
            Extension::builder()
                .url("http://example.org/note")
                .value(DataValue::String(FhirString::from("kept")))
                .build()
                .unwrap(),
        )
        .r#use(NameUse::Official)
        .text("Peter James Chalmers")
        .family("Chalmers")
        .given("Peter")
        .given("James")
        .prefix("Mr")
        .suffix("Jr")
        .period(Period::builder().start("2001").build().unwrap())
        .build()
        .unwrap()
}

#[test]
fn children_are_visited_in_declaration_order() {
    let name = sample_name();
    let mut log = EventLog::default();
    name.accept("name", None, &mut log);

    let starts: Vec<&str> = log
        .events
        .iter()
        .filter(|e| e.starts_with("start"))
        .map(String::as_str)
        .collect();
    assert_eq!(
        starts,
        [
            "start name HumanName",
            "start extension[0] Extension",
            "start use code",
            "start text string",
            "start family string",
            "start given[0] string",
            "start given[1] string",
            "start prefix[0] string",
            "start suffix[0] string",
            "start period Period",
        ]
    );

    // The element id is a scalar leaf and precedes all child nodes.
    assert_eq!(log.events[1], "string id=n1");
}

/// Returning false from `visit` prunes children but still closes the node.
struct PruneHumanName {
    events: Vec<String>,
}

impl Visitor for PruneHumanName {
    fn visit_start(&mut self, name: &str, _index: Option<usize>, _element: &dyn Element) {
        self.events.push(format!("start {name}"));
    }

    fn visit(&mut self, _name: &str, _index: Option<usize>, element: &dyn Element) -> bool {
        element.type_name() != "HumanName"
    }

    fn visit_end(&mut self, name: &str, _index: Option<usize>, _element: &dyn Element) {
        self.events.push(format!("end {name}"));
    }
}

#[test]
fn visit_false_prunes_the_subtree() {
    let name = sample_name();
    let mut visitor = PruneHumanName { events: Vec::new() };
    name.accept("name", None, &mut visitor);
    assert_eq!(visitor.events, ["start name", "end name"]);
}

/// Returning false from `pre_visit` skips the node entirely.
struct SkipExtensions {
    started: Vec<String>,
}

impl Visitor for SkipExtensions {
    fn pre_visit(&mut self, element: &dyn Element) -> bool {
        element.type_name() != "Extension"
    }

    fn visit_start(&mut self, name: &str, _index: Option<usize>, _element: &dyn Element) {
        self.started.push(name.to_string());
    }
}

#[test]
fn pre_visit_false_skips_the_node() {
    let name = sample_name();
    let mut visitor = SkipExtensions { started: Vec::new() };
    name.accept("name", None, &mut visitor);
    assert!(!visitor.started.iter().any(|n| n == "extension"));
    assert!(visitor.started.iter().any(|n| n == "family"));
}

#[test]
fn counter_counts_every_node_once() {
    let dosage = Dosage::builder()
        .sequence(1)
        .text("500mg twice daily")
        .dose_and_rate(
            DoseAndRate::builder()
                .dose(
                    Quantity::builder()
                        .value(Decimal::from(500))
                        .unit("mg")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let mut counter = ElementCounter::default();
    dosage.accept("dosage", None, &mut counter);
    // dosage, sequence, text, doseAndRate, dose quantity, value, unit
    assert_eq!(counter.count(), 7);
}

#[test]
fn choice_fields_surface_the_active_variant() {
    let dosage = Dosage::builder().as_needed(true).build().unwrap();
    let mut log = EventLog::default();
    dosage.accept("dosage", None, &mut log);
    assert!(log.events.contains(&"start asNeeded boolean".to_string()));
}
