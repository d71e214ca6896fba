//! Scenarios module - projected annual impact under alternative tariff outlooks.

mod scenario_analyzer;

pub use scenario_analyzer::{analyze_scenarios, ScenarioKind, ScenarioOutcome};
