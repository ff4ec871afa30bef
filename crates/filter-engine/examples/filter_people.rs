//! Builds a predicate from a JSON filter and applies it to a few records.
//!
//! Run with `RUST_LOG=debug` to see each folded term.

use filter_engine::{FilterSettings, PredicateBuilder};
use model::{filter::parameter::FilterParameterList, filterable};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Person {
    name: String,
    age: i32,
    city: String,
    verified: bool,
}

filterable!(Person {
    name: String,
    age: i32,
    city: String,
    verified: bool,
});

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match FilterSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid filter settings: {}", e);
            return;
        }
    };
    let builder = PredicateBuilder::new(settings);

    let people = vec![
        Person {
            name: "Ada".to_string(),
            age: 36,
            city: "London".to_string(),
            verified: true,
        },
        Person {
            name: "Brian".to_string(),
            age: 17,
            city: "Leeds".to_string(),
            verified: true,
        },
        Person {
            name: "Chen".to_string(),
            age: 52,
            city: "Leeds".to_string(),
            verified: false,
        },
    ];

    let raw = r#"[
        { "columnName": "Age", "value": "18", "operator": "GreaterOrEqual" },
        { "columnName": "City", "value": "London", "connector": "And" },
        { "columnName": "Verified", "value": "false", "connector": "Or" }
    ]"#;

    let parameters: FilterParameterList = match serde_json::from_str(raw) {
        Ok(parameters) => parameters,
        Err(e) => {
            error!("Failed to parse filter parameters: {}", e);
            return;
        }
    };

    match builder.try_build::<Person>(&parameters) {
        Ok(predicate) => {
            info!("Built {}", predicate);
            for person in predicate.filter(&people) {
                info!("match: {:?}", person);
            }
        }
        Err(e) => error!("No predicate: {}", e),
    }
}
