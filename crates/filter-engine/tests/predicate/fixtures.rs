use chrono::{NaiveDate, NaiveDateTime};
use model::{core::time_span::TimeSpan, filterable};

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub salary: f64,
    pub rating: f32,
    pub active: bool,
    pub hired: NaiveDateTime,
    pub shift: TimeSpan,
    pub manager_id: Option<i32>,
    pub badge: i64,
}

filterable!(Employee {
    id: i32,
    name: String,
    age: i32,
    salary: f64,
    rating: f32,
    active: bool,
    hired: NaiveDateTime,
    shift: TimeSpan,
    manager_id: Option<i32>,
    badge: i64,
});

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn staff() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Ada".to_string(),
            age: 36,
            salary: 5200.0,
            rating: 4.5,
            active: true,
            hired: date(2019, 4, 1),
            shift: "08:00:00".parse().unwrap(),
            manager_id: None,
            badge: 9_000_000_001,
        },
        Employee {
            id: 2,
            name: "Brian".to_string(),
            age: 24,
            salary: 3100.5,
            rating: 3.0,
            active: true,
            hired: date(2023, 1, 15),
            shift: "06:30:00".parse().unwrap(),
            manager_id: Some(1),
            badge: 9_000_000_002,
        },
        Employee {
            id: 3,
            name: "Chen".to_string(),
            age: 41,
            salary: 6100.0,
            rating: 4.0,
            active: false,
            hired: date(2015, 9, 30),
            shift: "10:00:00".parse().unwrap(),
            manager_id: Some(1),
            badge: 9_000_000_003,
        },
        Employee {
            id: 4,
            name: "Dana".to_string(),
            age: 29,
            salary: 4000.0,
            rating: 4.5,
            active: true,
            hired: date(2021, 6, 1),
            shift: "1.00:00:00".parse().unwrap(),
            manager_id: Some(3),
            badge: 9_000_000_004,
        },
    ]
}

/// Ids of the employees the predicate keeps, in input order.
pub fn matching_ids(predicate: &filter_engine::Predicate<Employee>) -> Vec<i32> {
    let staff = staff();
    predicate.filter(&staff).map(|e| e.id).collect()
}
