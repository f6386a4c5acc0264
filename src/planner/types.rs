use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A request-body value as it is spliced into a prompt.
///
/// Bodies are not validated: a missing key renders as `undefined`, a JSON
/// `null` as `null`, and everything else the way a template literal would
/// print it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field(pub Option<Value>);

impl Field {
    pub fn missing() -> Self {
        Self(None)
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Renders a list with `separator` between items. Non-list values render
    /// as plain [`Display`](fmt::Display).
    pub fn joined(&self, separator: &str) -> String {
        match &self.0 {
            Some(Value::Array(items)) => join_items(items, separator),
            _ => self.to_string(),
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Self(Some(value))
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Field::from)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("undefined"),
            Some(value) => f.write_str(&render(value)),
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // 2500.0 prints as 2500
            Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e21 => format!("{x:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => join_items(items, ","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn join_items(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => render(other),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Body of `POST /api/generate-itinerary`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TripPreferences {
    pub destination: Field,
    pub start_date: Field,
    pub end_date: Field,
    pub budget: Field,
    pub interests: Field,
    pub accommodation_type: Field,
    pub transportation_type: Field,
}

/// Body of `POST /api/flights`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlightQuery {
    pub origin: Field,
    pub destination: Field,
    pub date: Field,
}

/// Body of `POST /api/accommodations`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccommodationQuery {
    pub destination: Field,
    pub check_in: Field,
    pub check_out: Field,
    pub preferences: Field,
}

/// Body of `POST /api/activities`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActivityQuery {
    pub destination: Field,
    pub interests: Field,
}

// Response shapes the prompts ask the model for. The relay returns whatever
// JSON the model produced; these exist for typed consumers and every field
// is optional because the model may omit any of them.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub total_estimated_cost: Option<String>,
    pub itinerary: Vec<DayPlan>,
    pub additional_tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPlan {
    pub day: Option<u32>,
    pub date: Option<String>,
    pub activities: Vec<ItineraryActivity>,
    pub meals: Vec<Meal>,
    pub accommodation: Option<Lodging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItineraryActivity {
    pub time: Option<String>,
    pub activity: Option<String>,
    pub description: Option<String>,
    pub estimated_cost: Option<String>,
    pub location: Option<String>,
    pub travel_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: Option<String>,
    pub recommendation: Option<String>,
    pub cuisine: Option<String>,
    pub estimated_cost: Option<String>,
    pub location: Option<String>,
}

/// Where a day of the itinerary ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lodging {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub lodging_type: Option<String>,
    pub estimated_cost: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Flight {
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub stops: Option<Value>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accommodation {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub accommodation_type: Option<String>,
    pub price_per_night: Option<String>,
    pub total_price: Option<String>,
    pub location: Option<String>,
    pub rating: Option<String>,
    pub amenities: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Activity {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub estimated_cost: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub best_time_to_visit: Option<String>,
}
