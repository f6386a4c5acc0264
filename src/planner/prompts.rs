//! Prompt templates for the four planning capabilities.
//!
//! The wording and the example JSON shapes steer what the model returns,
//! so the text is kept stable. Values are spliced in unescaped.

use super::{
    PlanRequest,
    extract::Shape,
    types::{AccommodationQuery, ActivityQuery, FlightQuery, TripPreferences},
};

const ITINERARY_TEMPLATE: &str = r#"
    Create a detailed travel itinerary based on the following preferences:
    
    Destination: {destination}
    Start Date: {startDate}
    End Date: {endDate}
    Budget: {budget} INR
    Interests: {interests}
    Accommodation Preference: {accommodationType}
    Transportation Preference: {transportationType}
    
    Please structure the itinerary day by day including:
    1. Morning, afternoon, and evening activities
    2. Recommended restaurants for meals
    3. Estimated costs for each activity and meal
    4. Travel time between locations
    5. Accommodation recommendations
    6. Local tips and cultural insights
    
    Format the response as a structured JSON with the following format:
    {
      "destination": "City Name, Country",
      "duration": "X days",
      "totalEstimatedCost": "XXXX INR",
      "itinerary": [
        {
          "day": 1,
          "date": "YYYY-MM-DD",
          "activities": [
            {
              "time": "Morning",
              "activity": "Activity name",
              "description": "Brief description",
              "estimatedCost": "XX INR",
              "location": "Location name",
              "travelTime": "X minutes from previous location"
            },
            // ... more activities
          ],
          "meals": [
            {
              "type": "Breakfast/Lunch/Dinner",
              "recommendation": "Restaurant name",
              "cuisine": "Cuisine type",
              "estimatedCost": "XX INR",
              "location": "Location"
            },
            // ... more meals
          ],
          "accommodation": {
            "name": "Accommodation name",
            "type": "Hotel/Hostel/Airbnb",
            "estimatedCost": "XX INR",
            "location": "Location"
          }
        },
        // ... more days
      ],
      "additionalTips": [
        "Tip 1",
        "Tip 2",
        // ... more tips
      ]
    }
    "#;

const FLIGHTS_TEMPLATE: &str = r#"
    Provide flight recommendations from {origin} to {destination} on {date}.
    Include flight details like estimated prices, airlines, departure and arrival times.
    Format as JSON array with the following structure:
    [
      {
        "airline": "Airline name",
        "flightNumber": "XX123",
        "departureTime": "HH:MM",
        "arrivalTime": "HH:MM",
        "duration": "Xh Ym",
        "price": "XXX USD",
        "stops": 0,
        "departureAirport": "XXX",
        "arrivalAirport": "YYY"
      },
      // more flights
    ]
    "#;

const ACCOMMODATIONS_TEMPLATE: &str = r#"
    Provide accommodation recommendations in {destination} for check-in on {checkIn} and check-out on {checkOut}.
    Preferences: {preferences}
    Include details like hotel names, prices, amenities, and location.
    Format as JSON array with the following structure:
    [
      {
        "name": "Accommodation name",
        "type": "Hotel/Hostel/Apartment",
        "pricePerNight": "XXX USD",
        "totalPrice": "XXX USD",
        "location": "Area in {destination}",
        "rating": "X.X/5",
        "amenities": ["amenity1", "amenity2", ...],
        "description": "Brief description"
      },
      // more accommodations
    ]
    "#;

const ACTIVITIES_TEMPLATE: &str = r#"
    Provide activity recommendations in {destination} based on these interests: {interests}.
    Include details like activity names, descriptions, estimated costs, and durations.
    Format as JSON array with the following structure:
    [
      {
        "name": "Activity name",
        "category": "Category (e.g., Museum, Outdoor, Adventure)",
        "description": "Brief description",
        "estimatedCost": "XXX INR",
        "duration": "X hours",
        "location": "Location within {destination}",
        "bestTimeToVisit": "Morning/Afternoon/Evening"
      },
      // more activities
    ]
    "#;

const LIST_SEPARATOR: &str = ", ";

/// Replaces `{name}` placeholders in one pass. Braces that do not enclose a
/// known name are copied through, and substituted values are never
/// rescanned.
pub fn fill(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn itinerary_prompt(prefs: &TripPreferences) -> String {
    fill(
        ITINERARY_TEMPLATE,
        &[
            ("destination", prefs.destination.to_string()),
            ("startDate", prefs.start_date.to_string()),
            ("endDate", prefs.end_date.to_string()),
            ("budget", prefs.budget.to_string()),
            ("interests", prefs.interests.joined(LIST_SEPARATOR)),
            ("accommodationType", prefs.accommodation_type.to_string()),
            ("transportationType", prefs.transportation_type.to_string()),
        ],
    )
}

pub fn flights_prompt(query: &FlightQuery) -> String {
    fill(
        FLIGHTS_TEMPLATE,
        &[
            ("origin", query.origin.to_string()),
            ("destination", query.destination.to_string()),
            ("date", query.date.to_string()),
        ],
    )
}

pub fn accommodations_prompt(query: &AccommodationQuery) -> String {
    fill(
        ACCOMMODATIONS_TEMPLATE,
        &[
            ("destination", query.destination.to_string()),
            ("checkIn", query.check_in.to_string()),
            ("checkOut", query.check_out.to_string()),
            ("preferences", query.preferences.to_string()),
        ],
    )
}

pub fn activities_prompt(query: &ActivityQuery) -> String {
    fill(
        ACTIVITIES_TEMPLATE,
        &[
            ("destination", query.destination.to_string()),
            ("interests", query.interests.joined(LIST_SEPARATOR)),
        ],
    )
}

impl PlanRequest for TripPreferences {
    const SHAPE: Shape = Shape::Object;
    const KIND: &'static str = "itinerary";

    fn prompt(&self) -> String {
        itinerary_prompt(self)
    }
}

impl PlanRequest for FlightQuery {
    const SHAPE: Shape = Shape::Array;
    const KIND: &'static str = "flights";

    fn prompt(&self) -> String {
        flights_prompt(self)
    }
}

impl PlanRequest for AccommodationQuery {
    const SHAPE: Shape = Shape::Array;
    const KIND: &'static str = "accommodations";

    fn prompt(&self) -> String {
        accommodations_prompt(self)
    }
}

impl PlanRequest for ActivityQuery {
    const SHAPE: Shape = Shape::Array;
    const KIND: &'static str = "activities";

    fn prompt(&self) -> String {
        activities_prompt(self)
    }
}
