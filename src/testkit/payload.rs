//! Canonical event-group payloads.

use serde_json::{json, Value};

/// One NBA offer with six outcomes and its matching event.
pub fn sample_payload() -> Value {
    json!({
        "eventGroup": {
            "nameIdentifier": "NBA",
            "offerCategories": [{
                "offerSubcategoryDescriptors": [{
                    "offerSubcategory": {
                        "offers": [[{
                            "isOpen": true,
                            "outcomes": [
                                {"participant": "Lakers", "line": -5.5, "oddsAmerican": -110},
                                {"participant": "Celtics", "line": 5.5, "oddsAmerican": -110},
                                {"label": "Over", "line": 220.5, "oddsAmerican": -105},
                                {"label": "Under", "line": 220.5, "oddsAmerican": -115},
                                {"label": "Lakers", "oddsAmerican": -200},
                                {"label": "Celtics", "oddsAmerican": 170}
                            ]
                        }]]
                    }
                }]
            }],
            "events": [{
                "nameIdentifier": "Lakers vs Celtics",
                "startDate": "2024-01-01T00:00:00Z"
            }]
        }
    })
}

/// `n` six-outcome offers, each paired with an event named `Home{i} vs Away{i}`.
pub fn payload_with_offers(n: usize) -> Value {
    let offers: Vec<Value> = (0..n)
        .map(|i| {
            json!([{
                "isOpen": i % 2 == 0,
                "outcomes": [
                    {"label": "Over", "line": 210.5, "oddsAmerican": -110},
                    {"label": "Under", "line": 210.5, "oddsAmerican": -110},
                    {"participant": format!("Home{i}"), "line": -3.5, "oddsAmerican": -108},
                    {"participant": format!("Away{i}"), "line": 3.5, "oddsAmerican": -112},
                    {"participant": format!("Home{i}"), "oddsAmerican": -160},
                    {"participant": format!("Away{i}"), "oddsAmerican": 135}
                ]
            }])
        })
        .collect();
    let events: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "nameIdentifier": format!("Home{i} vs Away{i}"),
                "startDate": format!("2024-02-{:02}T00:00:00Z", i % 28 + 1)
            })
        })
        .collect();

    json!({
        "eventGroup": {
            "nameIdentifier": "NBA",
            "offerCategories": [{
                "offerSubcategoryDescriptors": [{
                    "offerSubcategory": { "offers": offers }
                }]
            }],
            "events": events
        }
    })
}
