// Event entity
// A single local happening with its schedule text and map coordinates

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Event {
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

/// The fixed fallback list served when the shared collection is empty or
/// unreachable. Duplicate names ("Fun Fair", "Food Carnival") are part of
/// the dataset; the saved-events store keys by name, so they collide there.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            name: "Downtown Music Fest".to_string(),
            location: "Oshawa Centre".to_string(),
            date: "Nov 15, 2025".to_string(),
            time: "6:00 PM".to_string(),
            description: "Live bands and food trucks in downtown Oshawa!".to_string(),
            latitude: 43.945,
            longitude: -78.895,
        },
        Event {
            id: 2,
            name: "Food Carnival".to_string(),
            location: "Lakeview Park".to_string(),
            date: "Nov 22, 2025".to_string(),
            time: "12:00 PM".to_string(),
            description: "Enjoy cuisines from all around the world!".to_string(),
            latitude: 43.952,
            longitude: -78.901,
        },
        Event {
            id: 3,
            name: "Art Exhibit Spotlight".to_string(),
            location: "Robert McLaughlin Gallery".to_string(),
            date: "Nov 25, 2025".to_string(),
            time: "3:00 PM".to_string(),
            description: "Explore modern and abstract art installations.".to_string(),
            latitude: 43.950,
            longitude: -78.910,
        },
        Event {
            id: 4,
            name: "Fun Fair".to_string(),
            location: "Memorial Park".to_string(),
            date: "Dec 1, 2025".to_string(),
            time: "10:00 AM".to_string(),
            description: "Exciting rides, games, and local food stalls!".to_string(),
            latitude: 43.94,
            longitude: -78.88,
        },
        Event {
            id: 5,
            name: "Fun Fair".to_string(),
            location: "North Oshawa Grounds".to_string(),
            date: "Dec 8, 2025".to_string(),
            time: "11:00 AM".to_string(),
            description: "Family fun fair with live performances and snacks!".to_string(),
            latitude: 43.96,
            longitude: -78.86,
        },
        Event {
            id: 6,
            name: "Music Fest".to_string(),
            location: "Tribute Communities Centre".to_string(),
            date: "Dec 15, 2025".to_string(),
            time: "5:00 PM".to_string(),
            description: "Rock night with local and international bands!".to_string(),
            latitude: 43.897,
            longitude: -78.863,
        },
        Event {
            id: 7,
            name: "Food Carnival".to_string(),
            location: "Harmony Creek Park".to_string(),
            date: "Dec 20, 2025".to_string(),
            time: "1:00 PM".to_string(),
            description: "Delicious street food and dessert trucks all day!".to_string(),
            latitude: 43.93,
            longitude: -78.88,
        },
        Event {
            id: 8,
            name: "Food Carnival".to_string(),
            location: "Simcoe Street Plaza".to_string(),
            date: "Dec 28, 2025".to_string(),
            time: "2:00 PM".to_string(),
            description: "Experience cultural foods and music shows!".to_string(),
            latitude: 43.915,
            longitude: -78.87,
        },
    ]
}
