use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Warning => "alert-warning",
            Self::Error => "alert-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "fas fa-info-circle",
            Self::Success => "fas fa-check-circle",
            Self::Warning => "fas fa-exclamation-triangle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }
}

/// One entry of the notification feed. Never mutated in place; deleted
/// wholesale by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub join_date: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub city: String,
    pub role: String,
    pub active: bool,
    pub assignments: u32,
}

/// Coverage-map marker, from the bundled city dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub active_volunteers: u32,
    pub open_shipments: u32,
    pub cities_covered: u32,
    pub deliveries_this_month: u32,
}

pub fn seed_notifications() -> Vec<Notification> {
    let now = Utc::now();

    vec![
        Notification {
            id: "1".to_string(),
            message: "New campaign created: Blood Donation Drive".to_string(),
            timestamp: now,
            kind: NotificationKind::Info,
        },
        Notification {
            id: "2".to_string(),
            message: "Your profile information was updated.".to_string(),
            timestamp: now - Duration::hours(2),
            kind: NotificationKind::Success,
        },
        Notification {
            id: "3".to_string(),
            message: "Scheduled maintenance tonight between 02:00 and 04:00.".to_string(),
            timestamp: now - Duration::hours(24),
            kind: NotificationKind::Warning,
        },
        Notification {
            id: "4".to_string(),
            message: "Shipment registration failed. Please try again.".to_string(),
            timestamp: now - Duration::hours(48),
            kind: NotificationKind::Error,
        },
    ]
}

pub fn mock_profile() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        first_name: "Sample".to_string(),
        last_name: "Coordinator".to_string(),
        email: "coordinator@reliefnet.example".to_string(),
        phone_number: "+90 555 123 45 67".to_string(),
        location: "Istanbul".to_string(),
        join_date: "2023-01-15".to_string(),
        is_verified: true,
    }
}

pub fn mock_volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: "v1".to_string(),
            name: "Ada Yilmaz".to_string(),
            city: "Istanbul".to_string(),
            role: "Collection Point Lead".to_string(),
            active: true,
            assignments: 14,
        },
        Volunteer {
            id: "v2".to_string(),
            name: "Mehmet Kaya".to_string(),
            city: "Ankara".to_string(),
            role: "Driver".to_string(),
            active: true,
            assignments: 9,
        },
        Volunteer {
            id: "v3".to_string(),
            name: "Elif Demir".to_string(),
            city: "Izmir".to_string(),
            role: "Warehouse Coordinator".to_string(),
            active: false,
            assignments: 21,
        },
        Volunteer {
            id: "v4".to_string(),
            name: "Can Arslan".to_string(),
            city: "Gaziantep".to_string(),
            role: "Field Volunteer".to_string(),
            active: true,
            assignments: 5,
        },
    ]
}

/// Static city coordinates rendered as markers on the coverage map.
pub fn coverage_cities() -> Vec<City> {
    let raw: [(&str, f64, f64); 10] = [
        ("Istanbul", 41.0082, 28.9784),
        ("Ankara", 39.9334, 32.8597),
        ("Izmir", 38.4192, 27.1287),
        ("Gaziantep", 37.0662, 37.3833),
        ("Adana", 37.0000, 35.3213),
        ("Kahramanmaras", 37.5858, 36.9371),
        ("Hatay", 36.2023, 36.1613),
        ("Diyarbakir", 37.9144, 40.2306),
        ("Erzurum", 39.9043, 41.2679),
        ("Trabzon", 41.0015, 39.7178),
    ];

    raw.iter()
        .map(|(name, lat, lon)| City {
            name: name.to_string(),
            latitude: *lat,
            longitude: *lon,
        })
        .collect()
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        active_volunteers: 128,
        open_shipments: 37,
        cities_covered: coverage_cities().len() as u32,
        deliveries_this_month: 412,
    }
}

/// Weekly volunteer registration counts for the last 12 weeks,
/// newest last.
pub fn volunteer_registration_series() -> (Vec<String>, Vec<u32>) {
    let today = Utc::now().date_naive();
    let mut dates = Vec::new();
    let mut counts = Vec::new();

    for i in (0..12).rev() {
        let week_start = today - Duration::weeks(i);
        dates.push(week_start.format("%Y-%m-%d").to_string());
        // Deterministic pseudo-variation, no RNG needed for a demo
        counts.push(8 + ((i * 7) % 11) as u32);
    }

    (dates, counts)
}

/// Shipment counts per lifecycle status.
pub fn shipment_status_counts() -> Vec<(String, u32)> {
    vec![
        ("Registered".to_string(), 12),
        ("Collecting".to_string(), 9),
        ("In Transit".to_string(), 16),
        ("Delivered".to_string(), 48),
        ("Cancelled".to_string(), 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_unique_and_spaced() {
        let seeds = seed_notifications();
        assert_eq!(seeds.len(), 4);

        let mut ids: Vec<&str> = seeds.iter().map(|n| n.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);

        // Seeds are spaced now / -2h / -24h / -48h
        let oldest = seeds.iter().map(|n| n.timestamp).min().unwrap();
        let newest = seeds.iter().map(|n| n.timestamp).max().unwrap();
        assert_eq!((newest - oldest).num_hours(), 48);
    }

    #[test]
    fn test_registration_series_aligned() {
        let (dates, counts) = volunteer_registration_series();
        assert_eq!(dates.len(), 12);
        assert_eq!(dates.len(), counts.len());
    }
}
