//! Service data model.

use serde::Serialize;

/// Represents a service record from the database.
///
/// # Database Table
///
/// Maps to the `services` table, which is read-only from this service's
/// perspective: rows are created and maintained by an external administrative
/// process, and the API only projects them for public display.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Service {
    /// Unique identifier for this service
    pub id: i32,

    /// Display name shown on the site
    pub name: String,

    /// Display copy describing the service
    pub description: String,

    /// Optional icon slug used by the front end
    pub icon: Option<String>,

    /// Presentation sequence, ascending.
    ///
    /// Not guaranteed unique; ties keep whatever order the database returns.
    pub display_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_all_display_fields() {
        let service = Service {
            id: 1,
            name: "Cloud Migration".to_string(),
            description: "Move your workloads to the cloud.".to_string(),
            icon: Some("cloud".to_string()),
            display_order: 2,
        };

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Cloud Migration",
                "description": "Move your workloads to the cloud.",
                "icon": "cloud",
                "display_order": 2
            })
        );
    }

    #[test]
    fn missing_icon_serializes_as_null() {
        let service = Service {
            id: 7,
            name: "Consulting".to_string(),
            description: "Expert advice.".to_string(),
            icon: None,
            display_order: 1,
        };

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["icon"], json!(null));
    }
}
