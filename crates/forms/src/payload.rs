//! Form payloads and persisted record shapes.
//!
//! The UI posts camelCase JSON with numeric fields still as strings; the
//! backend service stores snake_case columns with normalized numbers. The
//! serde attributes on these types are the whole field-name mapping — no
//! hand-written translation tables.

use gearlog_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A part form as posted by the browser. Numeric fields stay `String` here;
/// normalization happens in [`crate::submission`].
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartFormPayload {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(length(max = 200, message = "Vendor must be at most 200 characters"))]
    pub vendor: Option<String>,
    #[validate(length(max = 200, message = "Part number must be at most 200 characters"))]
    pub part_number: Option<String>,
    pub price: Option<String>,
    pub shipping_cost: Option<String>,
    pub import_duties: Option<String>,
    pub year: Option<String>,
    pub odometer_reading: Option<String>,
}

/// The normalized row written to the backend service for a part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartRecord {
    pub name: String,
    pub vendor: Option<String>,
    pub part_number: Option<String>,
    pub price: f64,
    pub shipping_cost: f64,
    pub import_duties: f64,
    pub total_cost: f64,
    pub year: Option<i64>,
    pub odometer_reading: Option<i64>,
    pub created_at: Timestamp,
}

/// A project-budget form as posted by the browser.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BudgetFormPayload {
    #[validate(length(min = 1, max = 200, message = "Project name must be between 1 and 200 characters"))]
    pub project_name: String,
    pub budget: Option<String>,
}

/// The normalized budget row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRecord {
    pub project_name: String,
    pub budget: f64,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_payload_deserializes_from_camel_case() {
        let payload: PartFormPayload = serde_json::from_str(
            r#"{
                "name": "Turbocharger",
                "partNumber": "TB-101",
                "price": "450.00",
                "shippingCost": "35",
                "importDuties": "",
                "odometerReading": "52000"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.name, "Turbocharger");
        assert_eq!(payload.part_number.as_deref(), Some("TB-101"));
        assert_eq!(payload.price.as_deref(), Some("450.00"));
        assert_eq!(payload.import_duties.as_deref(), Some(""));
        assert_eq!(payload.vendor, None);
        assert_eq!(payload.year, None);
    }

    #[test]
    fn text_rules_reject_an_empty_name() {
        let payload: PartFormPayload =
            serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn text_rules_reject_an_oversized_vendor() {
        let payload = PartFormPayload {
            name: "Brake disc".to_string(),
            vendor: Some("v".repeat(201)),
            part_number: None,
            price: None,
            shipping_cost: None,
            import_duties: None,
            year: None,
            odometer_reading: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn part_record_serializes_snake_case() {
        let record = PartRecord {
            name: "Turbocharger".to_string(),
            vendor: None,
            part_number: Some("TB-101".to_string()),
            price: 450.0,
            shipping_cost: 35.0,
            import_duties: 0.0,
            total_cost: 485.0,
            year: Some(2021),
            odometer_reading: Some(52_000),
            created_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["part_number"], "TB-101");
        assert_eq!(json["shipping_cost"], 35.0);
        assert_eq!(json["total_cost"], 485.0);
        assert_eq!(json["odometer_reading"], 52_000);
    }
}
