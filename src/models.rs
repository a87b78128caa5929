use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Raised when a status column holds a value outside the closed enum.
#[derive(Debug, Error)]
#[error("unknown status value: {0}")]
pub struct ParseStatusError(pub String);

/// Lab test booking lifecycle. Any (from, to) pair is a legal transition;
/// the service layer deliberately does not validate transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    SampleCollected,
    Processing,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::SampleCollected => "SAMPLE_COLLECTED",
            BookingStatus::Processing => "PROCESSING",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "SAMPLE_COLLECTED" => Ok(BookingStatus::SampleCollected),
            "PROCESSING" => Ok(BookingStatus::Processing),
            "COMPLETED" => Ok(BookingStatus::Completed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Medicine order lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "PROCESSING" => Ok(OrderStatus::Processing),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Shared by doctor and nurse verification requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "PENDING",
            VerificationStatus::UnderReview => "UNDER_REVIEW",
            VerificationStatus::Approved => "APPROVED",
            VerificationStatus::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(VerificationStatus::Pending),
            "UNDER_REVIEW" => Ok(VerificationStatus::UnderReview),
            "APPROVED" => Ok(VerificationStatus::Approved),
            "REJECTED" => Ok(VerificationStatus::Rejected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Name and email only, as embedded in the activity feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummary {
    pub name: String,
    pub email: String,
}

/// One test inside a booking, stored as JSONB on the booking row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedTest {
    pub test_id: String,
    pub test_name: String,
    pub lab_id: String,
    pub lab_name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestBooking {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient: PatientContact,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub payment_status: String,
    pub payment_method: String,
    pub amount: f64,
    pub service_charge: f64,
    pub total_amount: f64,
    pub address: String,
    pub phone_number: String,
    pub booked_tests: Vec<BookedTest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub status: String,
    pub amount: f64,
    pub payment_date: DateTime<Utc>,
    pub stripe_payment_id: Option<String>,
}

/// Order row with its zero-or-one transaction materialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineOrder {
    pub id: Uuid,
    pub patient_name: String,
    pub medicines: Vec<String>,
    pub total_amount: f64,
    pub payment_status: String,
    pub order_status: OrderStatus,
    pub pharmacy_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub transaction: Option<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub license_number: String,
    pub national_id: String,
    pub years_of_experience: i32,
    /// Specializations for doctors, offered services for nurses.
    pub credentials: Vec<String>,
    pub document_links: Vec<String>,
    pub status: VerificationStatus,
    pub created_at: DateTime<Utc>,
}

/// A doctor that has a verification record attached. Doctors without one
/// never appear in verification listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorWithVerification {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_verified_doctor: bool,
    pub created_at: DateTime<Utc>,
    pub verification: VerificationRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NurseWithVerification {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_verified_nurse: bool,
    pub created_at: DateTime<Utc>,
    pub verification: VerificationRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: Uuid,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientWithContacts {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub city: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub emergency_contacts: Vec<EmergencyContact>,
}

/// Headline counts for the dashboard. `pending_verifications` covers
/// doctor verifications only; nurse verifications are surfaced through
/// their own listing instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_monthly_bookings: i64,
    pub total_medicine_orders: i64,
    pub pending_verifications: i64,
    pub emergency_contacts: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentBooking {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub patient: PatientSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub transaction: Option<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentVerification {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub status: VerificationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEmergencyContact {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub patient: PatientSummary,
}

/// The five most recent records per category, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivities {
    pub recent_bookings: Vec<RecentBooking>,
    pub recent_orders: Vec<RecentOrder>,
    pub recent_verifications: Vec<RecentVerification>,
    pub recent_emergency_contacts: Vec<RecentEmergencyContact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub bookings: Vec<DailyCount>,
    pub orders: Vec<DailyCount>,
}

/// Outcome of a status transition. Failures are values at this boundary;
/// the handler never surfaces the underlying store error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusUpdateResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::SampleCollected,
            BookingStatus::Processing,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            let parsed: BookingStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_order_status_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_verification_status_round_trip() {
        for status in [
            VerificationStatus::Pending,
            VerificationStatus::UnderReview,
            VerificationStatus::Approved,
            VerificationStatus::Rejected,
        ] {
            let parsed: VerificationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("SHIPPED".parse::<OrderStatus>().is_err());
        assert!("".parse::<BookingStatus>().is_err());
        assert!("approved".parse::<VerificationStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&BookingStatus::SampleCollected).unwrap();
        assert_eq!(json, "\"SAMPLE_COLLECTED\"");

        let status: VerificationStatus = serde_json::from_str("\"UNDER_REVIEW\"").unwrap();
        assert_eq!(status, VerificationStatus::UnderReview);
    }

    #[test]
    fn test_status_update_result_serialization() {
        let ok = serde_json::to_value(StatusUpdateResult::ok()).unwrap();
        assert_eq!(ok["success"], true);
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(StatusUpdateResult::failed("Failed to update status")).unwrap();
        assert_eq!(failed["success"], false);
        assert_eq!(failed["error"], "Failed to update status");
    }

    #[test]
    fn test_booked_test_deserialization() {
        let json = r#"{
            "testId": "t-1",
            "testName": "Complete Blood Count",
            "labId": "lab-9",
            "labName": "City Lab",
            "price": 45.0
        }"#;

        let test: BookedTest = serde_json::from_str(json).unwrap();
        assert_eq!(test.test_name, "Complete Blood Count");
        assert!(test.discounted_price.is_none());
    }

    #[test]
    fn test_medicine_order_serializes_missing_transaction_as_null() {
        let order = MedicineOrder {
            id: Uuid::new_v4(),
            patient_name: "Ravi Kumar".to_string(),
            medicines: vec!["Paracetamol".to_string()],
            total_amount: 12.5,
            payment_status: "PENDING".to_string(),
            order_status: OrderStatus::Pending,
            pharmacy_name: None,
            created_at: Utc::now(),
            transaction: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert!(json["transaction"].is_null());
        assert_eq!(json["orderStatus"], "PENDING");
        assert_eq!(json["patientName"], "Ravi Kumar");
    }

    #[test]
    fn test_dashboard_metrics_field_names() {
        let metrics = DashboardMetrics {
            total_monthly_bookings: 3,
            total_medicine_orders: 1,
            pending_verifications: 2,
            emergency_contacts: 7,
        };

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["totalMonthlyBookings"], 3);
        assert_eq!(json["totalMedicineOrders"], 1);
        assert_eq!(json["pendingVerifications"], 2);
        assert_eq!(json["emergencyContacts"], 7);
    }
}
