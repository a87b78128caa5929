use tokio::sync::broadcast;

/// View paths the status transition handlers invalidate on success.
pub const TEST_BOOKINGS_VIEW: &str = "/admin/test-bookings";
pub const MEDICINE_ORDERS_VIEW: &str = "/admin/medicine-orders";
pub const DOCTOR_VERIFICATIONS_VIEW: &str = "/admin/doctor-verifications";
pub const NURSE_VERIFICATIONS_VIEW: &str = "/admin/nurse-verifications";

/// Fire-and-forget staleness signal for named views. Consumers subscribe
/// and recompute the view on next read; delivery needs no acknowledgement
/// and a missing consumer is not an error.
#[derive(Clone)]
pub struct ViewInvalidator {
    tx: broadcast::Sender<String>,
}

impl ViewInvalidator {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    pub fn invalidate(&self, view: &str) {
        // Send fails only when nobody is subscribed, which is fine.
        let _ = self.tx.send(view.to_string());
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for ViewInvalidator {
    fn default() -> Self {
        Self::new()
    }
}
