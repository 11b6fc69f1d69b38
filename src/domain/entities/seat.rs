use serde::{Deserialize, Serialize};

/// Reservation state of a single seat. The durable store is the source of
/// truth; cached copies are derived and may lag by their TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Reserved,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Reserved => "reserved",
        }
    }

    pub fn parse(value: &str) -> Option<SeatStatus> {
        match value {
            "available" => Some(SeatStatus::Available),
            "reserved" => Some(SeatStatus::Reserved),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One seat of a screen as served by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatInfo {
    pub seat_id: String,
    pub status: SeatStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSeatRequest {
    pub screen_id: i64,
    pub seat_id: String,
    pub client_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReserveSeatResponse {
    pub message: String,
}
