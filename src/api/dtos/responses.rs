use serde::Serialize;
use crate::domain::models::rsvp::{Rsvp, RsvpCounts};

#[derive(Serialize)]
pub struct SessionRsvpsResponse {
    pub session_id: String,
    pub counts: RsvpCounts,
    pub rsvps: Vec<Rsvp>,
}
