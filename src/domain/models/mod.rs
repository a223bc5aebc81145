pub mod announcement;
pub mod auth;
pub mod connection;
pub mod player;
pub mod rsvp;
pub mod session;
pub mod team;
pub mod user;
