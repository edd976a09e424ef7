pub mod answer;
pub mod auth;
