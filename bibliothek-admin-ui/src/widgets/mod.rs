pub mod health_card;
pub mod status_indicator;
