mod component;

pub use component::HealthCard;
