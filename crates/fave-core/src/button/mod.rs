use std::time::Duration;

pub mod delegate;
pub mod frame;
pub mod model;

pub use delegate::FaveButtonDelegate;
pub use frame::ButtonFrame;
pub use model::{FaveButton, FaveError, Tick};

pub const DURATION: Duration = Duration::from_millis(1_000); // until the delegate hears about it
pub const EXPAND_DURATION: Duration = Duration::from_micros(129_800);
pub const COLLAPSE_DURATION: Duration = Duration::from_micros(108_900);
pub const ICON_SHOW_DELAY: Duration =
    Duration::from_micros(EXPAND_DURATION.as_micros() as u64 + COLLAPSE_DURATION.as_micros() as u64 / 2);

pub const SPARK_GROUP_COUNT: usize = 7;
pub const SPARK_SHOW_DURATION: Duration = Duration::from_millis(400);
pub const SPARK_SHOW_DELAY: Duration = Duration::from_micros(COLLAPSE_DURATION.as_micros() as u64 / 3);
pub const SPARK_HIDE_DURATION: Duration = Duration::from_millis(700);
pub const SPARK_HIDE_DELAY: Duration = Duration::from_millis(200);

pub const RING_RADIUS_FACTOR: f64 = 1.3 / 2.0; // of content width
pub const RING_SEED_RADIUS: f64 = 0.01; // a zero-sized circle has no path
pub const RING_LINE_WIDTH: f64 = 3.0;
pub const IGNITE_FROM_FACTOR: f64 = 0.8; // of ring radius
pub const IGNITE_TO_FACTOR: f64 = 1.1;
