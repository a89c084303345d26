//! The shapes a button is composed of. `FaveIcon` lives as long as the button;
//! `Ring` and `Spark` are created per select transition and report when their
//! last tween has run so the owner can drop them.

pub mod icon;
pub mod ring;
pub mod spark;

pub use icon::{FaveIcon, IconFrame};
pub use ring::{Ring, RingFrame};
pub use spark::{Dot, DotRadii, Spark, SparkFrame};
