//! Small presentational helpers shared by the screens.

pub mod badge;
pub mod card;
pub mod meter;
pub mod spinner;
