//! Surveying specific utilities: COGO and stake-out computations.

pub mod cogo;
pub use cogo::{azimuth, forward};

pub mod stakeout;
pub use stakeout::{
    backsight_azimuth, polar_layout_elements, side_stake, LayoutElement, Side,
    COINCIDENT_TOLERANCE,
};
