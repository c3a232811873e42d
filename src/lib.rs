pub use cgmath;
pub use control::ObstacleControl;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::ObstacleError;
pub use obstacle::{footprint, ObstacleAttributes, VehicleObstacle, VehiclePose};
pub use obstruction::{query_obstruction, shape_obstruction, Obstruction};
use slotmap::{new_key_type, SlotMap};
pub use slotmap::{Key, KeyData};
pub use util::Interval;

mod control;
mod debug;
mod error;
pub mod math;
mod obstacle;
mod obstruction;
mod util;

new_key_type! {
    /// Unique ID of a [VehicleObstacle].
    pub struct ObstacleId;
}

type ObstacleSet = SlotMap<ObstacleId, VehicleObstacle>;
