use crate::error::ObstacleError;
use crate::math::Point2d;
use crate::obstacle::{ObstacleAttributes, VehicleObstacle, VehiclePose};
use crate::obstruction::Obstruction;
use crate::{ObstacleId, ObstacleSet};
use log::{debug, warn};

/// Keeps track of the vehicles which may block radio transmissions.
///
/// Poses are updated through `&mut self` and queries take `&self`,
/// so every query sees each vehicle at a single, consistent pose.
#[derive(Default)]
pub struct ObstacleControl {
    /// The vehicles acting as obstacles.
    vehicles: ObstacleSet,
}

impl ObstacleControl {
    /// Creates an empty set of obstacles.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a vehicle which has entered the scenario.
    pub fn add_vehicle(
        &mut self,
        attributes: &ObstacleAttributes,
        pose: VehiclePose,
    ) -> Result<ObstacleId, ObstacleError> {
        attributes
            .validate()
            .and_then(|_| pose.validate())
            .map_err(|err| {
                warn!("rejected vehicle obstacle: {}", err);
                err
            })?;
        let id = self
            .vehicles
            .insert_with_key(|id| VehicleObstacle::new(id, attributes, pose));
        debug!("added vehicle obstacle {:?}", id);
        Ok(id)
    }

    /// Moves a vehicle to the pose reported by the latest mobility update.
    pub fn update_pose(&mut self, id: ObstacleId, pose: VehiclePose) -> Result<(), ObstacleError> {
        pose.validate().map_err(|err| {
            warn!("rejected pose for vehicle obstacle {:?}: {}", id, err);
            err
        })?;
        let vehicle = self
            .vehicles
            .get_mut(id)
            .ok_or(ObstacleError::UnknownObstacle(id))?;
        vehicle.set_pose(pose);
        Ok(())
    }

    /// Removes a vehicle which has left the scenario.
    pub fn remove_vehicle(&mut self, id: ObstacleId) -> Option<VehicleObstacle> {
        let vehicle = self.vehicles.remove(id);
        if vehicle.is_some() {
            debug!("removed vehicle obstacle {:?}", id);
        }
        vehicle
    }

    /// Gets a reference to the vehicle with the given ID.
    pub fn get_vehicle(&self, id: ObstacleId) -> Option<&VehicleObstacle> {
        self.vehicles.get(id)
    }

    /// Returns an iterator over all the vehicles.
    pub fn iter_vehicles(&self) -> impl Iterator<Item = &VehicleObstacle> {
        self.vehicles.values()
    }

    /// The number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether there are no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Determines whether, and where, the given vehicle blocks the path from `sender` to `receiver`.
    pub fn obstruction(
        &self,
        id: ObstacleId,
        sender: Point2d,
        receiver: Point2d,
    ) -> Result<Obstruction, ObstacleError> {
        let vehicle = self
            .vehicles
            .get(id)
            .ok_or(ObstacleError::UnknownObstacle(id))?;
        Ok(vehicle.obstruction(sender, receiver))
    }

    /// Tests the path from `sender` to `receiver` against every vehicle independently.
    ///
    /// Combining the results, for example to find the nearest obstruction
    /// or to sum attenuations, is left to the caller.
    pub fn obstructions(
        &self,
        sender: Point2d,
        receiver: Point2d,
    ) -> impl Iterator<Item = (ObstacleId, Obstruction)> + '_ {
        self.vehicles
            .iter()
            .map(move |(id, vehicle)| (id, vehicle.obstruction(sender, receiver)))
    }
}
