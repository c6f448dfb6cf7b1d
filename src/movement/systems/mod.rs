//! Movement domain: system modules for locomotion updates.

pub(crate) mod controller;
pub(crate) mod input;
pub(crate) mod sensors;

pub(crate) use controller::{
    apply_permission_changes, fixed_update_controllers, log_movement_events, sync_facing,
    update_controllers,
};
pub(crate) use input::read_input;
pub use sensors::SurfaceContacts;
pub(crate) use sensors::detect_surfaces;
