pub mod vehicle_service;

pub use crate::domain::model::{
    Address, Condition, Details, Location, Manufacturer, Price, Vehicle, VehicleId,
};
pub use crate::domain::ports::{AddressClient, Clock, ConfigProvider, PriceClient, VehicleStore};
pub use crate::utils::error::Result;
