//! Factory pattern: a type tag maps to one of three concrete vehicles.
//! Unknown tags are invalid arguments, and tags are not case-normalized.

use crate::error::{PatternError, Result};
use crate::sink::Sink;
use std::fmt;
use std::str::FromStr;

use super::{completed, section_header};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
}

impl FromStr for VehicleKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "car" => Ok(VehicleKind::Car),
            "motorcycle" => Ok(VehicleKind::Motorcycle),
            "truck" => Ok(VehicleKind::Truck),
            other => Err(PatternError::UnknownVehicleType(other.to_string())),
        }
    }
}

/// Products are immutable model-string holders with type-specific messages.
pub trait Vehicle: fmt::Display {
    fn start_engine(&self, sink: &mut dyn Sink) -> Result<()>;
    fn stop_engine(&self, sink: &mut dyn Sink) -> Result<()>;
}

pub struct Car {
    model: String,
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car: {}", self.model)
    }
}

impl Vehicle for Car {
    fn start_engine(&self, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Car {}: Engine started quietly", self.model))
    }

    fn stop_engine(&self, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Car {}: Engine stopped", self.model))
    }
}

pub struct Motorcycle {
    model: String,
}

impl fmt::Display for Motorcycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Motorcycle: {}", self.model)
    }
}

impl Vehicle for Motorcycle {
    fn start_engine(&self, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!(
            "Motorcycle {}: Engine ROARS to life!",
            self.model
        ))
    }

    fn stop_engine(&self, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Motorcycle {}: Engine shut down", self.model))
    }
}

pub struct Truck {
    model: String,
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Truck: {}", self.model)
    }
}

impl Vehicle for Truck {
    fn start_engine(&self, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!(
            "Truck {}: Diesel engine rumbles powerfully",
            self.model
        ))
    }

    fn stop_engine(&self, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Truck {}: Heavy engine stopped", self.model))
    }
}

pub struct VehicleFactory;

impl VehicleFactory {
    /// Total over the three kinds; parsing a tag is where unknown types fail.
    pub fn create(kind: VehicleKind, model: impl Into<String>) -> Box<dyn Vehicle> {
        let model = model.into();
        match kind {
            VehicleKind::Car => Box::new(Car { model }),
            VehicleKind::Motorcycle => Box::new(Motorcycle { model }),
            VehicleKind::Truck => Box::new(Truck { model }),
        }
    }

    /// Convenience for string tags: parse, then create.
    pub fn create_from_tag(tag: &str, model: impl Into<String>) -> Result<Box<dyn Vehicle>> {
        Ok(Self::create(tag.parse()?, model))
    }
}

pub fn run<S: Sink>(sink: &mut S) -> Result<()> {
    section_header(sink, "Factory Pattern: Vehicle Manufacturing")?;
    sink.blank_line()?;

    let vehicles = [
        VehicleFactory::create(VehicleKind::Car, "Toyota Camry"),
        VehicleFactory::create(VehicleKind::Motorcycle, "Harley Davidson"),
        VehicleFactory::create(VehicleKind::Truck, "Ford F-150"),
    ];

    for (i, vehicle) in vehicles.iter().enumerate() {
        sink.write_line(&format!("Vehicle {}: {}", i + 1, vehicle))?;
        vehicle.start_engine(sink)?;
        vehicle.stop_engine(sink)?;
        sink.blank_line()?;
    }

    completed(sink, "Factory")
}
