//! Driver for the Bosch BME280 combined temperature, pressure and humidity
//! sensor.
//!
//! The driver talks to the device through a [`BusChannel`], configures it,
//! reads the factory calibration once and turns raw ADC values into
//! calibrated readings using the datasheet's integer formulas.
//!
//! ```no_run
//! use bme280_driver::{Config, Session, registers::ADDR_BME280};
//! use rppal::i2c::I2c;
//!
//! let mut i2c = I2c::with_bus(1).unwrap();
//! i2c.set_slave_address(ADDR_BME280).unwrap();
//! let mut sensor = Session::open(i2c, &Config::default()).unwrap();
//! println!("{}", sensor.take_reading().unwrap());
//! ```

mod bus;
mod calibration;
mod compensation;
mod config;
mod error;
mod init;
pub mod registers;
mod sample;
mod session;
mod structs;

pub use bus::BusChannel;
pub use calibration::load_calibration;
pub use compensation::{compensate_humidity, compensate_pressure, compensate_temperature};
pub use config::{Config, Filter, Mode, Oversampling, Standby};
pub use error::Error;
pub use init::initialize;
pub use sample::read_raw;
pub use session::Session;
pub use structs::{CalibratedReading, CalibrationCoefficients, FineTemperature, RawSample, ReadingText};
