use log::warn;

use crate::bus::BusChannel;
use crate::calibration::load_calibration;
use crate::compensation::{compensate_humidity, compensate_pressure, compensate_temperature};
use crate::config::Config;
use crate::error::Error;
use crate::init::initialize;
use crate::sample::read_raw;
use crate::structs::{CalibratedReading, CalibrationCoefficients};

/// A configured sensor together with its calibration.
///
/// The session owns the bus; readings are serialized through `&mut self`.
pub struct Session<B> {
    bus: B,
    calib: CalibrationCoefficients,
}

impl<B: BusChannel> Session<B> {
    /// Configures the device then reads its calibration. Any failure drops
    /// the bus, no reading can be attempted without a session.
    pub fn open(mut bus: B, config: &Config) -> Result<Self, Error<B::Error>> {
        initialize(&mut bus, config)?;
        let calib = load_calibration(&mut bus)?;
        Ok(Session { bus, calib })
    }

    pub fn take_reading(&mut self) -> Result<CalibratedReading, Error<B::Error>> {
        let raw = read_raw(&mut self.bus)?;

        let (temperature, fine) = compensate_temperature(raw.temperature, &self.calib);
        let pressure = compensate_pressure(raw.pressure, fine, &self.calib);
        let humidity = compensate_humidity(raw.humidity, fine, &self.calib);

        if pressure == 0 {
            warn!("calibration yields no valid pressure for raw value {}", raw.pressure);
        }

        Ok(CalibratedReading {
            temperature,
            pressure,
            humidity,
        })
    }

    pub fn calibration(&self) -> &CalibrationCoefficients {
        &self.calib
    }

    pub fn release(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::mock::{MockBus, Op};
    use crate::registers::{REG_CONFIG, REG_CTRL_HUM, REG_CTRL_MEAS, REG_DIG_P1, REG_DIG_T1, REG_PRESSURE_MSB};

    #[test]
    fn reading_from_datasheet_values() {
        let mut session = Session::open(MockBus::datasheet(), &Config::default()).unwrap();
        let reading = session.take_reading().unwrap();
        assert_eq!(
            reading,
            CalibratedReading {
                temperature: 2508,
                pressure: 25767233,
                humidity: 56317,
            }
        );
        assert_eq!(session.calibration().dig_t1, 27504);
    }

    #[test]
    fn initializes_before_calibration() {
        let session = Session::open(MockBus::datasheet(), &Config::default()).unwrap();
        let bus = session.release();
        assert_eq!(
            &bus.log[..4],
            &[
                Op::Write(REG_CTRL_HUM, 0x01),
                Op::Write(REG_CONFIG, 0x94),
                Op::Write(REG_CTRL_MEAS, 0x2F),
                Op::Read16(REG_DIG_T1),
            ]
        );
    }

    #[test]
    fn each_reading_is_one_burst() {
        let mut bus = MockBus::datasheet();
        let mut session = Session::open(&mut bus, &Config::default()).unwrap();
        session.take_reading().unwrap();
        session.take_reading().unwrap();
        drop(session);

        let setup = bus
            .log
            .iter()
            .position(|op| matches!(op, Op::Burst(..)))
            .unwrap();
        assert_eq!(
            &bus.log[setup..],
            &[Op::Burst(REG_PRESSURE_MSB, 8), Op::Burst(REG_PRESSURE_MSB, 8)]
        );
    }

    #[test]
    fn repeated_readings_are_independent() {
        let mut bus = MockBus::datasheet();
        let mut session = Session::open(&mut bus, &Config::default()).unwrap();
        let first = session.take_reading().unwrap();

        // colder raw temperature: fine temperature must follow it
        session.release().set(REG_PRESSURE_MSB + 3, &[0x70, 0x00, 0x00]);
        let mut session = Session::open(&mut bus, &Config::default()).unwrap();
        let colder = session.take_reading().unwrap();
        assert!(colder.temperature < first.temperature);
        assert_ne!(colder.pressure, first.pressure);

        bus.set(REG_PRESSURE_MSB + 3, &[0x7E, 0xED, 0x00]);
        let mut session = Session::open(&mut bus, &Config::default()).unwrap();
        assert_eq!(session.take_reading().unwrap(), first);
    }

    #[test]
    fn failed_init_yields_no_session() {
        let mut bus = MockBus::datasheet();
        bus.fail_at = Some(REG_CTRL_MEAS);
        assert!(Session::open(&mut bus, &Config::default()).is_err());
        assert!(!bus.log.iter().any(|op| matches!(op, Op::Read16(_) | Op::Burst(..))));
    }

    #[test]
    fn zero_p1_gives_invalid_pressure() {
        let mut bus = MockBus::datasheet();
        bus.set(REG_DIG_P1, &[0x00, 0x00]);
        let mut session = Session::open(bus, &Config::default()).unwrap();
        let reading = session.take_reading().unwrap();
        assert_eq!(reading.pressure, 0);
        assert!(!reading.pressure_valid());
        assert_eq!(reading.temperature, 2508);
        assert_eq!(reading.humidity, 56317);
    }

    #[test]
    fn read_failure_propagates() {
        let mut bus = MockBus::datasheet();
        bus.fail_at = Some(REG_PRESSURE_MSB);
        let mut session = Session::open(bus, &Config::default()).unwrap();
        let err = session.take_reading().unwrap_err();
        assert!(matches!(err, Error::Bus(ref nack) if nack.0 == REG_PRESSURE_MSB));
        assert_eq!(err.to_string(), "bus transaction failed");
    }
}
