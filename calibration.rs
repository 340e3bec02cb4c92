use log::debug;

use crate::bus::BusChannel;
use crate::error::Error;
use crate::registers::*;
use crate::structs::CalibrationCoefficients;

/// Reads all trimming coefficients. Nothing is returned unless every
/// register could be read.
pub fn load_calibration<B: BusChannel>(
    bus: &mut B,
) -> Result<CalibrationCoefficients, Error<B::Error>> {
    let dig_t1 = bus.read_register16(REG_DIG_T1)?;
    let dig_t2 = read_i16(bus, REG_DIG_T2)?;
    let dig_t3 = read_i16(bus, REG_DIG_T3)?;

    let dig_p1 = bus.read_register16(REG_DIG_P1)?;
    let dig_p2 = read_i16(bus, REG_DIG_P2)?;
    let dig_p3 = read_i16(bus, REG_DIG_P3)?;
    let dig_p4 = read_i16(bus, REG_DIG_P4)?;
    let dig_p5 = read_i16(bus, REG_DIG_P5)?;
    let dig_p6 = read_i16(bus, REG_DIG_P6)?;
    let dig_p7 = read_i16(bus, REG_DIG_P7)?;
    let dig_p8 = read_i16(bus, REG_DIG_P8)?;
    let dig_p9 = read_i16(bus, REG_DIG_P9)?;

    let dig_h1 = bus.read_register(REG_DIG_H1)?;
    let dig_h2 = read_i16(bus, REG_DIG_H2)?;
    let dig_h3 = bus.read_register(REG_DIG_H3)?;

    let h4_msb = bus.read_register(REG_DIG_H4)?;
    let h4_lsb = bus.read_register(REG_DIG_H4 + 1)?;
    let dig_h4 = h4(h4_msb, h4_lsb);

    // H5's most significant byte sits above its nibble, the reverse of H4
    let h5_msb = bus.read_register(REG_DIG_H5 + 1)?;
    let h5_lsb = bus.read_register(REG_DIG_H5)?;
    let dig_h5 = h5(h5_msb, h5_lsb);

    let dig_h6 = bus.read_register(REG_DIG_H6)? as i8;

    let calib = CalibrationCoefficients {
        dig_t1,
        dig_t2,
        dig_t3,
        dig_p1,
        dig_p2,
        dig_p3,
        dig_p4,
        dig_p5,
        dig_p6,
        dig_p7,
        dig_p8,
        dig_p9,
        dig_h1,
        dig_h2,
        dig_h3,
        dig_h4,
        dig_h5,
        dig_h6,
    };
    debug!("loaded calibration: {calib:?}");
    Ok(calib)
}

fn read_i16<B: BusChannel>(bus: &mut B, reg: u8) -> Result<i16, B::Error> {
    bus.read_register16(reg).map(|word| word as i16)
}

/// 12 bit signed: msb is sign extended, lower nibble of `lsb` appended.
fn h4(msb: u8, lsb: u8) -> i16 {
    ((msb as i8 as i16) << 4) | (lsb & 0x0F) as i16
}

/// 12 bit signed: msb is sign extended, upper nibble of `lsb` appended.
fn h5(msb: u8, lsb: u8) -> i16 {
    ((msb as i8 as i16) << 4) | (lsb >> 4) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::mock::{MockBus, Op};

    #[test]
    fn datasheet_coefficients() {
        let mut bus = MockBus::datasheet();
        let calib = load_calibration(&mut bus).unwrap();

        assert_eq!(calib.dig_t1, 27504);
        assert_eq!(calib.dig_t2, 26435);
        assert_eq!(calib.dig_t3, -1000);
        assert_eq!(calib.dig_p1, 36477);
        assert_eq!(calib.dig_p2, -10685);
        assert_eq!(calib.dig_p3, 3024);
        assert_eq!(calib.dig_p4, 2855);
        assert_eq!(calib.dig_p5, 140);
        assert_eq!(calib.dig_p6, -7);
        assert_eq!(calib.dig_p7, 15500);
        assert_eq!(calib.dig_p8, -14600);
        assert_eq!(calib.dig_p9, 6000);
        assert_eq!(calib.dig_h1, 75);
        assert_eq!(calib.dig_h2, 362);
        assert_eq!(calib.dig_h3, 0);
        assert_eq!(calib.dig_h4, 313);
        assert_eq!(calib.dig_h5, 50);
        assert_eq!(calib.dig_h6, 30);
    }

    #[test]
    fn split_humidity_registers() {
        let mut bus = MockBus::new();
        // 0xE4 = H4 msb, 0xE5 = H5 nibble | H4 nibble, 0xE6 = H5 msb
        bus.set(REG_DIG_H4, &[0x12, 0xAB, 0x34]);
        let calib = load_calibration(&mut bus).unwrap();
        assert_eq!(calib.dig_h4, (0x12 << 4) | 0x0B);
        assert_eq!(calib.dig_h5, (0x34 << 4) | 0x0A);

        assert!(bus.log.contains(&Op::Read(REG_DIG_H5 + 1)));
    }

    #[test]
    fn split_humidity_sign_extension() {
        assert_eq!(h4(0xFF, 0x0F), -1);
        assert_eq!(h4(0x80, 0x00), -2048);
        assert_eq!(h5(0xFF, 0xF0), -1);
        assert_eq!(h5(0x7F, 0xF0), 2047);
    }

    #[test]
    fn signed_coefficients() {
        let mut bus = MockBus::new();
        bus.set(REG_DIG_T1, &[0xFF, 0xFF, 0xFF, 0xFF]);
        bus.set(REG_DIG_H6, &[0x80]);
        let calib = load_calibration(&mut bus).unwrap();
        assert_eq!(calib.dig_t1, 0xFFFF);
        assert_eq!(calib.dig_t2, -1);
        assert_eq!(calib.dig_h6, -128);
    }

    #[test]
    fn bus_failure_aborts() {
        let mut bus = MockBus::datasheet();
        bus.fail_at = Some(REG_DIG_H6);
        let err = load_calibration(&mut bus).unwrap_err();
        assert!(matches!(err, Error::Bus(ref nack) if nack.0 == REG_DIG_H6));
    }
}
