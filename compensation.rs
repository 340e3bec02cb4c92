//! Integer compensation formulas from the BME280 datasheet (section 4.2.3).
//!
//! The intermediate widths and shifts decide the rounding of the result, so
//! they follow the reference code exactly: temperature and humidity in `i32`,
//! pressure in `i64`. Arithmetic wraps like the reference does instead of
//! panicking on out of range input.

use crate::structs::{CalibrationCoefficients, FineTemperature};

/// Upper clamp of the humidity accumulator, 100 %RH in Q22.10.
const HUMIDITY_MAX: i32 = 419430400;

/// Returns the temperature in degrees Celsius x 100 together with the fine
/// temperature the other two formulas depend on.
pub fn compensate_temperature(
    raw: u32,
    calib: &CalibrationCoefficients,
) -> (i32, FineTemperature) {
    let adc = raw as i32;
    let t1 = calib.dig_t1 as i32;
    let t2 = calib.dig_t2 as i32;
    let t3 = calib.dig_t3 as i32;

    let var1 = ((adc >> 3).wrapping_sub(t1 << 1)).wrapping_mul(t2) >> 11;
    let delta = (adc >> 4).wrapping_sub(t1);
    let var2 = (delta.wrapping_mul(delta) >> 12).wrapping_mul(t3) >> 14;

    let t_fine = var1.wrapping_add(var2);
    let centi = t_fine.wrapping_mul(5).wrapping_add(128) >> 8;
    (centi, FineTemperature(t_fine))
}

/// Returns pressure in Pa x 256 (divide by 25600 for hPa), or `0` when the
/// calibration would divide by zero or the result comes out negative.
pub fn compensate_pressure(
    raw: u32,
    fine: FineTemperature,
    calib: &CalibrationCoefficients,
) -> u32 {
    let p1 = calib.dig_p1 as i64;
    let p2 = calib.dig_p2 as i64;
    let p3 = calib.dig_p3 as i64;
    let p4 = calib.dig_p4 as i64;
    let p5 = calib.dig_p5 as i64;
    let p6 = calib.dig_p6 as i64;
    let p7 = calib.dig_p7 as i64;
    let p8 = calib.dig_p8 as i64;
    let p9 = calib.dig_p9 as i64;

    let mut var1 = fine.0 as i64 - 128000;
    let mut var2 = var1.wrapping_mul(var1).wrapping_mul(p6);
    var2 = var2.wrapping_add(var1.wrapping_mul(p5) << 17);
    var2 = var2.wrapping_add(p4 << 35);
    var1 = (var1.wrapping_mul(var1).wrapping_mul(p3) >> 8)
        .wrapping_add(var1.wrapping_mul(p2) << 12);
    var1 = ((1i64 << 47).wrapping_add(var1)).wrapping_mul(p1) >> 33;

    if var1 == 0 {
        return 0;
    }

    let mut p = 1048576 - raw as i64;
    p = ((p << 31).wrapping_sub(var2)).wrapping_mul(3125).wrapping_div(var1);
    var1 = p9.wrapping_mul(p >> 13).wrapping_mul(p >> 13) >> 25;
    var2 = p8.wrapping_mul(p) >> 19;

    p = (p.wrapping_add(var1).wrapping_add(var2) >> 8).wrapping_add(p7 << 4);
    if p < 0 {
        return 0;
    }
    p as u32
}

/// Returns relative humidity in % x 1024, saturated to 0..=100 %.
pub fn compensate_humidity(
    raw: u16,
    fine: FineTemperature,
    calib: &CalibrationCoefficients,
) -> u32 {
    let adc = raw as i32;
    let h1 = calib.dig_h1 as i32;
    let h2 = calib.dig_h2 as i32;
    let h3 = calib.dig_h3 as i32;
    let h4 = calib.dig_h4 as i32;
    let h5 = calib.dig_h5 as i32;
    let h6 = calib.dig_h6 as i32;

    let mut v = fine.0.wrapping_sub(76800);

    let offset = (adc << 14)
        .wrapping_sub(h4 << 20)
        .wrapping_sub(h5.wrapping_mul(v))
        .wrapping_add(16384)
        >> 15;
    let temp_term = (v.wrapping_mul(h6) >> 10)
        .wrapping_mul((v.wrapping_mul(h3) >> 11).wrapping_add(32768))
        >> 10;
    let gain = (temp_term.wrapping_add(2097152))
        .wrapping_mul(h2)
        .wrapping_add(8192)
        >> 14;
    v = offset.wrapping_mul(gain);

    let square = ((v >> 15).wrapping_mul(v >> 15) >> 7).wrapping_mul(h1) >> 4;
    v = v.wrapping_sub(square);

    (v.clamp(0, HUMIDITY_MAX) >> 12) as u32
}
