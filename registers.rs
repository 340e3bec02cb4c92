//! BME280 register map.
// cf. https://trac.switch-science.com/wiki/BME280

/// Default I2C slave address (SDO tied to GND).
pub const ADDR_BME280: u16 = 0x76;

pub const REG_CTRL_HUM: u8 = 0xF2;
pub const REG_CTRL_MEAS: u8 = 0xF4;
pub const REG_CONFIG: u8 = 0xF5;

// 0xF7 - 0xFE, read as one burst
pub const REG_PRESSURE_MSB: u8 = 0xF7;
pub const REG_ADC_VALUE_LEN: usize = 8;

// calibration, 16 bit little endian pairs
pub const REG_DIG_T1: u8 = 0x88;
pub const REG_DIG_T2: u8 = 0x8A;
pub const REG_DIG_T3: u8 = 0x8C;

pub const REG_DIG_P1: u8 = 0x8E;
pub const REG_DIG_P2: u8 = 0x90;
pub const REG_DIG_P3: u8 = 0x92;
pub const REG_DIG_P4: u8 = 0x94;
pub const REG_DIG_P5: u8 = 0x96;
pub const REG_DIG_P6: u8 = 0x98;
pub const REG_DIG_P7: u8 = 0x9A;
pub const REG_DIG_P8: u8 = 0x9C;
pub const REG_DIG_P9: u8 = 0x9E;

pub const REG_DIG_H1: u8 = 0xA1;
pub const REG_DIG_H2: u8 = 0xE1;
pub const REG_DIG_H3: u8 = 0xE3;
// H4 and H5 share the nibbles of 0xE5
pub const REG_DIG_H4: u8 = 0xE4;
pub const REG_DIG_H5: u8 = 0xE5;
pub const REG_DIG_H6: u8 = 0xE7;
