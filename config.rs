//! Operating mode written to the control registers at start up.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oversampling {
    Skip = 0b000,
    X1 = 0b001,
    X2 = 0b010,
    X4 = 0b011,
    X8 = 0b100,
    X16 = 0b101,
}

/// IIR filter coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Off = 0b000,
    X2 = 0b001,
    X4 = 0b010,
    X8 = 0b011,
    // 0b100 and above all select 16
    X16 = 0b101,
}

/// Inactive time between two measurements in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standby {
    Ms0_5 = 0b000,
    Ms62_5 = 0b001,
    Ms125 = 0b010,
    Ms250 = 0b011,
    Ms500 = 0b100,
    Ms1000 = 0b101,
    Ms10 = 0b110,
    Ms20 = 0b111,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sleep = 0b00,
    Forced = 0b01,
    Normal = 0b11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub humidity: Oversampling,
    pub temperature: Oversampling,
    pub pressure: Oversampling,
    pub filter: Filter,
    pub standby: Standby,
    pub mode: Mode,
}

impl Default for Config {
    /// The datasheet's "handheld device dynamic" setting: continuous
    /// sampling every 500 ms, pressure x4, filter 16.
    fn default() -> Self {
        Config {
            humidity: Oversampling::X1,
            temperature: Oversampling::X1,
            pressure: Oversampling::X4,
            filter: Filter::X16,
            standby: Standby::Ms500,
            mode: Mode::Normal,
        }
    }
}

impl Config {
    pub fn ctrl_hum(&self) -> u8 {
        self.humidity as u8
    }

    /// 3-wire SPI (bit 0) is always left disabled.
    pub fn config(&self) -> u8 {
        ((self.standby as u8) << 5) | ((self.filter as u8) << 2)
    }

    pub fn ctrl_meas(&self) -> u8 {
        ((self.temperature as u8) << 5) | ((self.pressure as u8) << 2) | self.mode as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_register_values() {
        let config = Config::default();
        assert_eq!(config.ctrl_hum(), 0x01);
        assert_eq!(config.config(), 0x94);
        assert_eq!(config.ctrl_meas(), 0x2F);
    }

    #[test]
    fn forced_mode_max_oversampling() {
        let config = Config {
            humidity: Oversampling::X16,
            temperature: Oversampling::X16,
            pressure: Oversampling::X16,
            filter: Filter::Off,
            standby: Standby::Ms20,
            mode: Mode::Forced,
        };
        assert_eq!(config.ctrl_hum(), 0x05);
        assert_eq!(config.config(), 0xE0);
        assert_eq!(config.ctrl_meas(), 0xB5);
    }
}
