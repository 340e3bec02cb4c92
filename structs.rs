use std::fmt;

/// Factory trimming values, read once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationCoefficients {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,

    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,

    pub dig_h1: u8,
    pub dig_h2: i16,
    pub dig_h3: u8,
    pub dig_h4: i16,
    pub dig_h5: i16,
    pub dig_h6: i8,
}

/// Uncompensated ADC values of one measurement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    /// 20 bit
    pub pressure: u32,
    /// 20 bit
    pub temperature: u32,
    pub humidity: u16,
}

/// High resolution temperature shared by the pressure and humidity
/// formulas. Only [`compensate_temperature`](crate::compensate_temperature)
/// creates one, so the other two cannot run before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FineTemperature(pub(crate) i32);

impl FineTemperature {
    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibratedReading {
    /// Degrees Celsius x 100.
    pub temperature: i32,
    /// Pascal x 256, `0` when the calibration yields no valid pressure.
    pub pressure: u32,
    /// %RH x 1024.
    pub humidity: u32,
}

impl CalibratedReading {
    pub fn celsius(&self) -> f32 {
        self.temperature as f32 / 100.0
    }

    pub fn hpa(&self) -> f32 {
        self.pressure as f32 / 25600.0
    }

    pub fn relative_humidity(&self) -> f32 {
        self.humidity as f32 / 1024.0
    }

    /// The pressure formula signals an unusable result with zero.
    pub fn pressure_valid(&self) -> bool {
        self.pressure != 0
    }

    pub fn render(&self) -> ReadingText {
        ReadingText {
            temperature: format!(" = {:.2} C", self.celsius()),
            pressure: format!(" = {:.2} hPa", self.hpa()),
            humidity: format!(" = {:.2} %", self.relative_humidity()),
        }
    }
}

/// Text form of a reading, each field meant to follow its quantity's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingText {
    pub temperature: String,
    pub pressure: String,
    pub humidity: String,
}

impl fmt::Display for CalibratedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render();
        writeln!(f, "Temperature{}", text.temperature)?;
        writeln!(f, "Pressure{}", text.pressure)?;
        write!(f, "Humidity{}", text.humidity)
    }
}
