use log::debug;

use crate::bus::BusChannel;
use crate::config::Config;
use crate::error::Error;
use crate::registers::{REG_CONFIG, REG_CTRL_HUM, REG_CTRL_MEAS};

/// Writes the operating mode. `ctrl_hum` only takes effect after a write
/// to `ctrl_meas`, so the order here is fixed.
pub fn initialize<B: BusChannel>(bus: &mut B, config: &Config) -> Result<(), Error<B::Error>> {
    bus.write_register(REG_CTRL_HUM, config.ctrl_hum())?;
    bus.write_register(REG_CONFIG, config.config())?;
    bus.write_register(REG_CTRL_MEAS, config.ctrl_meas())?;
    debug!("configured sensor: {config:?}");
    Ok(())
}
