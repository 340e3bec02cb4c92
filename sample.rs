use log::trace;

use crate::bus::BusChannel;
use crate::error::Error;
use crate::registers::{REG_ADC_VALUE_LEN, REG_PRESSURE_MSB};
use crate::structs::RawSample;

/// Reads pressure, temperature and humidity ADC values in one burst so
/// all three belong to the same conversion.
pub fn read_raw<B: BusChannel>(bus: &mut B) -> Result<RawSample, Error<B::Error>> {
    let mut data = [0u8; REG_ADC_VALUE_LEN];
    bus.read_burst(REG_PRESSURE_MSB, &mut data)?;

    let sample = unpack(&data);
    trace!("raw sample: {sample:?}");
    Ok(sample)
}

fn unpack(data: &[u8; REG_ADC_VALUE_LEN]) -> RawSample {
    let d: [u32; REG_ADC_VALUE_LEN] = data.map(u32::from);
    RawSample {
        pressure: (d[0] << 12) | (d[1] << 4) | (d[2] >> 4),
        temperature: (d[3] << 12) | (d[4] << 4) | (d[5] >> 4),
        humidity: u16::from_be_bytes([data[6], data[7]]),
    }
}
