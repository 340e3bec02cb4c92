use std::thread;
use std::time::Duration;

use bme280_driver::registers::ADDR_BME280;
use bme280_driver::{Config, Session};
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use rppal::i2c::I2c;

/// Print calibrated readings of a BME280 attached to the local I2C bus.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// I2C bus number, /dev/i2c-<bus>.
    #[arg(short, long, default_value_t = 1)]
    bus: u8,

    /// Slave address of the sensor, 0x76 or 0x77.
    #[arg(short, long, default_value_t = ADDR_BME280, value_parser = parse_address)]
    address: u16,

    /// Time to let the first conversion finish after configuring, in ms.
    #[arg(long, default_value_t = 250)]
    settle_ms: u64,

    /// Number of readings to take, 0 keeps reading forever.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Pause between two readings, in ms.
    #[arg(short, long, default_value_t = 1000)]
    interval_ms: u64,
}

fn parse_address(arg: &str) -> Result<u16, std::num::ParseIntError> {
    match arg.strip_prefix("0x") {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => arg.parse(),
    }
}

fn open(cli: &Cli) -> Result<Session<I2c>> {
    let mut i2c = I2c::with_bus(cli.bus)
        .wrap_err_with(|| format!("Could not open i2c bus {}", cli.bus))?;
    i2c.set_slave_address(cli.address)
        .wrap_err("Could not set slave address")?;

    let session = Session::open(i2c, &Config::default())
        .wrap_err_with(|| format!("Could not init bme280 at {:#04x}", cli.address))?;
    log::info!("bme280 ready on bus {} at {:#04x}", cli.bus, cli.address);
    Ok(session)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let cli = Cli::parse();

    let mut sensor = open(&cli)?;
    thread::sleep(Duration::from_millis(cli.settle_ms));

    let mut taken = 0;
    loop {
        let reading = sensor
            .take_reading()
            .wrap_err("Could not read bme280 sensor")?;
        if !reading.pressure_valid() {
            log::warn!("pressure could not be compensated");
        }
        println!("{reading}");

        taken += 1;
        if cli.count != 0 && taken >= cli.count {
            break;
        }
        thread::sleep(Duration::from_millis(cli.interval_ms));
        println!();
    }
    Ok(())
}
