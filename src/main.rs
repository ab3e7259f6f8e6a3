use std::error::Error;
use std::process::exit;
use std::time::Duration;
use dotenv::dotenv;
use dmx_serial_writer::common::logger::init_logger;
use dmx_serial_writer::common::setting::Settings;
use dmx_serial_writer::{ChannelSelector, DmxArg, DmxDriver, DmxWriter};
use dmx_serial_writer::{error, info};

const LOG_TAG: &str = "main";

const USAGE: &str = "usage: dmx-serial-writer <channels> <value> [serial port]\n  channels: 5 or 1,2,3";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // read .env
    dotenv().ok();

    // load config
    let settings = Settings::get();

    init_logger()?;
    info!(LOG_TAG, "settings loaded, env: {:?}", settings.env.env);
    log::debug!("settings: {:?}", settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (channels, value, port) = match args.as_slice() {
        [channels, value] => (channels, value, settings.serial.port.as_str()),
        [channels, value, port] => (channels, value, port.as_str()),
        _ => {
            eprintln!("{}", USAGE);
            exit(2);
        }
    };

    // reject bad arguments before the port is touched
    let selector: ChannelSelector = channels.parse()?;

    let driver = DmxDriver::open(port)?;
    driver
        .wait_ready(Duration::from_millis(settings.serial.ready_timeout_ms))
        .await?;

    let result = driver.set_channels(selector, DmxArg::from(value.as_str()))?.await;
    driver.close().await;

    match result {
        Ok(()) => {
            info!(LOG_TAG, "channels {} set to {} on {}", channels, value, port);
            Ok(())
        }
        Err(e) => {
            error!(LOG_TAG, "cannot set channels {}: {}", channels, e);
            Err(e.into())
        }
    }
}
