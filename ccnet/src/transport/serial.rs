// ccnet-rs/ccnet/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use serialport::SerialPort;

use crate::transport::traits::{DataNotifier, Transport};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Default serial connection baud rate (bps).
pub const DEFAULT_BAUD_RATE: u32 = 9_600;

/// How long a single blocking read on the reader thread may last before
/// it re-checks the stop flag.
const READ_SLICE: Duration = Duration::from_millis(50);

/// Serial line settings. The validator runs 8 data bits, no parity, one
/// stop bit, no flow control at 9600 or 19200 bps (hardware selectable).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialConfig {
    pub path: String,
    pub baud_rate: u32,
}

impl SerialConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }

    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }
}

/// Serial port transport. A reader thread moves incoming bytes into a
/// shared buffer and fires the subscribed notifier.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    buffer: Arc<Mutex<Vec<u8>>>,
    notifier: Arc<Mutex<Option<DataNotifier>>>,
    stop: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl SerialTransport {
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(config.path.as_str(), config.baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(READ_SLICE)
            .open()
            .map_err(|e| Error::TransportOpenFailure(format!("{}: {}", config.path, e)))?;

        let reader_port = port.try_clone()?;

        let buffer = Arc::new(Mutex::new(Vec::new()));
        let notifier = Arc::new(Mutex::new(None));
        let stop = Arc::new(AtomicBool::new(false));

        let reader = thread::Builder::new()
            .name("ccnet-serial-reader".into())
            .spawn({
                let buffer = Arc::clone(&buffer);
                let notifier = Arc::clone(&notifier);
                let stop = Arc::clone(&stop);
                move || read_loop(reader_port, buffer, notifier, stop)
            })?;

        log::info!("opened {} at {} bps", config.path, config.baud_rate);

        Ok(Self {
            port,
            buffer,
            notifier,
            stop,
            reader: Some(reader),
        })
    }
}

fn read_loop(
    mut port: Box<dyn SerialPort>,
    buffer: Arc<Mutex<Vec<u8>>>,
    notifier: Arc<Mutex<Option<DataNotifier>>>,
    stop: Arc<AtomicBool>,
) {
    let mut chunk = [0u8; 256];
    while !stop.load(Ordering::Relaxed) {
        match port.read(&mut chunk) {
            Ok(0) => {}
            Ok(n) => {
                log::trace!("serial rx: {}", bytes_to_hex_spaced(&chunk[..n]));
                buffer.lock().extend_from_slice(&chunk[..n]);
                if let Some(waker) = notifier.lock().as_ref() {
                    waker.notify();
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {}
            Err(e) => {
                log::error!("serial reader stopped: {}", e);
                break;
            }
        }
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        log::trace!("serial tx: {}", bytes_to_hex_spaced(data));
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn read_available(&mut self) -> Result<Vec<u8>> {
        Ok(std::mem::take(&mut *self.buffer.lock()))
    }

    fn subscribe(&mut self, notifier: DataNotifier) {
        *self.notifier.lock() = Some(notifier);
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }
}
