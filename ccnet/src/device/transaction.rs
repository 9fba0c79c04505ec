// ccnet-rs/ccnet/src/device/transaction.rs

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::constants::{MIN_FRAME_LEN, SYNC};
use crate::protocol::codec;
use crate::protocol::{Command, Frame, Reply};
use crate::transport::{DataNotifier, Transport};
use crate::utils::{bytes_to_hex_spaced, Deadline};
use crate::{Error, Result};

/// Request/response engine for one device.
///
/// Owns the transport and the receiving end of its data notifier. Exactly
/// one transaction runs at a time; `&mut self` on every call makes this a
/// compile-time property, the device handle adds the cross-thread lock.
pub struct TransactionEngine {
    transport: Box<dyn Transport>,
    signal: Receiver<()>,
    response_timeout: Duration,
}

impl TransactionEngine {
    pub fn new(mut transport: Box<dyn Transport>, response_timeout: Duration) -> Self {
        let (notifier, signal) = DataNotifier::channel();
        transport.subscribe(notifier);
        Self {
            transport,
            signal,
            response_timeout,
        }
    }

    pub fn response_timeout(&self) -> Duration {
        self.response_timeout
    }

    pub fn set_response_timeout(&mut self, timeout: Duration) {
        self.response_timeout = timeout;
    }

    /// Send a command and wait for its reply.
    ///
    /// A corrupted reply is answered with NAK before the decode error is
    /// returned. Nothing is retried. ACK and NAK are written without
    /// waiting since the device never answers them.
    pub fn send(&mut self, cmd: Command, data: &[u8]) -> Result<Reply> {
        if !cmd.expects_reply() {
            self.write_control(cmd)?;
            return Ok(Reply::new(cmd.code(), Vec::new()));
        }

        let frame = codec::encode_command_frame(cmd, data)?;
        log::debug!("sending {}", cmd);
        let reply = self.exchange(&frame)?;
        log::debug!(
            "{} answered with {:#04x} ({} data bytes)",
            cmd.name(),
            reply.code,
            reply.data.len()
        );
        Ok(reply)
    }

    pub fn send_ack(&mut self) -> Result<()> {
        self.write_control(Command::Ack)
    }

    pub fn send_nak(&mut self) -> Result<()> {
        self.write_control(Command::Nak)
    }

    fn write_control(&mut self, cmd: Command) -> Result<()> {
        let frame = match cmd {
            Command::Nak => codec::nak_frame(),
            _ => codec::ack_frame(),
        };
        log::trace!(">> {}", bytes_to_hex_spaced(&frame));
        self.transport.write(&frame)
    }

    fn exchange(&mut self, frame: &[u8]) -> Result<Reply> {
        self.discard_stale()?;

        log::trace!(">> {}", bytes_to_hex_spaced(frame));
        self.transport.write(frame)?;

        let buf = self.receive()?;
        if buf.is_empty() {
            log::debug!("no reply within {:?}", self.response_timeout);
            return Err(Error::Timeout);
        }
        log::trace!("<< {}", bytes_to_hex_spaced(&buf));

        match codec::decode_reply_frame(&buf) {
            Ok(reply) => Ok(reply),
            Err(err @ (Error::ChecksumMismatch { .. }
            | Error::LengthMismatch { .. }
            | Error::InvalidLength { .. })) => {
                log::warn!("corrupted reply ({}), sending NAK", err);
                self.send_nak()?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Drop wake-ups and bytes left over from an earlier exchange.
    fn discard_stale(&mut self) -> Result<()> {
        while self.signal.try_recv().is_ok() {}
        let stale = self.transport.read_available()?;
        if !stale.is_empty() {
            log::debug!("discarding {} stale bytes", stale.len());
        }
        Ok(())
    }

    /// Collect bytes until a whole frame is buffered or the response
    /// window closes. May return a partial frame.
    fn receive(&mut self) -> Result<Vec<u8>> {
        let deadline = Deadline::after(self.response_timeout);
        let mut buf: Vec<u8> = Vec::new();

        loop {
            if let Some(len) = complete_len(&buf) {
                buf.truncate(len);
                return Ok(buf);
            }

            let remaining = deadline.remaining();
            if remaining.is_zero() {
                return Ok(buf);
            }

            match self.signal.recv_timeout(remaining) {
                Ok(()) => {
                    let chunk = self.transport.read_available()?;
                    buf.extend_from_slice(&chunk);
                    skip_to_sync(&mut buf);
                }
                Err(RecvTimeoutError::Timeout) => return Ok(buf),
                Err(RecvTimeoutError::Disconnected) => return Err(Error::TransportClosed),
            }
        }
    }
}

/// Length of the first frame in `buf` once all of it has arrived. A LEN
/// below the minimum frame size still waits for that many bytes so the
/// decoder gets something to reject.
fn complete_len(buf: &[u8]) -> Option<usize> {
    let len = Frame::expected_len(buf)?.max(MIN_FRAME_LEN);
    (buf.len() >= len).then_some(len)
}

fn skip_to_sync(buf: &mut Vec<u8>) {
    match buf.iter().position(|&b| b == SYNC) {
        Some(0) => {}
        Some(pos) => {
            log::trace!("skipping {} bytes before SYNC", pos);
            buf.drain(..pos);
        }
        None => buf.clear(),
    }
}
