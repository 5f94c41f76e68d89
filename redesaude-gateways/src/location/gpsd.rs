//! Client for the [gpsd](https://gpsd.io) JSON protocol.
//!
//! After connecting, gpsd greets with a `VERSION` report. The client
//! enables streaming with `?WATCH={"enable":true,"json":true}` and then
//! receives one JSON object per line. Only `TPV` (time-position-velocity)
//! reports carry a position.

use redesaude_core::{
    entities::{Accuracy, DevicePosition, MapPoint, PermissionStatus, Timestamp},
    gateways::location::{Error, LocationGateway, PositionCallback, Subscription},
};
use serde::Deserialize;
use std::{
    io::{BufRead, BufReader, Write},
    net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:2947";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const WATCH_COMMAND: &[u8] = b"?WATCH={\"enable\":true,\"json\":true}\n";
const WATCH_DISABLE_COMMAND: &[u8] = b"?WATCH={\"enable\":false}\n";

/// With [`Accuracy::Balanced`] at most one fix per interval is forwarded.
const BALANCED_MIN_INTERVAL: Duration = Duration::from_secs(5);

/// Minimal fix quality: 2 = 2D, 3 = 3D
const MIN_FIX_MODE: u8 = 2;

#[derive(Debug, Clone)]
pub struct Gpsd {
    address: String,
}

impl Gpsd {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    fn socket_addr(&self) -> Result<SocketAddr, Error> {
        self.address
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| Error::Unavailable(format!("Cannot resolve {}", self.address)))
    }

    fn connect(&self) -> Result<TcpStream, Error> {
        let addr = self.socket_addr()?;
        log::debug!("Connecting to gpsd at {addr}");
        TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)
            .map_err(|err| Error::Unavailable(format!("gpsd at {addr}: {err}")))
    }
}

impl Default for Gpsd {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl LocationGateway for Gpsd {
    /// gpsd has no notion of permissions: access counts
    /// as granted if the daemon accepts a connection.
    fn request_foreground_permission(&self) -> PermissionStatus {
        match self.connect() {
            Ok(stream) => {
                let _ = stream.shutdown(Shutdown::Both);
                PermissionStatus::Granted
            }
            Err(err) => {
                log::warn!("{err}");
                PermissionStatus::Denied
            }
        }
    }

    fn watch_position(
        &self,
        accuracy: Accuracy,
        on_update: PositionCallback,
    ) -> Result<Subscription, Error> {
        let mut stream = self.connect()?;
        stream.write_all(WATCH_COMMAND)?;
        let reader = BufReader::new(stream.try_clone()?);
        let stopped = Arc::new(AtomicBool::new(false));
        let handle = {
            let stopped = Arc::clone(&stopped);
            thread::Builder::new()
                .name("gpsd-watch".into())
                .spawn(move || read_reports(reader, accuracy, &stopped, on_update))?
        };
        Ok(Subscription::new(move || {
            stopped.store(true, Ordering::SeqCst);
            let _ = stream.write_all(WATCH_DISABLE_COMMAND);
            // Unblocks the reader thread
            let _ = stream.shutdown(Shutdown::Both);
            if handle.join().is_err() {
                log::error!("The gpsd reader thread panicked");
            }
            log::debug!("Stopped watching gpsd");
        }))
    }
}

fn read_reports<R: BufRead>(
    reader: R,
    accuracy: Accuracy,
    stopped: &AtomicBool,
    on_update: PositionCallback,
) {
    let mut last_fix: Option<Timestamp> = None;
    for line in reader.lines() {
        if stopped.load(Ordering::SeqCst) {
            break;
        }
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                if !stopped.load(Ordering::SeqCst) {
                    log::warn!("Lost connection to gpsd: {err}");
                }
                break;
            }
        };
        log::trace!("gpsd: {line}");
        let Some(position) = parse_position(&line) else {
            continue;
        };
        if accuracy == Accuracy::Balanced {
            if let Some(last) = last_fix {
                if position.received_at - last < BALANCED_MIN_INTERVAL {
                    continue;
                }
            }
        }
        last_fix = Some(position.received_at);
        on_update(position);
    }
    log::debug!("gpsd report stream ended");
}

#[derive(Debug, Deserialize)]
#[serde(tag = "class")]
enum Report {
    #[serde(rename = "TPV")]
    Tpv(Tpv),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct Tpv {
    #[serde(default)]
    mode: u8,
    lat: Option<f64>,
    lon: Option<f64>,
    /// Estimated horizontal position error in meters
    eph: Option<f64>,
    epx: Option<f64>,
    epy: Option<f64>,
}

fn parse_position(line: &str) -> Option<DevicePosition> {
    let report: Report = match serde_json::from_str(line) {
        Ok(report) => report,
        Err(err) => {
            log::debug!("Ignoring unreadable gpsd report: {err}");
            return None;
        }
    };
    let Report::Tpv(tpv) = report else {
        return None;
    };
    if tpv.mode < MIN_FIX_MODE {
        return None;
    }
    let pos = MapPoint::try_from_lat_lng_deg(tpv.lat?, tpv.lon?)?;
    let accuracy = tpv.eph.or_else(|| match (tpv.epx, tpv.epy) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, y) => x.or(y),
    });
    Some(DevicePosition {
        pos,
        accuracy,
        received_at: Timestamp::now(),
    })
}
