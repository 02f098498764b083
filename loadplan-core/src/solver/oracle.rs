#[cfg(test)]
#[path = "../../tests/unit/solver/oracle_test.rs"]
mod oracle_test;

use crate::models::common::{Coordinate, Destination, Distance};
use crate::models::problem::{LocationOracle, OracleError};
use crate::solver::OracleConfig;
use rustc_hash::FxHashMap;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A shared location oracle.
pub type SharedOracle = Arc<dyn LocationOracle + Send + Sync>;

type DistanceKey = (u64, u64, u64, u64);

/// Wraps location oracle with per call timeout, bounded retries and a per run cache.
/// Final outcomes (including failures) are cached, so repeated queries within a run are stable.
pub struct CachedOracle {
    inner: SharedOracle,
    config: OracleConfig,
    coordinates: Mutex<FxHashMap<String, Result<Coordinate, OracleError>>>,
    distances: Mutex<FxHashMap<DistanceKey, Result<Distance, OracleError>>>,
}

impl CachedOracle {
    /// Creates a new instance of `CachedOracle`.
    pub fn new(inner: SharedOracle, config: OracleConfig) -> Self {
        Self { inner, config, coordinates: Mutex::default(), distances: Mutex::default() }
    }

    /// Resolves destination to a coordinate.
    pub fn resolve(&self, destination: &Destination) -> Result<Coordinate, OracleError> {
        match destination {
            Destination::Coordinate(coordinate) => Ok(*coordinate),
            Destination::Address(address) => {
                if let Some(result) = self.coordinates.lock().ok().and_then(|cache| cache.get(address).cloned()) {
                    return result;
                }

                let address_key = address.clone();
                let result = self.call_with_retries(move |oracle| oracle.resolve(&address_key));

                if let Ok(mut cache) = self.coordinates.lock() {
                    cache.entry(address.clone()).or_insert_with(|| result.clone());
                }

                result
            }
        }
    }

    /// Returns distance between two points.
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> Result<Distance, OracleError> {
        let key = (from.lat.to_bits(), from.lng.to_bits(), to.lat.to_bits(), to.lng.to_bits());

        if let Some(result) = self.distances.lock().ok().and_then(|cache| cache.get(&key).cloned()) {
            return result;
        }

        let result = self.call_with_retries(move |oracle| oracle.distance(from, to));

        if let Ok(mut cache) = self.distances.lock() {
            cache.entry(key).or_insert_with(|| result.clone());
        }

        result
    }

    fn call_with_retries<F, R>(&self, call: F) -> Result<R, OracleError>
    where
        F: Fn(&dyn LocationOracle) -> Result<R, OracleError> + Send + Sync + 'static,
        R: Send + 'static,
    {
        let call = Arc::new(call);
        let mut attempt = 0;

        loop {
            let call = call.clone();
            let result = call_with_timeout(self.inner.clone(), self.config.timeout, move |oracle| call(oracle));

            match result {
                Err(OracleError::Service(_)) if attempt < self.config.retries => attempt += 1,
                result => return result,
            }
        }
    }
}

/// Runs oracle call on a worker thread, a call which does not finish in time is reported as
/// service failure. The worker is detached and its late result is dropped.
fn call_with_timeout<F, R>(oracle: SharedOracle, timeout: Duration, call: F) -> Result<R, OracleError>
where
    F: FnOnce(&dyn LocationOracle) -> Result<R, OracleError> + Send + 'static,
    R: Send + 'static,
{
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let _ = sender.send(call(oracle.as_ref()));
    });

    match receiver.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(OracleError::Service(format!("timed out after {}ms", timeout.as_millis()))),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(OracleError::Service("oracle call panicked".to_string())),
    }
}
