//! Per-customer timing record
//!
//! A [`CustomerRecord`] is produced once by the simulation engine and never
//! mutated afterwards. [`ServerState`] is the running state carried from one
//! customer to the next.

use serde::{Deserialize, Serialize};

/// Timing metrics for a single simulated customer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Time since the previous arrival (0 for the first customer)
    pub inter_arrival_time: f64,
    /// Absolute clock time of arrival
    pub arrival_time: f64,
    /// Duration required to serve this customer
    pub service_time: f64,
    /// Clock time service begins
    pub service_start_time: f64,
    /// Clock time service completes
    pub service_end_time: f64,
    /// Time spent queued before service
    pub waiting_time: f64,
    /// Waiting plus service
    pub time_in_system: f64,
    /// Server idle duration immediately preceding this customer's service
    pub idle_time: f64,
    /// 1 if this customer had to wait, else 0.
    ///
    /// This is a wait flag, not a count of customers in line.
    pub queue_length: u32,
}

impl CustomerRecord {
    /// Record for the first customer: arrives at 0 and is served immediately
    pub fn first(service_time: f64) -> Self {
        Self {
            inter_arrival_time: 0.0,
            arrival_time: 0.0,
            service_time,
            service_start_time: 0.0,
            service_end_time: service_time,
            waiting_time: 0.0,
            time_in_system: service_time,
            idle_time: 0.0,
            queue_length: 0,
        }
    }

    /// Record for a customer arriving `inter_arrival_time` after the previous one
    pub fn after(previous: ServerState, inter_arrival_time: f64, service_time: f64) -> Self {
        let arrival_time = previous.arrival_time + inter_arrival_time;
        let idle_time = (arrival_time - previous.service_end_time).max(0.0);
        let service_start_time = arrival_time.max(previous.service_end_time);
        let service_end_time = service_start_time + service_time;
        let waiting_time = service_start_time - arrival_time;

        Self {
            inter_arrival_time,
            arrival_time,
            service_time,
            service_start_time,
            service_end_time,
            waiting_time,
            time_in_system: service_end_time - arrival_time,
            idle_time,
            queue_length: u32::from(waiting_time > 0.0),
        }
    }

    /// Whether this customer had to wait for the server
    pub fn waited(&self) -> bool {
        self.queue_length == 1
    }
}

/// Running state threaded through the simulation fold
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ServerState {
    /// Arrival time of the previous customer
    pub arrival_time: f64,
    /// Time the server finished the previous customer
    pub service_end_time: f64,
}

impl From<&CustomerRecord> for ServerState {
    fn from(record: &CustomerRecord) -> Self {
        Self { arrival_time: record.arrival_time, service_end_time: record.service_end_time }
    }
}
