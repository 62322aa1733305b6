//! Statistics collection and reporting
//!
//! Aggregate queue metrics computed from a finished run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::CustomerRecord;

/// Summary metrics over one simulated run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueueStatistics {
    /// Number of customers simulated
    pub customers: usize,
    /// Number of customers who had to wait
    pub customers_who_waited: usize,
    /// Sum of all waiting times
    pub total_waiting_time: f64,
    /// Sum of all service times
    pub total_service_time: f64,
    /// Sum of all inter-arrival times
    pub total_inter_arrival_time: f64,
    /// Sum of all times in system
    pub total_time_in_system: f64,
    /// Sum of server idle time
    pub total_idle_time: f64,
    /// Service end time of the last customer
    pub makespan: f64,
}

impl QueueStatistics {
    /// Compute statistics from an ordered run
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let mut stats = records.iter().fold(Self::default(), |mut stats, record| {
            stats.customers += 1;
            stats.customers_who_waited += usize::from(record.waited());
            stats.total_waiting_time += record.waiting_time;
            stats.total_service_time += record.service_time;
            stats.total_inter_arrival_time += record.inter_arrival_time;
            stats.total_time_in_system += record.time_in_system;
            stats.total_idle_time += record.idle_time;
            stats
        });
        stats.makespan = records.last().map_or(0.0, |record| record.service_end_time);
        stats
    }

    fn per_customer(&self, total: f64) -> f64 {
        if self.customers == 0 {
            0.0
        } else {
            total / self.customers as f64
        }
    }

    /// Average waiting time over all customers
    pub fn average_waiting_time(&self) -> f64 {
        self.per_customer(self.total_waiting_time)
    }

    /// Fraction of customers who had to wait
    pub fn probability_of_waiting(&self) -> f64 {
        self.per_customer(self.customers_who_waited as f64)
    }

    /// Average waiting time of the customers who waited
    pub fn average_waiting_time_of_those_who_waited(&self) -> f64 {
        if self.customers_who_waited == 0 {
            0.0
        } else {
            self.total_waiting_time / self.customers_who_waited as f64
        }
    }

    /// Average service time
    pub fn average_service_time(&self) -> f64 {
        self.per_customer(self.total_service_time)
    }

    /// Average gap between consecutive arrivals (first customer has no gap)
    pub fn average_inter_arrival_time(&self) -> f64 {
        if self.customers < 2 {
            0.0
        } else {
            self.total_inter_arrival_time / (self.customers - 1) as f64
        }
    }

    /// Average time in system
    pub fn average_time_in_system(&self) -> f64 {
        self.per_customer(self.total_time_in_system)
    }

    /// Fraction of the run the server spent idle
    pub fn server_idle_proportion(&self) -> f64 {
        if self.makespan <= 0.0 {
            0.0
        } else {
            self.total_idle_time / self.makespan
        }
    }
}

impl fmt::Display for QueueStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Queue Statistics")?;
        writeln!(f, "================")?;
        writeln!(f, "  Customers: {}", self.customers)?;
        writeln!(f, "  Average Waiting Time: {:.2}", self.average_waiting_time())?;
        writeln!(
            f,
            "  Customers Who Waited: {} ({:.1}%)",
            self.customers_who_waited,
            self.probability_of_waiting() * 100.0
        )?;
        writeln!(
            f,
            "  Average Wait (those who waited): {:.2}",
            self.average_waiting_time_of_those_who_waited()
        )?;
        writeln!(f, "  Average Service Time: {:.2}", self.average_service_time())?;
        writeln!(f, "  Average Inter-Arrival Time: {:.2}", self.average_inter_arrival_time())?;
        writeln!(f, "  Average Time in System: {:.2}", self.average_time_in_system())?;
        writeln!(
            f,
            "  Server Idle Time: {:.2} ({:.1}% of {:.2})",
            self.total_idle_time,
            self.server_idle_proportion() * 100.0,
            self.makespan
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServerState;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_run_is_all_zero() {
        let stats = QueueStatistics::from_records(&[]);
        assert_eq!(stats, QueueStatistics::default());
        assert_eq!(stats.average_waiting_time(), 0.0);
        assert_eq!(stats.average_inter_arrival_time(), 0.0);
        assert_eq!(stats.server_idle_proportion(), 0.0);
    }

    #[test]
    fn test_statistics_with_idle_server() {
        let first = CustomerRecord::first(1.0);
        // Arrives at 3.0, server idle from 1.0 to 3.0
        let second = CustomerRecord::after(ServerState::from(&first), 3.0, 1.0);
        let stats = QueueStatistics::from_records(&[first, second]);

        assert_eq!(stats.customers, 2);
        assert_eq!(stats.customers_who_waited, 0);
        assert!(approx_eq(stats.total_idle_time, 2.0));
        assert!(approx_eq(stats.makespan, 4.0));
        assert!(approx_eq(stats.server_idle_proportion(), 0.5));
        assert!(approx_eq(stats.average_inter_arrival_time(), 3.0));
        assert_eq!(stats.average_waiting_time_of_those_who_waited(), 0.0);
    }

    #[test]
    fn test_display_contains_headline_metrics() {
        let stats = QueueStatistics::from_records(&[CustomerRecord::first(2.0)]);
        let rendered = stats.to_string();
        assert!(rendered.contains("Customers: 1"));
        assert!(rendered.contains("Average Service Time: 2.00"));
    }
}
