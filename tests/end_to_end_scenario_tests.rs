//! End-to-end scenario with fixed, non-random times
//!
//! Three customers with inter-arrival times [-, 1.0, 0.1] and service times
//! [2.0, 0.5, 3.0]. Both later customers queue behind the first.

use bank_queue_simulator::report;
use bank_queue_simulator::simulation::{
    QueueStatistics, SimulationEngine, SimulationError, SimulationResult, TimeGenerator,
};
use bank_queue_simulator::types::CustomerRecord;

const EPSILON: f64 = 1e-9;

/// Time generator replaying fixed sequences
struct FixedTimes {
    inter_arrival: std::vec::IntoIter<f64>,
    service: std::vec::IntoIter<f64>,
}

impl FixedTimes {
    fn new(inter_arrival: Vec<f64>, service: Vec<f64>) -> Self {
        Self { inter_arrival: inter_arrival.into_iter(), service: service.into_iter() }
    }
}

impl TimeGenerator for FixedTimes {
    fn inter_arrival_time(&mut self) -> SimulationResult<f64> {
        self.inter_arrival
            .next()
            .ok_or_else(|| SimulationError::random_source_failure("no inter-arrival time left"))
    }

    fn service_time(&mut self) -> SimulationResult<f64> {
        self.service
            .next()
            .ok_or_else(|| SimulationError::random_source_failure("no service time left"))
    }
}

fn scenario_records() -> Vec<CustomerRecord> {
    let generator = FixedTimes::new(vec![1.0, 0.1], vec![2.0, 0.5, 3.0]);
    SimulationEngine::new(generator).run(3).unwrap()
}

fn assert_record(actual: &CustomerRecord, expected: [f64; 8], queue_length: u32) {
    let fields = [
        actual.inter_arrival_time,
        actual.arrival_time,
        actual.service_time,
        actual.service_start_time,
        actual.service_end_time,
        actual.waiting_time,
        actual.time_in_system,
        actual.idle_time,
    ];
    for (index, (got, want)) in fields.iter().zip(expected.iter()).enumerate() {
        assert!(
            (got - want).abs() < EPSILON,
            "field {} mismatch: got {}, expected {} in {:?}",
            index,
            got,
            want,
            actual
        );
    }
    assert_eq!(actual.queue_length, queue_length);
}

#[test]
fn test_three_customer_scenario() {
    let records = scenario_records();
    assert_eq!(records.len(), 3);

    // [iat, arrival, service, start, end, wait, in_system, idle]
    assert_record(&records[0], [0.0, 0.0, 2.0, 0.0, 2.0, 0.0, 2.0, 0.0], 0);
    assert_record(&records[1], [1.0, 1.0, 0.5, 2.0, 2.5, 1.0, 1.5, 0.0], 1);
    assert_record(&records[2], [0.1, 1.1, 3.0, 2.5, 5.5, 1.4, 4.4, 0.0], 1);
}

#[test]
fn test_three_customer_scenario_statistics() {
    let stats = QueueStatistics::from_records(&scenario_records());

    assert_eq!(stats.customers, 3);
    assert_eq!(stats.customers_who_waited, 2);
    assert!((stats.total_waiting_time - 2.4).abs() < EPSILON);
    assert!((stats.average_waiting_time() - 0.8).abs() < EPSILON);
    assert!((stats.probability_of_waiting() - 2.0 / 3.0).abs() < EPSILON);
    assert!((stats.average_waiting_time_of_those_who_waited() - 1.2).abs() < EPSILON);
    assert!((stats.average_service_time() - 5.5 / 3.0).abs() < EPSILON);
    assert!((stats.average_inter_arrival_time() - 0.55).abs() < EPSILON);
    assert!((stats.average_time_in_system() - 7.9 / 3.0).abs() < EPSILON);
    assert_eq!(stats.total_idle_time, 0.0);
    assert!((stats.makespan - 5.5).abs() < EPSILON);
    assert_eq!(stats.server_idle_proportion(), 0.0);
}

#[test]
fn test_three_customer_scenario_table() {
    let table = report::render_table(&scenario_records());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0].trim_end(),
        "Customer  IAT       Arrival Time   Service Time   Service Start Time  Service End Time    Waiting Time   Time in System Idle Time           Queue Length"
    );
    assert_eq!(
        lines[3].trim_end(),
        "3         0.10      1.10           3.00           2.50                5.50                1.40           4.40           0.00                1"
    );
}

#[test]
fn test_short_script_fails_without_records() {
    let generator = FixedTimes::new(vec![1.0], vec![2.0, 0.5, 3.0]);
    let result = SimulationEngine::new(generator).run(3);
    assert!(matches!(result, Err(SimulationError::RandomSourceFailure(_))));
}
