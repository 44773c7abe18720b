use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use processor_execution_simulator::config::SimulationConfig;
use processor_execution_simulator::domain::simulator::cycle_report::ProcessorOutcome;
use processor_execution_simulator::domain::simulator::simulator::{CycleObserver, Simulator};
use processor_execution_simulator::domain::task::Task;
use processor_execution_simulator::loader::task_parser::parse_tasks;
use processor_execution_simulator::report::console::ConsoleReporter;

fn simulator(processors: i64, cycles: i64, task_list: &str) -> Simulator {
    let config = SimulationConfig::new(processors, cycles).unwrap();
    Simulator::new(config, parse_tasks(task_list).unwrap())
}

fn random_task_list(rng: &mut StdRng, count: usize, max_arrival: i64) -> String {
    let mut list = format!("{}\n", count);
    for _ in 0..count {
        let creation = rng.random_range(1..=max_arrival);
        let execution = rng.random_range(1..=6);
        let priority = rng.random_range(0..=3);
        list.push_str(&format!("{} {} {}\n", creation, execution, priority));
    }
    list
}

#[test]
fn test_console_transcript_two_processors() {
    let mut sim = simulator(2, 3, "2\n1 2 1\n1 1 2\n");
    let mut console = ConsoleReporter::new(Vec::new());

    sim.run(&mut console).unwrap();

    let expected = "\
Clock Cycle C1:
  Task T1 is created with execution time 2 and priority 1
  Task T2 is created with execution time 1 and priority 2
  Task T1 is running on P1
  Task T2 is completed on P2

Clock Cycle C2:
  Task T1 is completed on P1
  P2 is empty

Clock Cycle C3:
  P1 is empty
  P2 is empty

";
    assert_eq!(String::from_utf8(console.into_inner()).unwrap(), expected);
}

#[test]
fn test_identical_inputs_give_identical_transcripts() {
    let list = "5\n1 3 2\n1 3 2\n2 1 1\n2 4 1\n4 2 3\n";

    let transcript = |sim: &mut Simulator| {
        let mut console = ConsoleReporter::new(Vec::new());
        sim.run(&mut console).unwrap();
        console.into_inner()
    };

    let first = transcript(&mut simulator(2, 10, list));
    let second = transcript(&mut simulator(2, 10, list));
    assert_eq!(first, second);
}

/// Randomized runs: whatever the workload, every dispatch picks the best
/// waiting task, tasks complete exactly once and only after all their work.
#[test]
fn test_random_workloads_respect_dispatch_order() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let processors = rng.random_range(1..=4);
        let cycles = rng.random_range(1..=30);
        let task_count = rng.random_range(0..=12);
        let list = random_task_list(&mut rng, task_count, 10);
        let mut sim = simulator(processors, cycles, &list);

        let by_id: HashMap<String, Task> = sim.tasks().iter().map(|t| (t.id().to_string(), t.clone())).collect();
        let mut completed: HashSet<String> = HashSet::new();
        let mut busy_cycles: HashMap<String, u64> = HashMap::new();
        let mut previously_running: HashSet<String> = HashSet::new();

        loop {
            let waiting_before: Vec<Task> = sim.scheduler().waiting_tasks().into_iter().cloned().collect();
            let Some(report) = sim.step() else { break };

            let mut running_now: HashSet<String> = HashSet::new();
            for outcome in &report.outcomes {
                let Some(task_id) = outcome.task_id() else { continue };
                let task_id = task_id.to_string();
                *busy_cycles.entry(task_id.clone()).or_default() += 1;

                if let ProcessorOutcome::Completed { .. } = outcome {
                    assert!(completed.insert(task_id.clone()), "{} completed twice", task_id);
                    assert_eq!(busy_cycles[&task_id], by_id[&task_id].execution_time());
                } else {
                    running_now.insert(task_id.clone());
                }

                // Newly dispatched tasks must outrank everything left waiting.
                if !previously_running.contains(&task_id) {
                    let dispatched = &by_id[&task_id];
                    for still_waiting in sim.scheduler().waiting_tasks() {
                        assert!(
                            (dispatched.priority(), std::cmp::Reverse(dispatched.execution_time()))
                                <= (still_waiting.priority(), std::cmp::Reverse(still_waiting.execution_time())),
                            "{} dispatched ahead of better task {}",
                            still_waiting.id(),
                            dispatched.id()
                        );
                    }
                }
            }

            // Idle processors only when nothing is waiting.
            let idle = report.outcomes.iter().filter(|o| o.task_id().is_none()).count();
            if idle > 0 {
                assert_eq!(sim.scheduler().waiting_len(), 0);
            }

            assert!(waiting_before.len() + report.arrivals.len() >= sim.scheduler().waiting_len());
            previously_running = running_now;
        }

        assert_eq!(sim.current_cycle(), cycles as u64);
    }
}

#[test]
fn test_observer_trait_object_can_drive_run() {
    let mut sim = simulator(1, 2, "1\n1 1 1\n");
    let mut console: Box<dyn CycleObserver> = Box::new(ConsoleReporter::new(std::io::sink()));

    assert!(sim.run(console.as_mut()).is_ok());
    assert!(sim.is_finished());
}
