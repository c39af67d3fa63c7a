use chrono::NaiveDate;

use mg_core::{CoreError, FixedClock, MachineKind, ReadingMetric, StatusMode};
use mg_machines::{generate_readings, Machine, MachineBehavior, MachineFactory};

const INVALID_STATUSES: [&str; 6] = ["", "Idle", "running", "offline", " active", "error "];

fn fresh(kind: &str) -> Machine {
    MachineFactory::default()
        .create_machine(kind)
        .expect("valid kind")
}

#[test]
fn valid_kinds_get_fixed_first_ids() {
    for (kind, id) in [("jet_printer", "A1"), ("conveyor", "C1")] {
        let machine = fresh(kind);
        assert_eq!(machine.kind().as_str(), kind);
        assert_eq!(machine.id(), id);
    }
}

#[test]
fn invalid_kinds_return_diagnostic() {
    let mut factory = MachineFactory::default();
    for kind in ["widget", "", "Conveyor", "jet-printer", "jet_printer "] {
        match factory.create_machine(kind) {
            Err(CoreError::UnknownKind { given, available }) => {
                assert_eq!(given, kind);
                assert!(available.contains("jet_printer"));
                assert!(available.contains("conveyor"));
            }
            other => panic!("expected UnknownKind for {kind:?}, got {other:?}"),
        }
    }
}

#[test]
fn widget_message_names_missing_type() {
    let err = MachineFactory::default().create_machine("widget").unwrap_err();
    assert!(err.to_string().contains("Machine type not found"));
}

#[test]
fn valid_statuses_round_trip() {
    for kind in MachineKind::ALL {
        let mut machine = fresh(kind.as_str());
        for mode in StatusMode::ALL {
            assert_eq!(machine.set_status(mode.as_str()).unwrap(), mode);
            assert_eq!(machine.status().unwrap(), mode);
        }
    }
}

#[test]
fn invalid_statuses_leave_prior_value() {
    let mut machine = fresh("conveyor");
    for bad in INVALID_STATUSES {
        assert!(machine.set_status(bad).is_err());
        assert!(matches!(machine.status(), Err(CoreError::StatusUnset { .. })));
    }
    machine.set_status("maintenance").unwrap();
    for bad in INVALID_STATUSES {
        assert!(machine.set_status(bad).is_err());
        assert_eq!(machine.status().unwrap(), StatusMode::Maintenance);
    }
}

#[test]
fn reading_reflects_status_for_every_variant() {
    for kind in MachineKind::ALL {
        let mut machine = fresh(kind.as_str());
        machine.set_status("error").unwrap();
        assert_eq!(machine.generate_reading().status, Some(StatusMode::Error));
    }
}

#[test]
fn metric_tracks_last_setter_call() {
    let mut printer = fresh("jet_printer");
    let jet = printer.as_jet_printer_mut().unwrap();
    jet.set_temperature("80");
    jet.set_temperature("112");
    assert_eq!(
        printer.generate_reading().metric,
        ReadingMetric::Temperature { temperature: "112".to_string() }
    );

    let mut conveyor = fresh("conveyor");
    conveyor.as_conveyor_mut().unwrap().set_speed("3");
    conveyor.set_metric("7");
    assert_eq!(
        conveyor.generate_reading().metric,
        ReadingMetric::Speed { speed: "7".to_string() }
    );
}

#[test]
fn consecutive_readings_differ_only_in_time() {
    let mut machine = fresh("jet_printer");
    machine.set_status("active").unwrap();
    machine.set_metric("99");
    let first = machine.generate_reading();
    let second = machine.generate_reading();
    assert!(first.same_state_as(&second));
    assert!(second.timestamp >= first.timestamp);
    assert_eq!(machine.status().unwrap(), StatusMode::Active);
}

#[test]
fn demonstration_scenario_readings() {
    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(7, 45, 30)
            .unwrap(),
    );
    let mut factory = MachineFactory::default();

    let mut printer = factory.create_machine("jet_printer").unwrap();
    printer.set_status("idle").unwrap();
    printer.as_jet_printer_mut().unwrap().set_temperature("105");

    let mut conveyor = factory.create_machine("conveyor").unwrap();
    conveyor.set_status("active").unwrap();
    conveyor.as_conveyor_mut().unwrap().set_speed("5");

    let readings = generate_readings(&[printer, conveyor], &clock);
    let values: Vec<serde_json::Value> = readings
        .iter()
        .map(|r| serde_json::to_value(r).unwrap())
        .collect();
    assert_eq!(
        values[0],
        serde_json::json!({
            "id": "A1",
            "kind": "jet_printer",
            "timestamp": "2025-01-15 07:45:30",
            "status": "idle",
            "temperature": "105",
        })
    );
    assert_eq!(
        values[1],
        serde_json::json!({
            "id": "C1",
            "kind": "conveyor",
            "timestamp": "2025-01-15 07:45:30",
            "status": "active",
            "speed": "5",
        })
    );
}
