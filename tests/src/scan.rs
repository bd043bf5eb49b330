#![cfg(test)]
use std::collections::HashSet;

use iotscan_common::config::ScanTiming;
use iotscan_common::device::Device;
use iotscan_common::error::SessionError;
use iotscan_common::vulnerability::Severity;
use iotscan_core::random::SeededRandom;
use iotscan_core::scanner::{self, DeviceScanner, ScanEvent, SimulatedScanner};
use iotscan_core::session::{ScanPhase, ScanSession};

use crate::support::{self, ScriptedRandom};

/// Drives a scan into a session the way the terminal front end does.
async fn run_into_session(simulator: &mut SimulatedScanner) -> (ScanSession, Vec<ScanEvent>, Vec<Device>) {
    let mut session = ScanSession::new();
    session.start().expect("fresh session starts");
    let mut seen: Vec<ScanEvent> = Vec::new();

    let (tx, mut rx) = scanner::event_channel();
    let consume = async {
        while let Some(event) = rx.recv().await {
            assert_eq!(session.start(), Err(SessionError::ScanInProgress));
            seen.push(event.clone());
            let done = matches!(event, ScanEvent::ScanCompleted(_));
            session.apply(event).expect("event accepted while scanning");
            if done {
                break;
            }
        }
    };
    let (devices, ()) = tokio::join!(simulator.scan(tx), consume);

    (session, seen, devices)
}

fn progress_values(events: &[ScanEvent]) -> Vec<f64> {
    events
        .iter()
        .filter_map(|event| match event {
            ScanEvent::ProgressUpdated { percent } => Some(*percent),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn completed_scans_hold_every_invariant() {
    for seed in 0..32 {
        let mut scanner =
            SimulatedScanner::new(ScanTiming::default(), Box::new(SeededRandom::new(seed)));

        let (session, events, devices) = run_into_session(&mut scanner).await;

        assert_eq!(session.phase(), ScanPhase::Completed);
        assert_eq!(session.devices(), devices.as_slice());

        let ids: HashSet<&str> = devices.iter().map(Device::id).collect();
        assert_eq!(ids.len(), devices.len(), "seed {seed} produced duplicates");
        assert!((2..=5).contains(&devices.len()));

        let addresses: Vec<String> = devices.iter().map(|d| d.ip().to_string()).collect();
        let mut sorted = addresses.clone();
        sorted.sort();
        assert_eq!(addresses, sorted);

        let progress = progress_values(&events);
        assert_eq!(progress.len(), 20);
        assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(progress.last(), Some(&100.0));

        let completed_at = events
            .iter()
            .position(|e| matches!(e, ScanEvent::ScanCompleted(_)))
            .expect("completion event");
        assert_eq!(completed_at, events.len() - 1);
        let announced: HashSet<String> = events[..completed_at]
            .iter()
            .filter_map(|e| match e {
                ScanEvent::DeviceDiscovered(device) => Some(device.id().to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(announced.len(), devices.len());

        for device in &devices {
            let max = device.vulnerabilities().iter().map(|v| v.severity).max();
            assert_eq!(Some(device.risk()), max);
            assert!(device.open_ports().contains(&80) && device.open_ports().contains(&443));
            let ports: Vec<u16> = device.open_ports().iter().copied().collect();
            assert!(ports.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[tokio::test(start_paused = true)]
async fn forced_camera_findings() {
    // Shuffle picks of 0 leave [router, camera, ...]; two devices are kept and
    // the camera is popped first, on the first tick.
    let mut random = ScriptedRandom::default();
    random.picks.extend([0, 0, 0, 0, 0, 0, 0]);
    random.chances.extend([true, true, true, false, false]);
    let mut scanner = SimulatedScanner::new(ScanTiming::default(), Box::new(random));
    let (tx, mut rx) = tokio::sync::mpsc::channel(64);

    let devices = scanner.scan(tx).await;
    let events = support::drain(&mut rx);

    let camera = match &events[0] {
        ScanEvent::DeviceDiscovered(device) => device.clone(),
        other => panic!("expected discovery first, got {other:?}"),
    };
    assert_eq!(events[1], ScanEvent::ProgressUpdated { percent: 5.0 });
    assert_eq!(camera.ip().to_string(), "192.168.1.110");
    assert_eq!(camera.vendor(), "Wyze Labs");
    assert_eq!(camera.risk(), Severity::High);
    assert_eq!(
        camera.open_ports().iter().copied().collect::<Vec<u16>>(),
        vec![22, 23, 80, 443]
    );

    assert_eq!(devices.len(), 2);
    let router = &devices[0];
    assert_eq!(router.ip().to_string(), "192.168.1.105");
    assert_eq!(router.risk(), Severity::Low);
    assert_eq!(router.vulnerabilities().len(), 1);
    assert_eq!(router.vulnerabilities()[0].name, "Standard Ports Open");
    assert_eq!(devices[1], camera);
}

#[tokio::test(start_paused = true)]
async fn session_can_rescan_after_completion() {
    let mut first = SimulatedScanner::new(ScanTiming::default(), Box::new(SeededRandom::new(11)));
    let (mut session, _, _) = run_into_session(&mut first).await;

    session.start().expect("restart after completion");
    assert!(session.devices().is_empty());
    assert_eq!(session.status_line(), "Scanning Network... (0%)");
}
