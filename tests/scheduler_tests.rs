//! End-to-end scheduler behaviour through the public API, with an in-memory backend
//! and injected time.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use duskswitch::backend::ThemeProperty;
use duskswitch::backend::memory::MemoryBackend;
use duskswitch::config::{self, Config};
use duskswitch::core::{Core, CoreParams, SchedulerState};
use duskswitch::geo::{Location, TransitionKind};
use duskswitch::io::lock::InstanceLock;
use duskswitch::io::signals::SignalMessage;
use duskswitch::theme::Mode;
use duskswitch::time_source::FixedTimeSource;
use duskswitch::{Duskswitch, logger::Log};
use std::sync::mpsc::{Sender, channel};
use std::thread;
use tempfile::tempdir;

fn istanbul(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

fn new_core(
    config: Config,
    backend: MemoryBackend,
    now: DateTime<FixedOffset>,
) -> (Core, Sender<SignalMessage>) {
    let (sender, receiver) = channel();
    let core = Core::new(CoreParams {
        backend: Box::new(backend),
        config,
        shutdown_receiver: receiver,
        time_source: Box::new(FixedTimeSource::new(now)),
        debug_enabled: false,
    });
    (core, sender)
}

/// Drive the loop for two simulated days, sleeping exactly as the scheduler asks.
#[test]
fn test_two_days_switch_four_times_just_after_each_transition() {
    Log::set_enabled(false);

    let config = Config::default();
    let calculator = config.calculator();
    let start = istanbul(2024, 3, 20, 0, 0);
    let end = start + Duration::hours(48);
    let (mut core, _tx) = new_core(config, MemoryBackend::new(), start);

    let mut now = start;
    let mut changes = Vec::new();
    let mut expected_next = calculator.next_transition(&now);

    while now < end {
        let tick = core.tick(now);
        assert!(tick.apply_result.is_ok());

        if tick.mode_changed && now != start {
            let transition = expected_next.expect("a change implies a transition");
            let lag = now.to_utc() - transition.at;
            assert!(
                lag >= Duration::zero() && lag <= Duration::seconds(10),
                "switched {lag} after the {:?} at {}",
                transition.kind,
                transition.at
            );
            changes.push((tick.mode, transition.kind));
        }

        expected_next = tick.next_transition;
        now += Duration::from_std(tick.sleep).unwrap();
    }

    assert_eq!(
        changes,
        vec![
            (Mode::Day, TransitionKind::Sunrise),
            (Mode::Night, TransitionKind::Sunset),
            (Mode::Day, TransitionKind::Sunrise),
            (Mode::Night, TransitionKind::Sunset),
        ]
    );
}

#[test]
fn test_polar_night_keeps_polling_without_errors() {
    Log::set_enabled(false);

    let config = Config {
        location: Location::new(75.0, 15.0).unwrap(),
        check_interval: 10,
        ..Config::default()
    };
    let start = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2024, 12, 21, 0, 0, 0)
        .unwrap();
    let (mut core, _tx) = new_core(config, MemoryBackend::new(), start);

    let mut now = start;
    for i in 0..144 {
        let tick = core.tick(now);
        assert_eq!(tick.mode, Mode::Night);
        assert_eq!(tick.mode_changed, i == 0);
        assert!(tick.apply_result.is_ok());
        assert_eq!(tick.sleep, std::time::Duration::from_secs(600));
        now += Duration::from_std(tick.sleep).unwrap();
    }
}

#[test]
fn test_failing_property_is_retried_every_tick() {
    Log::set_enabled(false);

    let backend = MemoryBackend::new().fail_on(ThemeProperty::Icon);
    let start = istanbul(2024, 6, 21, 12, 0);
    let (mut core, _tx) = new_core(Config::default(), backend, start);

    for step in 0..3 {
        let tick = core.tick(start + Duration::minutes(5 * step));
        let err = tick.apply_result.unwrap_err();
        assert_eq!(err.failed_properties(), vec![ThemeProperty::Icon]);
        assert_eq!(core.state(), SchedulerState::Running);
    }
}

#[test]
fn test_shutdown_message_interrupts_the_sleep() {
    Log::set_enabled(false);

    let (mut core, tx) = new_core(
        Config::default(),
        MemoryBackend::new(),
        istanbul(2024, 6, 21, 12, 0),
    );

    let sender = thread::spawn(move || {
        thread::sleep(std::time::Duration::from_millis(100));
        tx.send(SignalMessage::Shutdown { signal: 15 }).unwrap();
    });

    let started = std::time::Instant::now();
    core.run();
    sender.join().unwrap();

    assert_eq!(core.state(), SchedulerState::Terminated);
    assert_eq!(core.previous_mode(), Some(Mode::Day));
    // The configured sleep is five minutes; the message must cut it short.
    assert!(started.elapsed() < std::time::Duration::from_secs(30));
}

#[test]
fn test_second_daemon_is_refused_while_lock_is_held() {
    Log::set_enabled(false);

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("duskswitch.toml");
    config::create_default_config(&config_path).unwrap();
    let lock_path = dir.path().join("duskswitch.lock");
    let held = InstanceLock::acquire(&lock_path).unwrap();

    let err = Duskswitch::new(false)
        .with_config_path(Some(config_path))
        .with_lock_path(lock_path)
        .without_headers()
        .run()
        .unwrap_err();

    assert!(err.to_string().contains("already running"));
    assert!(err.to_string().contains(&std::process::id().to_string()));
    held.release().unwrap();
}

#[test]
fn test_daemon_without_config_suggests_init() {
    Log::set_enabled(false);

    let dir = tempdir().unwrap();
    let err = Duskswitch::new(false)
        .with_config_path(Some(dir.path().join("missing.toml")))
        .without_lock()
        .without_headers()
        .run()
        .unwrap_err();

    assert!(format!("{err:#}").contains("duskswitch init"));
}
