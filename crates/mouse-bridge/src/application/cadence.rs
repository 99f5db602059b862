//! Send-cadence drivers for channel-fed input sources.
//!
//! The global hook delivers [`PointerEvent`]s from its own thread over an
//! unbounded channel.  The driver below is the only owner of the
//! [`Forwarder`] (and therefore of the input state), so every event is applied
//! whole before the next send reads the state.
//!
//! Two strategies:
//!
//! - [`Cadence::OnEvent`] – apply and send on every event.  The send rate is
//!   bounded only by the input event rate.
//! - [`Cadence::FixedRate`] – apply events as they arrive, send once per
//!   tick.  Missed ticks are skipped, not replayed, and the wheel is drained
//!   on every tick.
//!
//! Both return when the shutdown flag is cleared or when the source hangs up.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use mouse_bridge_core::PointerEvent;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use super::forward::{DatagramSink, Forwarder};
use super::StopReason;
use crate::domain::Cadence;

/// How often the event-driven driver checks the shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Runs the selected cadence until shutdown or until the source closes.
pub async fn drive<S: DatagramSink>(
    mut events: mpsc::UnboundedReceiver<PointerEvent>,
    forwarder: &mut Forwarder<S>,
    cadence: Cadence,
    running: Arc<AtomicBool>,
) -> StopReason {
    debug!("cadence driver started: {cadence:?}");
    let reason = match cadence.tick_period() {
        None => drive_on_event(&mut events, forwarder, &running).await,
        Some(period) => drive_fixed_rate(&mut events, forwarder, period, &running).await,
    };
    debug!("cadence driver stopped: {reason}");
    reason
}

async fn drive_on_event<S: DatagramSink>(
    events: &mut mpsc::UnboundedReceiver<PointerEvent>,
    forwarder: &mut Forwarder<S>,
    running: &AtomicBool,
) -> StopReason {
    let mut shutdown_check = time::interval(SHUTDOWN_POLL);
    shutdown_check.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => {
                    forwarder.forward(event);
                }
                None => return StopReason::SourceClosed,
            },
            _ = shutdown_check.tick() => {
                if !running.load(Ordering::Relaxed) {
                    return StopReason::Interrupted;
                }
            }
        }
    }
}

async fn drive_fixed_rate<S: DatagramSink>(
    events: &mut mpsc::UnboundedReceiver<PointerEvent>,
    forwarder: &mut Forwarder<S>,
    period: Duration,
    running: &AtomicBool,
) -> StopReason {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => forwarder.apply(event),
                None => return StopReason::SourceClosed,
            },
            _ = ticker.tick() => {
                if !running.load(Ordering::Relaxed) {
                    return StopReason::Interrupted;
                }
                forwarder.flush();
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mouse_bridge_core::{
        decode_packet, CoordinateMapper, LogicalGrid, MouseButton, PacketFormat, Resolution,
    };
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingSink {
        payloads: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSink {
        fn payloads(&self) -> Vec<String> {
            self.payloads.lock().unwrap().clone()
        }
    }

    impl DatagramSink for RecordingSink {
        fn send(&self, payload: &[u8]) -> io::Result<()> {
            self.payloads
                .lock()
                .unwrap()
                .push(String::from_utf8(payload.to_vec()).unwrap());
            Ok(())
        }
    }

    fn forwarder(format: PacketFormat) -> (Forwarder<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        let mapper = CoordinateMapper::new(Resolution::new(1920, 1080), LogicalGrid::PEER);
        (Forwarder::new(mapper, format, sink.clone()), sink)
    }

    // ── Event-driven ──────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_on_event_sends_one_datagram_per_event() {
        // Arrange
        let (mut fwd, sink) = forwarder(PacketFormat::Basic);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(PointerEvent::Move { x: 960, y: 540 }).unwrap();
        tx.send(PointerEvent::Button {
            button: MouseButton::Left,
            pressed: true,
        })
        .unwrap();
        tx.send(PointerEvent::Button {
            button: MouseButton::Left,
            pressed: false,
        })
        .unwrap();
        drop(tx);

        // Act
        let reason = drive(rx, &mut fwd, Cadence::OnEvent, Arc::new(AtomicBool::new(true))).await;

        // Assert
        assert_eq!(reason, StopReason::SourceClosed);
        assert_eq!(sink.payloads(), vec!["160,120,0", "160,120,1", "160,120,0"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_on_event_basic_format_does_not_resend_on_scroll() {
        // Arrange
        let (mut fwd, sink) = forwarder(PacketFormat::Basic);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(PointerEvent::Move { x: 960, y: 540 }).unwrap();
        tx.send(PointerEvent::Wheel { delta: 1 }).unwrap();
        tx.send(PointerEvent::Wheel { delta: 1 }).unwrap();
        drop(tx);

        // Act
        drive(rx, &mut fwd, Cadence::OnEvent, Arc::new(AtomicBool::new(true))).await;

        // Assert
        assert_eq!(sink.payloads(), vec!["160,120,0"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_on_event_stops_when_running_flag_cleared() {
        // Arrange: the sender stays alive, so only the flag can stop the driver
        let (mut fwd, sink) = forwarder(PacketFormat::Basic);
        let (_tx, rx) = mpsc::unbounded_channel::<PointerEvent>();
        let running = Arc::new(AtomicBool::new(false));

        // Act
        let reason = drive(rx, &mut fwd, Cadence::OnEvent, running).await;

        // Assert
        assert_eq!(reason, StopReason::Interrupted);
        assert!(sink.payloads().is_empty());
    }

    // ── Fixed-rate ────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_fixed_rate_sends_wheel_once_then_zero() {
        // Arrange
        let (fwd, sink) = forwarder(PacketFormat::WithWheel);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(PointerEvent::Wheel { delta: -1 }).unwrap();
        tx.send(PointerEvent::Wheel { delta: -2 }).unwrap();
        let running = Arc::new(AtomicBool::new(true));
        let cadence = Cadence::FixedRate { hz: 60 };
        let period = cadence.tick_period().unwrap();

        let task = tokio::spawn(async move {
            let mut fwd = fwd;
            let reason = drive(rx, &mut fwd, cadence, running).await;
            (reason, fwd.stats())
        });

        // Act – let several ticks elapse, then hang up the source
        time::sleep(period * 4).await;
        drop(tx);
        let (reason, stats) = task.await.unwrap();

        // Assert
        assert_eq!(reason, StopReason::SourceClosed);
        let wheels: Vec<i32> = sink
            .payloads()
            .iter()
            .map(|p| decode_packet(p.as_bytes()).unwrap().0.wheel_delta)
            .collect();
        assert!(wheels.len() >= 3, "expected several ticks, got {wheels:?}");
        assert_eq!(wheels.iter().sum::<i32>(), -3, "wheel must be reported exactly once");
        assert_eq!(*wheels.last().unwrap(), 0, "idle tick must report zero");
        assert_eq!(stats.sent as usize, wheels.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_rate_sends_latest_position_only() {
        // Arrange: three moves land between two ticks
        let (fwd, sink) = forwarder(PacketFormat::Basic);
        let (tx, rx) = mpsc::unbounded_channel();
        let running = Arc::new(AtomicBool::new(true));
        let cadence = Cadence::FixedRate { hz: 10 };
        let period = cadence.tick_period().unwrap();

        let task = tokio::spawn(async move {
            let mut fwd = fwd;
            drive(rx, &mut fwd, cadence, running).await
        });

        // Act
        time::sleep(period / 2).await;
        tx.send(PointerEvent::Move { x: 0, y: 0 }).unwrap();
        tx.send(PointerEvent::Move { x: 960, y: 540 }).unwrap();
        tx.send(PointerEvent::Move { x: 1919, y: 1079 }).unwrap();
        time::sleep(period).await;
        drop(tx);
        task.await.unwrap();

        // Assert – no intermediate positions were sent
        let payloads = sink.payloads();
        assert!(payloads.contains(&"319,239,0".to_string()));
        assert!(!payloads.contains(&"160,120,0".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_rate_stops_on_cleared_flag() {
        let (mut fwd, sink) = forwarder(PacketFormat::Basic);
        let (_tx, rx) = mpsc::unbounded_channel::<PointerEvent>();

        let reason = drive(
            rx,
            &mut fwd,
            Cadence::FixedRate { hz: 60 },
            Arc::new(AtomicBool::new(false)),
        )
        .await;

        assert_eq!(reason, StopReason::Interrupted);
        assert!(sink.payloads().is_empty());
    }
}
