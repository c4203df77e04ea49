use crate::events::{DialEvent, DialUpdate};
use crate::timeline::Timeline;
use async_channel::{Receiver, Sender};
use tokio::runtime::Builder;

/// Feeds events into the timeline one at a time, in arrival order, and
/// forwards the resulting updates. Stops on `Teardown`, when the event
/// source closes, or when nobody listens for updates anymore. A drag that is
/// still live at that point is released.
pub async fn run_event_loop(
    mut timeline: Timeline,
    rx: Receiver<DialEvent>,
    tx: Sender<DialUpdate>,
) -> Timeline {
    while let Ok(event) = rx.recv().await {
        let teardown = matches!(event, DialEvent::Teardown);

        for update in timeline.handle(event) {
            if tx.send(update).await.is_err() {
                log::debug!("update receiver closed");
                timeline.handle(DialEvent::Teardown);
                return timeline;
            }
        }

        if teardown {
            return timeline;
        }
    }

    log::debug!("event source closed");
    for update in timeline.handle(DialEvent::Teardown) {
        if tx.send(update).await.is_err() {
            break;
        }
    }
    timeline
}

/// Runs the event loop to completion on a single-threaded runtime.
pub fn run_blocking(
    timeline: Timeline,
    rx: Receiver<DialEvent>,
    tx: Sender<DialUpdate>,
) -> std::io::Result<Timeline> {
    let rt = Builder::new_current_thread().enable_all().build()?;
    Ok(rt.block_on(run_event_loop(timeline, rx, tx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dial::{PointerChannel, PointerHub};
    use crate::geometry::Bounds;
    use bento::Month;

    fn drag_events(angle: f64) -> Vec<DialEvent> {
        let bounds = Bounds::new(0.0, 0.0, 300.0, 300.0);
        vec![
            DialEvent::PointerDown,
            DialEvent::PointerMove {
                position: bounds.point_at(angle, 120.0),
                bounds: Some(bounds),
            },
        ]
    }

    #[test]
    fn test_processes_events_in_order() {
        let (event_tx, event_rx) = async_channel::unbounded();
        let (update_tx, update_rx) = async_channel::unbounded();

        for event in drag_events(245.0) {
            event_tx.send_blocking(event).unwrap();
        }
        event_tx.send_blocking(DialEvent::PointerUp).unwrap();
        event_tx.send_blocking(DialEvent::Teardown).unwrap();

        let timeline = Timeline::new(&Config::default(), PointerHub::new());
        let timeline = run_blocking(timeline, event_rx, update_tx).unwrap();

        assert_eq!(timeline.dial().month(), Month::Aug);
        assert_eq!(timeline.dial().angle(), 240.0);

        let updates: Vec<DialUpdate> = std::iter::from_fn(|| update_rx.try_recv().ok()).collect();
        assert!(matches!(updates.last(), Some(DialUpdate::Rotation(a)) if *a == 240.0));
        assert!(
            updates
                .iter()
                .any(|u| matches!(u, DialUpdate::Month(v) if v.month == Month::Aug))
        );
    }

    #[test]
    fn test_closed_source_releases_live_drag() {
        let (event_tx, event_rx) = async_channel::unbounded();
        let (update_tx, _update_rx) = async_channel::unbounded();

        for event in drag_events(100.0) {
            event_tx.send_blocking(event).unwrap();
        }
        drop(event_tx);

        let hub = PointerHub::new();
        let timeline = Timeline::new(&Config::default(), hub.clone());
        let timeline = run_blocking(timeline, event_rx, update_tx).unwrap();

        assert!(!timeline.dial().is_dragging());
        assert_eq!(timeline.dial().angle(), 90.0);
        assert!(!hub.is_listening(PointerChannel::Move));
    }
}
