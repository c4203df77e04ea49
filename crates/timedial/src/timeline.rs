use crate::config::Config;
use crate::dial::{DialAction, DialController, PointerChannel, PointerHub};
use crate::events::{DialEvent, DialUpdate};
use bento::{MonthView, YearPicker};

/// The dial plus everything derived from its selection.
pub struct Timeline {
    dial: DialController,
    view: MonthView,
    years: YearPicker,
}

impl Timeline {
    pub fn new(config: &Config, hub: PointerHub) -> Self {
        let month = config.dial.initial_month;
        Self {
            dial: DialController::with_month(hub, month),
            view: bento::generate(month),
            years: YearPicker::new(config.timeline.year),
        }
    }

    pub fn dial(&self) -> &DialController {
        &self.dial
    }

    pub fn view(&self) -> &MonthView {
        &self.view
    }

    pub fn years(&self) -> &YearPicker {
        &self.years
    }

    pub fn handle(&mut self, event: DialEvent) -> Vec<DialUpdate> {
        if event.is_drag_tracking() && !self.listening_for(&event) {
            log::trace!("no drag listener for {:?}", event);
            return Vec::new();
        }

        match event {
            DialEvent::PointerDown => {
                let action = self.dial.begin_drag();
                self.apply(action)
            }
            DialEvent::PointerMove { position, bounds } => {
                let action = self.dial.pointer_moved(position, bounds);
                self.apply(action)
            }
            DialEvent::PointerUp => {
                let action = self.dial.end_drag();
                self.apply(action)
            }
            DialEvent::ToggleYearMenu => vec![DialUpdate::YearMenu(self.years.toggle())],
            DialEvent::SelectYear { year } => match self.years.select(year) {
                Ok(()) => vec![DialUpdate::Year(year), DialUpdate::YearMenu(false)],
                Err(e) => {
                    log::warn!("{}", e);
                    Vec::new()
                }
            },
            DialEvent::Teardown => {
                let action = self.dial.teardown();
                self.apply(action)
            }
        }
    }

    fn listening_for(&self, event: &DialEvent) -> bool {
        let channel = match event {
            DialEvent::PointerUp => PointerChannel::Up,
            _ => PointerChannel::Move,
        };
        self.dial.hub().is_listening(channel)
    }

    fn apply(&mut self, action: DialAction) -> Vec<DialUpdate> {
        let mut updates = Vec::new();
        if action.should_redraw {
            updates.push(DialUpdate::Rotation(self.dial.angle()));
        }
        if let Some(month) = action.committed {
            self.view = bento::generate(month);
            updates.push(DialUpdate::Month(self.view.clone()));
        }
        updates
    }
}
