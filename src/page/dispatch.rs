//! Event dispatch and action execution.
//!
//! Dispatch is two-phase: collect the actions of every matching listener,
//! then execute them in registration order. Collecting first keeps the
//! listener table stable while actions mutate the tree.

use super::{Page, TimerAction};
use crate::core::Layer;
use crate::dom::NodeId;
use crate::event::{Action, DispatchOutcome, Key, PageEvent};
use crate::host::{ScrollBehavior, ScrollRequest};
use crate::log;

impl Page {
    /// Deliver an event to the page.
    pub fn dispatch(&mut self, event: PageEvent) -> DispatchOutcome {
        let actions: Vec<Action> = self
            .listeners
            .iter()
            .filter(|listener| listener.matches(&event))
            .map(|listener| listener.action.clone())
            .collect();

        let mut outcome = DispatchOutcome::default();
        for action in actions {
            self.perform(&action, &event, &mut outcome);
        }
        outcome
    }

    fn perform(&mut self, action: &Action, event: &PageEvent, outcome: &mut DispatchOutcome) {
        match action {
            Action::CopyBlock { block, control } => self.copy_block(*block, *control),
            Action::SetOpacity { target, value } => self.doc.set_style(*target, "opacity", value),
            Action::FollowFragment { anchor } => self.follow_fragment(*anchor, outcome),
            Action::SearchShortcut => self.search_shortcut(event, outcome),
            Action::ObserveIntent { input } => self.observe_intent(*input),
        }
    }

    // -------------------------------------------------------------------------
    // Copy control
    // -------------------------------------------------------------------------

    fn copy_block(&mut self, block: NodeId, control: NodeId) {
        let text = self.doc.text_content(block);
        match self.host.clipboard.write_text(&text) {
            Ok(()) => {
                let copied = self.config.copy.copied_label.clone();
                let resting = self.config.copy.resting_label.clone();
                let revert_ms = self.config.copy.revert_ms;
                self.doc.set_text(control, &copied);
                // One timer per activation; an earlier one keeps running.
                self.schedule_in(
                    revert_ms,
                    TimerAction::SetLabel {
                        target: control,
                        label: resting,
                    },
                );
            }
            // Write failures are not surfaced; the label stays at rest.
            Err(_) => {}
        }
    }

    // -------------------------------------------------------------------------
    // Anchor navigation
    // -------------------------------------------------------------------------

    fn follow_fragment(&mut self, anchor: NodeId, outcome: &mut DispatchOutcome) {
        let Some(fragment) = self
            .doc
            .element(anchor)
            .and_then(|el| el.attr("href"))
            .and_then(|href| href.strip_prefix('#'))
            .map(str::to_owned)
        else {
            return;
        };

        // Unresolvable targets fail open: default stays, history untouched.
        let Some(target) = self.doc.element_by_id(&fragment) else {
            return;
        };

        outcome.default_prevented = true;

        let behavior = if self.config.anchor.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        };
        self.host.scroller.scroll_into_view(ScrollRequest {
            target,
            fragment: fragment.clone(),
            behavior,
        });
        self.host.history.push_fragment(&fragment);
    }

    // -------------------------------------------------------------------------
    // Search shortcuts
    // -------------------------------------------------------------------------

    fn search_shortcut(&mut self, event: &PageEvent, outcome: &mut DispatchOutcome) {
        let PageEvent::KeyDown { press } = event else {
            return;
        };

        if press.accelerator(self.platform) && press.key == Key::Char('k') {
            // Default is suppressed whether or not an input is found.
            outcome.default_prevented = true;
            if let Some(input) = self.search_input() {
                self.focus(input);
            }
        } else if press.key == Key::Escape
            && let Some(input) = self.search_input()
            && self.focused == Some(input)
        {
            self.blur();
        }
    }

    fn observe_intent(&mut self, input: NodeId) {
        let Some(query) = self
            .doc
            .element(input)
            .and_then(|el| el.attr("value"))
            .map(str::to_owned)
        else {
            return;
        };
        // Advisory signal only: never touches the query or the results.
        if let Some(layer) = Layer::classify_intent(&query) {
            log!("search"; "searching in {} layer", layer.name());
        }
    }
}
