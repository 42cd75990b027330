//! Selection state and its publish/subscribe store.
//!
//! The store owns the single mutable [`RenderState`]. `publish` merges a
//! partial update and then synchronously invokes every subscriber — in
//! subscription order — with the complete new state, never a partially
//! merged one. All of this is single-threaded by design; renders triggered
//! from a subscriber run to completion before `publish` returns.

use std::rc::Rc;

use crate::config::{ExplorerConfig, Setting, SettingValue, PLAY_ANIMATIONS, SHOW_DATA_POINTS};

/// Per-curve selection: toggled on/off plus the raw shape parameter value
/// (for variants that have one).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSelection {
    pub active: bool,
    pub value: Option<f64>,
}

/// The complete current selection.
///
/// Raw dataset parameter values are kept per generator so switching datasets
/// preserves earlier edits. The renderer only ever reads snapshots of this.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub active_dataset: usize,
    pub dataset_values: Vec<Vec<f64>>,
    pub curves: Vec<CurveSelection>,
    pub settings: Vec<Setting>,
}

impl RenderState {
    /// Defaults derived from the injected configuration.
    pub fn with_defaults(config: &ExplorerConfig) -> Self {
        Self {
            active_dataset: 0,
            dataset_values: config
                .generators
                .iter()
                .map(|g| g.default_values())
                .collect(),
            curves: config
                .curves
                .iter()
                .map(|c| CurveSelection {
                    active: false,
                    value: c.params.first().map(|p| p.default),
                })
                .collect(),
            settings: config.settings.clone(),
        }
    }

    pub fn setting(&self, name: &str) -> Option<&SettingValue> {
        self.settings
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.value)
    }

    pub fn play_animations(&self) -> bool {
        self.setting(PLAY_ANIMATIONS)
            .and_then(SettingValue::as_bool)
            .unwrap_or(true)
    }

    pub fn show_data_points(&self) -> bool {
        self.setting(SHOW_DATA_POINTS)
            .and_then(SettingValue::as_bool)
            .unwrap_or(true)
    }

    /// Raw parameter values of the active dataset.
    pub fn active_values(&self) -> &[f64] {
        &self.dataset_values[self.active_dataset]
    }
}

/// A partial update merged into the state by [`StateStore::publish`].
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    /// Exclusive dataset selection.
    SelectDataset(usize),
    /// Set one raw parameter value of one dataset.
    SetDatasetValue {
        dataset: usize,
        param: usize,
        value: f64,
    },
    /// Toggle one curve on or off.
    SetCurveActive { curve: usize, active: bool },
    /// Set one curve's raw shape parameter value.
    SetCurveValue { curve: usize, value: f64 },
    SelectAllCurves,
    SelectNoCurves,
    SetSetting { name: String, value: SettingValue },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionHandle(u64);

type Subscriber = Box<dyn FnMut(&RenderState)>;

pub struct StateStore {
    config: Rc<ExplorerConfig>,
    state: RenderState,
    subscribers: Vec<(u64, Subscriber)>,
    next_id: u64,
}

impl StateStore {
    pub fn new(config: Rc<ExplorerConfig>) -> Self {
        let state = RenderState::with_defaults(&config);
        Self {
            config,
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&RenderState) + 'static) -> SubscriptionHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        SubscriptionHandle(id)
    }

    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.subscribers.retain(|(id, _)| *id != handle.0);
    }

    /// Merge `update` into the state, then notify every subscriber with the
    /// complete new state.
    pub fn publish(&mut self, update: StateUpdate) {
        self.apply(update);
        let snapshot = &self.state;
        for (_, callback) in &mut self.subscribers {
            callback(snapshot);
        }
    }

    fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::SelectDataset(index) => {
                if index < self.state.dataset_values.len() {
                    self.state.active_dataset = index;
                }
            }
            StateUpdate::SetDatasetValue {
                dataset,
                param,
                value,
            } => {
                if let Some(values) = self.state.dataset_values.get_mut(dataset) {
                    if let Some(slot) = values.get_mut(param) {
                        *slot = value;
                    }
                }
            }
            StateUpdate::SetCurveActive { curve, active } => {
                if let Some(sel) = self.state.curves.get_mut(curve) {
                    sel.active = active;
                }
            }
            StateUpdate::SetCurveValue { curve, value } => {
                if let Some(sel) = self.state.curves.get_mut(curve) {
                    if sel.value.is_some() {
                        sel.value = Some(value);
                    }
                }
            }
            StateUpdate::SelectAllCurves => {
                for sel in &mut self.state.curves {
                    sel.active = true;
                }
            }
            StateUpdate::SelectNoCurves => {
                for sel in &mut self.state.curves {
                    sel.active = false;
                }
            }
            StateUpdate::SetSetting { name, value } => {
                if let Some(setting) = self.state.settings.iter_mut().find(|s| s.name == name) {
                    setting.value = value;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn store() -> StateStore {
        StateStore::new(Rc::new(ExplorerConfig::standard()))
    }

    #[test]
    fn defaults_follow_the_config() {
        let s = store();
        assert_eq!(s.state().active_dataset, 0);
        assert_eq!(s.state().active_values(), &[1.0, 1.0, 1.0, 16.0]);
        assert!(s.state().play_animations());
        assert!(s.state().show_data_points());
        assert!(s.state().curves.iter().all(|c| !c.active));
    }

    #[test]
    fn subscribers_run_in_subscription_order_with_merged_state() {
        let mut s = store();
        let log: Rc<RefCell<Vec<(u8, usize)>>> = Rc::new(RefCell::new(Vec::new()));

        let l1 = log.clone();
        s.subscribe(move |state| l1.borrow_mut().push((1, state.active_dataset)));
        let l2 = log.clone();
        s.subscribe(move |state| l2.borrow_mut().push((2, state.active_dataset)));

        s.publish(StateUpdate::SelectDataset(2));

        // Both saw the fully merged state, first subscriber first.
        assert_eq!(*log.borrow(), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut s = store();
        let count = Rc::new(RefCell::new(0));

        let c = count.clone();
        let handle = s.subscribe(move |_| *c.borrow_mut() += 1);

        s.publish(StateUpdate::SelectDataset(1));
        s.unsubscribe(handle);
        s.publish(StateUpdate::SelectDataset(0));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn dataset_selection_is_exclusive_and_preserves_values() {
        let mut s = store();
        s.publish(StateUpdate::SetDatasetValue {
            dataset: 0,
            param: 3,
            value: 42.0,
        });
        s.publish(StateUpdate::SelectDataset(1));
        assert_eq!(s.state().active_dataset, 1);
        // Edits to dataset 0 survive the switch.
        assert_eq!(s.state().dataset_values[0][3], 42.0);
    }

    #[test]
    fn curve_toggles_are_independent() {
        let mut s = store();
        s.publish(StateUpdate::SetCurveActive {
            curve: 0,
            active: true,
        });
        s.publish(StateUpdate::SetCurveActive {
            curve: 5,
            active: true,
        });
        let active: Vec<usize> = s
            .state()
            .curves
            .iter()
            .enumerate()
            .filter(|(_, c)| c.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![0, 5]);

        s.publish(StateUpdate::SelectAllCurves);
        assert!(s.state().curves.iter().all(|c| c.active));
        s.publish(StateUpdate::SelectNoCurves);
        assert!(s.state().curves.iter().all(|c| !c.active));
    }

    #[test]
    fn parameterless_curves_ignore_value_updates() {
        let mut s = store();
        let linear = 10; // Linear has no shape parameter
        s.publish(StateUpdate::SetCurveValue {
            curve: linear,
            value: 0.7,
        });
        assert_eq!(s.state().curves[linear].value, None);
    }

    #[test]
    fn settings_merge_by_name() {
        let mut s = store();
        s.publish(StateUpdate::SetSetting {
            name: PLAY_ANIMATIONS.to_string(),
            value: SettingValue::Bool(false),
        });
        assert!(!s.state().play_animations());
        assert!(s.state().show_data_points());
    }
}
