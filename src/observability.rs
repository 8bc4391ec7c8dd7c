use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("helpergpt.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("helpergpt.client.request_errors");

pub(crate) static CONTROLLER_ACTIONS: Counter = Counter::new("helpergpt.controller.actions");
pub(crate) static CONTROLLER_REJECTIONS: Counter =
    Counter::new("helpergpt.controller.validation_rejections");
pub(crate) static CONTROLLER_NOTIFICATIONS: Counter =
    Counter::new("helpergpt.controller.notifications");
pub(crate) static ASK_DURATION: Moments = Moments::new("helpergpt.controller.ask_duration_seconds");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&CONTROLLER_ACTIONS);
    collector.register_counter(&CONTROLLER_REJECTIONS);
    collector.register_counter(&CONTROLLER_NOTIFICATIONS);
    collector.register_moments(&ASK_DURATION);
}
