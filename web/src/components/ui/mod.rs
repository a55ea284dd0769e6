mod alert;
mod counter;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use counter::Counter;
pub(crate) use spinner::Spinner;
