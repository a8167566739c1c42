use crate::domain::notifications::Notification;

/// Port for the surface that renders alerts (a toast stack in the browser).
///
/// The sink only displays. Dismissal flows back through
/// `AlertPresenter::dismiss`, which the host calls when the user closes one.
pub trait AlertSinkPort {
    fn show(&self, notification: &Notification) -> Result<(), String>;
}
