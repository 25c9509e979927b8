pub mod notification;
pub mod shell;
pub mod stack;
pub mod text;

use anyhow::Result;
use calloop::LoopHandle;
use config::Config;
use std::sync::Arc;

pub use notification::{Notification, Seq};
pub use shell::{PopupKind, PopupSurface, Shell};
pub use stack::{NotificationStack, Reason};

/// Events routed from popup surfaces back to the panel through its calloop
/// channel.
pub enum Event {
    Dismiss { seq: Seq },
}

/// Host panel context: owns the popup stack and the toolkit seam, and is the
/// state type of the panel's event loop. Popups live and die with this value,
/// not with the process.
pub struct Panel<S: Shell> {
    shell: S,
    pub notifications: NotificationStack<S>,
    config: Arc<Config>,
}

impl<S: Shell> Panel<S> {
    pub fn new(
        shell: S,
        config: Arc<Config>,
        loop_handle: LoopHandle<'static, Panel<S>>,
    ) -> Result<Self> {
        let (sender, receiver) = calloop::channel::channel();

        loop_handle
            .insert_source(receiver, |event, (), panel| {
                if let calloop::channel::Event::Msg(event) = event {
                    panel.handle_event(event);
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to insert source: {e}"))?;

        Ok(Self {
            shell,
            notifications: NotificationStack::new(Arc::clone(&config), loop_handle, sender),
            config,
        })
    }

    /// Show `message` as a popup next to the panel. Returns a sequence number
    /// that can later be passed to [`Panel::notify_clear`].
    pub fn notify(&mut self, message: &str) -> Result<Seq> {
        self.notifications.show(&mut self.shell, message)
    }

    /// Dismiss a popup previously returned by [`Panel::notify`]. A sequence
    /// number that is no longer on screen is ignored.
    pub fn notify_clear(&mut self, seq: Seq) {
        self.notifications.dismiss(seq, Reason::CloseNotificationCall);
    }

    /// Tear down every popup, for when the panel window itself goes away.
    pub fn clear_all(&mut self) {
        self.notifications.clear();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Dismiss { seq } => self.notifications.dismiss(seq, Reason::DismissedByUser),
        }
    }
}
