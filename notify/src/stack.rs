use crate::{
    Event, Panel,
    notification::{Notification, Seq},
    shell::{PopupKind, PopupSurface, Shell},
    text,
};
use anyhow::Result;
use calloop::LoopHandle;
use config::{Config, types::Edge};
use std::{
    collections::VecDeque,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc,
    time::Duration,
};

/// Vertical gap between stacked popups, and between the first popup and the
/// panel.
pub const SPACING: i32 = 5;

/// Ordered stack of live popups, newest at the front. Front order is
/// on-screen order: the front popup sits nearest the anchor and every
/// following one is `height + SPACING` further away.
pub struct NotificationStack<S: Shell> {
    windows: VecDeque<Notification<S::Surface>>,
    next_seq: Seq,
    config: Arc<Config>,
    loop_handle: LoopHandle<'static, Panel<S>>,
    sender: calloop::channel::Sender<Event>,
}

impl<S: Shell> NotificationStack<S> {
    pub(crate) fn new(
        config: Arc<Config>,
        loop_handle: LoopHandle<'static, Panel<S>>,
        sender: calloop::channel::Sender<Event>,
    ) -> Self {
        Self {
            windows: VecDeque::new(),
            next_seq: 0,
            config,
            loop_handle,
            sender,
        }
    }

    pub fn windows(&self) -> &VecDeque<Notification<S::Surface>> {
        &self.windows
    }

    /// Show a popup for `message` at the head of the stack.
    ///
    /// A popup already showing the same text is torn down first, so a
    /// repeated message reappears at the head instead of accumulating.
    pub fn show(&mut self, shell: &mut S, message: &str) -> Result<Seq> {
        let content_hash = hash_message(message);

        while let Some(i) = self
            .windows
            .iter()
            .position(|w| w.content_hash == content_hash)
        {
            self.remove(i, Reason::Superseded);
        }

        let mut surface = shell
            .create_popup(PopupKind::Csd)
            .or_else(|_| shell.create_popup(PopupKind::Plain))?;
        surface.set_text(&text::wrap(message, self.config.general.wrap_width));

        let (x, y) = shell.anchor_position(surface.size());
        if self.config.general.edge == Edge::Bottom {
            surface.move_to(x, SPACING);
        } else {
            surface.move_to(x, y);
        }

        self.next_seq = self.next_seq.wrapping_add(1);
        let seq = self.next_seq;

        let sender = self.sender.clone();
        surface.connect_click(Box::new(move || {
            let _ = sender.send(Event::Dismiss { seq });
        }));
        surface.present();

        let mut window = Notification::new(seq, content_hash, surface);
        let timeout = self.config.general.timeout;
        if timeout > 0 {
            window.start_timer(
                &self.loop_handle,
                Duration::from_millis(u64::from(timeout) * 1000),
            );
        }

        let offset = window.height() + SPACING;
        self.windows.push_front(window);
        self.update_positions(1, offset);

        log::debug!("Showing notification {seq}");
        Ok(seq)
    }

    /// Dismiss the popup with the given sequence number.
    ///
    /// Stale sequence numbers are expected and ignored: the popup may have
    /// expired or been clicked away between the caller's intent and this
    /// call.
    pub fn dismiss(&mut self, seq: Seq, reason: Reason) {
        if let Some(i) = self.windows.iter().position(|w| w.seq == seq) {
            self.remove(i, reason);
        }
    }

    /// Auto-hide callback for `seq`.
    pub(crate) fn expire(&mut self, seq: Seq) {
        if let Some(window) = self.windows.iter_mut().find(|w| w.seq == seq) {
            window.timer_elapsed();
        }
        self.dismiss(seq, Reason::Expired);
    }

    /// Tear down every popup at once.
    pub fn clear(&mut self) {
        while let Some(mut window) = self.windows.pop_front() {
            window.stop_timer(&self.loop_handle);
            log::debug!(
                "Removing notification {}: {}",
                window.seq,
                Reason::CloseNotificationCall
            );
        }
    }

    fn remove(&mut self, index: usize, reason: Reason) {
        if let Some(window) = self.windows.get(index) {
            let offset = window.height() + SPACING;
            self.update_positions(index + 1, -offset);
        }

        if let Some(mut window) = self.windows.remove(index) {
            window.stop_timer(&self.loop_handle);
            log::debug!("Removing notification {}: {reason}", window.seq);
        }
    }

    /// Move every popup from `from` to the end of the stack by `offset`
    /// pixels. Positive offsets push popups away from the anchor to make room
    /// for an insertion, negative offsets close the gap left by a removal.
    fn update_positions(&mut self, from: usize, offset: i32) {
        self.windows.iter_mut().skip(from).for_each(|window| {
            let (x, y) = window.surface.position();
            window.surface.move_to(x, y + offset);
        });
    }
}

fn hash_message(message: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    message.hash(&mut hasher);
    hasher.finish()
}

#[derive(Clone, Copy)]
pub enum Reason {
    Expired,
    DismissedByUser,
    CloseNotificationCall,
    Superseded,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Reason::Expired => "Expired",
            Reason::DismissedByUser => "DismissedByUser",
            Reason::CloseNotificationCall => "CloseNotificationCall",
            Reason::Superseded => "Superseded",
        };
        write!(f, "{s}")
    }
}
