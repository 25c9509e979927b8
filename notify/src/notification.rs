use crate::{
    Panel,
    shell::{PopupSurface, Shell},
};
use calloop::{
    LoopHandle, RegistrationToken,
    timer::{TimeoutAction, Timer},
};
use std::time::Duration;

/// Sequence numbers wrap at the counter width; a wrapped number is only
/// handed out again once the popup that held it is long gone.
pub type Seq = u32;

pub struct Notification<P: PopupSurface> {
    pub seq: Seq,
    pub content_hash: u64,
    pub surface: P,
    registration_token: Option<RegistrationToken>,
}

impl<P: PopupSurface + 'static> Notification<P> {
    pub(crate) fn new(seq: Seq, content_hash: u64, surface: P) -> Self {
        Self {
            seq,
            content_hash,
            surface,
            registration_token: None,
        }
    }

    /// Schedule the auto-hide timer, replacing any pending one.
    pub(crate) fn start_timer<S>(
        &mut self,
        handle: &LoopHandle<'static, Panel<S>>,
        timeout: Duration,
    ) where
        S: Shell<Surface = P>,
    {
        self.stop_timer(handle);

        let seq = self.seq;
        let timer = Timer::from_duration(timeout);
        match handle.insert_source(timer, move |_, _, panel| {
            panel.notifications.expire(seq);
            TimeoutAction::Drop
        }) {
            Ok(token) => self.registration_token = Some(token),
            Err(e) => log::warn!("Failed to schedule auto-hide for notification {seq}: {e}"),
        }
    }

    /// Cancel the pending auto-hide timer. Safe to call when no timer is
    /// pending or the timer has already fired.
    pub(crate) fn stop_timer<S>(&mut self, handle: &LoopHandle<'static, Panel<S>>)
    where
        S: Shell<Surface = P>,
    {
        if let Some(token) = self.registration_token.take() {
            handle.remove(token);
        }
    }

    /// The timer fired and consumed itself; forget the token so teardown does
    /// not hand the loop a registration it no longer owns.
    pub(crate) fn timer_elapsed(&mut self) {
        self.registration_token = None;
    }

    pub fn height(&self) -> i32 {
        self.surface.size().1
    }
}
