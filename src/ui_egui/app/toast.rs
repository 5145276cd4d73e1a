//! Single-slot toast for save/delete feedback.
//!
//! Only one toast is visible at a time; a newer notification replaces the
//! one on screen and restarts its timer.

use std::time::{Duration, Instant};

use egui::{Color32, Context, Pos2, RichText};

use crate::models::notification::{Notification, NotificationLevel};

const TOAST_WIDTH: f32 = 320.0;
const SCREEN_MARGIN: f32 = 16.0;
/// Time at the end of a toast's life spent fading out
const FADE_OUT: Duration = Duration::from_millis(400);

fn level_icon(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "✓",
        NotificationLevel::Warning => "⚠",
        NotificationLevel::Error => "✗",
    }
}

/// Background and foreground colors for a level.
fn level_colors(level: NotificationLevel, is_dark: bool) -> (Color32, Color32) {
    match (level, is_dark) {
        (NotificationLevel::Success, false) => {
            (Color32::from_rgb(223, 246, 221), Color32::from_rgb(30, 110, 45))
        }
        (NotificationLevel::Success, true) => {
            (Color32::from_rgb(28, 64, 36), Color32::from_rgb(120, 220, 130))
        }
        (NotificationLevel::Warning, false) => {
            (Color32::from_rgb(255, 244, 206), Color32::from_rgb(140, 95, 0))
        }
        (NotificationLevel::Warning, true) => {
            (Color32::from_rgb(78, 58, 18), Color32::from_rgb(255, 205, 90))
        }
        (NotificationLevel::Error, false) => {
            (Color32::from_rgb(255, 225, 225), Color32::from_rgb(175, 35, 35))
        }
        (NotificationLevel::Error, true) => {
            (Color32::from_rgb(82, 30, 30), Color32::from_rgb(255, 125, 125))
        }
    }
}

/// Opacity for a toast `elapsed` into a lifetime of `duration`.
fn fade_opacity(elapsed: Duration, duration: Duration) -> f32 {
    if elapsed >= duration {
        return 0.0;
    }
    let remaining = duration - elapsed;
    let fade = FADE_OUT.min(duration);
    if remaining >= fade {
        1.0
    } else {
        (remaining.as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    notification: Notification,
    shown_at: Instant,
}

#[derive(Debug)]
pub struct ToastManager {
    current: Option<ActiveToast>,
    duration: Duration,
}

impl ToastManager {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show a notification, replacing whatever toast is on screen.
    pub fn show(&mut self, notification: Notification) {
        self.current = Some(ActiveToast {
            notification,
            shown_at: Instant::now(),
        });
    }

    #[cfg(test)]
    fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|t| &t.notification)
    }

    fn expire(&mut self) {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|t| t.shown_at.elapsed() >= self.duration);
        if expired {
            self.current = None;
        }
    }

    pub fn render(&mut self, ctx: &Context, is_dark: bool) {
        self.expire();

        let Some(toast) = &self.current else {
            return;
        };

        let opacity = fade_opacity(toast.shown_at.elapsed(), self.duration);
        if opacity <= 0.0 {
            return;
        }

        // Keep repainting while the toast fades
        ctx.request_repaint();

        let level = toast.notification.level;
        let (bg, fg) = level_colors(level, is_dark);
        let bg = bg.gamma_multiply(0.95 * opacity);
        let fg = fg.gamma_multiply(opacity);

        let screen = ctx.screen_rect();
        let pos = Pos2::new(
            screen.right() - TOAST_WIDTH - SCREEN_MARGIN,
            screen.top() + SCREEN_MARGIN + 40.0,
        );

        egui::Area::new(egui::Id::new("session_toast"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(bg)
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                    .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.4)))
                    .show(ui, |ui| {
                        ui.set_min_width(TOAST_WIDTH - 28.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(level_icon(level)).color(fg).strong());
                            ui.label(RichText::new(&toast.notification.message).color(fg));
                        });
                    });
            });
    }
}
