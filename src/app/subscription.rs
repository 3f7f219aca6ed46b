// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are translated here and nowhere else.
//! Keyboard events already captured by a focused widget never reach the
//! keymap, so typing in the text editor cannot trigger a shortcut.

use super::{keymap, Message};
use crate::ui::uploader;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window events (close, resize, file drag and drop) and uncaptured
/// key presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::FileHovered(_)) => {
            Some(Message::Uploader(uploader::Message::DragEntered))
        }
        event::Event::Window(window::Event::FilesHoveredLeft) => {
            Some(Message::Uploader(uploader::Message::DragLeft))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::Uploader(uploader::Message::Dropped(path)))
        }
        event::Event::Keyboard(keyboard_event) => match status {
            event::Status::Ignored => {
                keymap::action_for_event(&keyboard_event).map(Message::Shortcut)
            }
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Redraws every frame while the 3D preview exists.
pub fn create_frame_subscription(scene_active: bool) -> Subscription<Message> {
    if scene_active {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
