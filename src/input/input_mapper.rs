//! Input mapping from raw events to semantic actions
//!
//! Input is event based: every key press arrives as its own event, so two
//! presses within one frame are both seen, in order.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use pong3d_sim::Side;

/// Actions triggered by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Reverse the vertical direction of a paddle (A = left, D = right)
    FlipPaddle(Side),
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Only fresh presses count: releases and auto-repeat events return `None`.
    pub fn map_keyboard(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputAction> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyA => Some(InputAction::FlipPaddle(Side::Left)),
            KeyCode::KeyD => Some(InputAction::FlipPaddle(Side::Right)),
            _ => None,
        }
    }
}
