//! Per-frame input snapshot
//!
//! The embedder translates raw key/pointer events into mutations of this
//! state; the kinetic controller reads it once per tick. The ground-plane ray
//! cast that produces the pointer target happens outside the crate.

use glam::Vec3;

/// Cardinal movement directions on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

/// Input state read by the kinetic controller each frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
    pointer_engaged: bool,
    pointer_target: Option<Vec3>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        self.set_held(direction, true);
    }

    pub fn release(&mut self, direction: Direction) {
        self.set_held(direction, false);
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.forward,
            Direction::Back => self.back,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn set_held(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Forward => self.forward = held,
            Direction::Back => self.back = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Pointer engaged at a world-space ground intersection
    pub fn pointer_down(&mut self, target: Vec3) {
        self.pointer_engaged = true;
        self.pointer_target = Some(target);
    }

    /// Updates the target while the pointer is engaged; ignored otherwise
    pub fn pointer_moved(&mut self, target: Vec3) {
        if self.pointer_engaged {
            self.pointer_target = Some(target);
        }
    }

    /// Pointer released; the target is cleared so a stale point cannot
    /// continue to exert force
    pub fn pointer_up(&mut self) {
        self.pointer_engaged = false;
        self.pointer_target = None;
    }

    pub fn is_pointer_engaged(&self) -> bool {
        self.pointer_engaged
    }

    /// Returns the steering target only while the pointer is engaged
    pub fn pointer_target(&self) -> Option<Vec3> {
        if self.pointer_engaged {
            self.pointer_target
        } else {
            None
        }
    }

    /// Releases everything (held keys and pointer)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
