// velo-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is only compiled when the "test-mocks" feature is enabled.
#![cfg(feature = "test-mocks")]

use super::{EncodeSettings, VideoClip, VideoSource};
use crate::error::{CoreError, CoreResult};

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Default)]
struct MockState {
    open_errors: HashMap<PathBuf, String>,
    speed_errors: HashMap<PathBuf, String>,
    write_errors: HashMap<PathBuf, String>,
    create_output: bool,
    opened_paths: Vec<PathBuf>,
    speed_calls: Vec<(PathBuf, u32)>,
    write_calls: Vec<(PathBuf, PathBuf, EncodeSettings)>,
    decoded_closes: HashMap<PathBuf, u32>,
    derived_closes: HashMap<PathBuf, u32>,
}

/// Mock implementation of [`VideoSource`] that records every call.
///
/// Error injection stores message strings and reconstructs
/// `CoreError::Transform` on the way out (CoreError is not Clone).
#[derive(Clone, Default)]
pub struct MockVideoSource {
    state: Rc<RefCell<MockState>>,
}

impl MockVideoSource {
    pub fn new() -> Self {
        Default::default()
    }

    /// When enabled, `write` creates an empty file at the output path so
    /// skip-guard behavior can be exercised across runs.
    pub fn create_output_on_write(&self, enabled: bool) {
        self.state.borrow_mut().create_output = enabled;
    }

    /// Makes `open` fail for the given input path.
    pub fn expect_open_error(&self, input_path: &Path, message: &str) {
        self.state
            .borrow_mut()
            .open_errors
            .insert(input_path.to_path_buf(), message.to_string());
    }

    /// Makes `multiply_speed` fail for clips opened from the given path.
    pub fn expect_speed_error(&self, input_path: &Path, message: &str) {
        self.state
            .borrow_mut()
            .speed_errors
            .insert(input_path.to_path_buf(), message.to_string());
    }

    /// Makes `write` fail for clips opened from the given path.
    pub fn expect_write_error(&self, input_path: &Path, message: &str) {
        self.state
            .borrow_mut()
            .write_errors
            .insert(input_path.to_path_buf(), message.to_string());
    }

    pub fn opened_paths(&self) -> Vec<PathBuf> {
        self.state.borrow().opened_paths.clone()
    }

    pub fn speed_calls(&self) -> Vec<(PathBuf, u32)> {
        self.state.borrow().speed_calls.clone()
    }

    pub fn write_calls(&self) -> Vec<(PathBuf, PathBuf, EncodeSettings)> {
        self.state.borrow().write_calls.clone()
    }

    /// Times the decoded (un-derived) clip for `input_path` was closed.
    pub fn decoded_close_count(&self, input_path: &Path) -> u32 {
        *self
            .state
            .borrow()
            .decoded_closes
            .get(input_path)
            .unwrap_or(&0)
    }

    /// Times a derived (speed-multiplied) clip for `input_path` was closed.
    pub fn derived_close_count(&self, input_path: &Path) -> u32 {
        *self
            .state
            .borrow()
            .derived_closes
            .get(input_path)
            .unwrap_or(&0)
    }
}

/// Mock clip handle produced by [`MockVideoSource`].
pub struct MockClip {
    state: Rc<RefCell<MockState>>,
    input_path: PathBuf,
    derived: bool,
}

impl VideoSource for MockVideoSource {
    type Clip = MockClip;

    fn open(&self, input_path: &Path) -> CoreResult<MockClip> {
        let mut state = self.state.borrow_mut();
        state.opened_paths.push(input_path.to_path_buf());
        if let Some(message) = state.open_errors.get(input_path) {
            return Err(CoreError::Transform(message.clone()));
        }
        Ok(MockClip {
            state: self.state.clone(),
            input_path: input_path.to_path_buf(),
            derived: false,
        })
    }
}

impl VideoClip for MockClip {
    fn multiply_speed(&self, factor: u32) -> CoreResult<Self> {
        let mut state = self.state.borrow_mut();
        state.speed_calls.push((self.input_path.clone(), factor));
        if let Some(message) = state.speed_errors.get(&self.input_path) {
            return Err(CoreError::Transform(message.clone()));
        }
        Ok(MockClip {
            state: self.state.clone(),
            input_path: self.input_path.clone(),
            derived: true,
        })
    }

    fn write(&self, output_path: &Path, settings: &EncodeSettings) -> CoreResult<()> {
        let mut state = self.state.borrow_mut();
        state.write_calls.push((
            self.input_path.clone(),
            output_path.to_path_buf(),
            settings.clone(),
        ));
        if let Some(message) = state.write_errors.get(&self.input_path) {
            return Err(CoreError::Transform(message.clone()));
        }
        if state.create_output {
            std::fs::File::create(output_path)?;
        }
        Ok(())
    }

    fn close(self) {
        let mut state = self.state.borrow_mut();
        let counts = if self.derived {
            &mut state.derived_closes
        } else {
            &mut state.decoded_closes
        };
        *counts.entry(self.input_path.clone()).or_insert(0) += 1;
    }
}
