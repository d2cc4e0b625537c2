//! State: an object alters its behavior when its internal state changes.
//!
//! The context holds one state at a time. Each state, when asked to process,
//! decides what the context's next state is, so the context itself needs no
//! conditional logic about where it is.

use crate::console::Console;
use crate::error::Result;
use std::fmt;
use tracing::debug;

pub trait State {
    /// Human-readable name used in the context's output.
    fn name(&self) -> &'static str;

    fn do_process(&self, context: &mut dyn Transition) -> Result<()>;
}

impl<'a> fmt::Debug for dyn State + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a state may do to the context that runs it.
pub trait Transition {
    fn set_state(&mut self, state: &'static dyn State) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondState;

pub static FIRST: FirstState = FirstState;
pub static SECOND: SecondState = SecondState;

impl State for FirstState {
    fn name(&self) -> &'static str {
        "FirstState"
    }

    fn do_process(&self, context: &mut dyn Transition) -> Result<()> {
        context.set_state(&SECOND)
    }
}

impl State for SecondState {
    fn name(&self) -> &'static str {
        "SecondState"
    }

    fn do_process(&self, context: &mut dyn Transition) -> Result<()> {
        context.set_state(&FIRST)
    }
}

// =============================================================================
// Context
// =============================================================================

pub struct Context<C> {
    state: &'static dyn State,
    console: C,
}

impl<C: Console> Context<C> {
    pub fn new(state: &'static dyn State, console: C) -> Result<Self> {
        console.print_line(&format!("Setting initial state to={}", state.name()))?;
        debug!(state = state.name(), "context created");
        Ok(Self { state, console })
    }

    pub fn state(&self) -> &'static dyn State {
        self.state
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Lets the current state decide the next one.
    pub fn process(&mut self) -> Result<()> {
        let current = self.state;
        current.do_process(self)
    }
}

impl<C: Console> Transition for Context<C> {
    fn set_state(&mut self, state: &'static dyn State) -> Result<()> {
        debug!(from = self.state.name(), to = state.name(), "state transition");
        self.state = state;
        self.console
            .print_line(&format!("State Changed on runtime; new state={}", state.name()))
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run_demo<C: Console>(console: C) -> Result<()> {
    let mut context = Context::new(&FIRST, console)?;

    FIRST.do_process(&mut context)?;
    SECOND.do_process(&mut context)
}
