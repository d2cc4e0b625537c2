//! Bridge: decouple an abstraction from its implementation so the two can
//! vary independently.
//!
//! ```text
//! RemoteControl ---has a---> Television
//!       ^                        ^
//!       |                   +----+----+
//! AdvancedRemote           Sony    Philips
//! ```
//!
//! The client talks to a remote; which television sits behind it is hidden.

use crate::console::Console;
use crate::error::Result;
use tracing::debug;

// =============================================================================
// Implementation side
// =============================================================================

pub trait Television {
    fn on(&mut self) -> Result<()>;
    fn off(&mut self) -> Result<()>;
    fn tune_channel(&mut self, channel: i32) -> Result<()>;
    fn channel(&self) -> i32;
}

impl<T: Television + ?Sized> Television for &mut T {
    fn on(&mut self) -> Result<()> {
        (**self).on()
    }

    fn off(&mut self) -> Result<()> {
        (**self).off()
    }

    fn tune_channel(&mut self, channel: i32) -> Result<()> {
        (**self).tune_channel(channel)
    }

    fn channel(&self) -> i32 {
        (**self).channel()
    }
}

impl<T: Television + ?Sized> Television for Box<T> {
    fn on(&mut self) -> Result<()> {
        (**self).on()
    }

    fn off(&mut self) -> Result<()> {
        (**self).off()
    }

    fn tune_channel(&mut self, channel: i32) -> Result<()> {
        (**self).tune_channel(channel)
    }

    fn channel(&self) -> i32 {
        (**self).channel()
    }
}

pub struct Sony<C> {
    channel: i32,
    console: C,
}

impl<C: Console> Sony<C> {
    pub fn new(console: C) -> Self {
        Self { channel: 0, console }
    }
}

impl<C: Console> Television for Sony<C> {
    fn on(&mut self) -> Result<()> {
        self.console.print_line("Turning TV on!")
    }

    fn off(&mut self) -> Result<()> {
        self.console.print_line("Turning TV off!")
    }

    fn tune_channel(&mut self, channel: i32) -> Result<()> {
        self.console
            .print_line(&format!("Changing channel to={channel}"))?;
        self.channel = channel;
        Ok(())
    }

    fn channel(&self) -> i32 {
        self.channel
    }
}

pub struct Philips<C> {
    channel: i32,
    console: C,
}

impl<C: Console> Philips<C> {
    pub fn new(console: C) -> Self {
        Self { channel: 0, console }
    }
}

impl<C: Console> Television for Philips<C> {
    fn on(&mut self) -> Result<()> {
        self.console.print_line("Philips: leaving standby")
    }

    fn off(&mut self) -> Result<()> {
        self.console.print_line("Philips: entering standby")
    }

    fn tune_channel(&mut self, channel: i32) -> Result<()> {
        self.console
            .print_line(&format!("Philips: now showing channel {channel}"))?;
        self.channel = channel;
        Ok(())
    }

    fn channel(&self) -> i32 {
        self.channel
    }
}

// =============================================================================
// Abstraction side
// =============================================================================

/// The abstraction. Implementors only expose their television; the
/// operations themselves are shared.
pub trait RemoteControl {
    type Tv: Television;

    fn television_mut(&mut self) -> &mut Self::Tv;

    fn turn_on(&mut self) -> Result<()> {
        debug!("remote: turn on");
        self.television_mut().on()
    }

    fn turn_off(&mut self) -> Result<()> {
        debug!("remote: turn off");
        self.television_mut().off()
    }

    fn change_channel(&mut self, channel: i32) -> Result<()> {
        debug!(channel, "remote: change channel");
        self.television_mut().tune_channel(channel)
    }
}

pub struct BasicRemote<T> {
    television: T,
}

impl<T: Television> BasicRemote<T> {
    pub fn new(television: T) -> Self {
        Self { television }
    }

    pub fn television(&self) -> &T {
        &self.television
    }

    pub fn into_inner(self) -> T {
        self.television
    }
}

impl<T: Television> RemoteControl for BasicRemote<T> {
    type Tv = T;

    fn television_mut(&mut self) -> &mut T {
        &mut self.television
    }
}

/// Refined abstraction that can step through channels.
pub struct AdvancedRemote<T> {
    television: T,
}

impl<T: Television> AdvancedRemote<T> {
    pub fn new(television: T) -> Self {
        Self { television }
    }

    pub fn television(&self) -> &T {
        &self.television
    }

    pub fn into_inner(self) -> T {
        self.television
    }

    pub fn next_channel(&mut self) -> Result<()> {
        let channel = self.television.channel().wrapping_add(1);
        debug!(channel, "remote: next channel");
        self.change_channel(channel)
    }

    pub fn previous_channel(&mut self) -> Result<()> {
        let channel = self.television.channel().wrapping_sub(1);
        debug!(channel, "remote: previous channel");
        self.change_channel(channel)
    }
}

impl<T: Television> RemoteControl for AdvancedRemote<T> {
    type Tv = T;

    fn television_mut(&mut self) -> &mut T {
        &mut self.television
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run_demo<C: Console>(console: C) -> Result<()> {
    let mut remote = AdvancedRemote::new(Sony::new(console));

    remote.turn_on()?;
    remote.change_channel(2)?;
    remote.next_channel()?;
    remote.previous_channel()?;
    remote.turn_off()
}
