//! Command: a command object binds a receiver to one of its actions, and an
//! invoker triggers the command without knowing who ends up doing the work.
//!
//! New commands can be added without touching the invoker or the receiver.

use crate::console::Console;
use crate::error::Result;
use tracing::debug;

// =============================================================================
// Receiver
// =============================================================================

/// Knows how to perform the actions a command asks for.
pub trait Receiver {
    fn start(&self) -> Result<()>;
    fn stop(&self) -> Result<()>;
}

impl<R: Receiver + ?Sized> Receiver for &R {
    fn start(&self) -> Result<()> {
        (**self).start()
    }

    fn stop(&self) -> Result<()> {
        (**self).stop()
    }
}

pub struct FirstReceiver<C> {
    console: C,
}

impl<C: Console> FirstReceiver<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Receiver for FirstReceiver<C> {
    fn start(&self) -> Result<()> {
        self.console
            .print_line("FirstReceiver received the start command")
    }

    fn stop(&self) -> Result<()> {
        self.console
            .print_line("FirstReceiver received the stop command")
    }
}

// =============================================================================
// Commands
// =============================================================================

pub trait Command {
    fn execute(&self) -> Result<()>;
}

impl<F> Command for F
where
    F: Fn() -> Result<()>,
{
    fn execute(&self) -> Result<()> {
        self()
    }
}

pub struct StartCommand<R> {
    receiver: R,
}

impl<R: Receiver> StartCommand<R> {
    pub fn new(receiver: R) -> Self {
        Self { receiver }
    }
}

impl<R: Receiver> Command for StartCommand<R> {
    fn execute(&self) -> Result<()> {
        debug!("command: start");
        self.receiver.start()
    }
}

pub struct StopCommand<R> {
    receiver: R,
}

impl<R: Receiver> StopCommand<R> {
    pub fn new(receiver: R) -> Self {
        Self { receiver }
    }
}

impl<R: Receiver> Command for StopCommand<R> {
    fn execute(&self) -> Result<()> {
        debug!("command: stop");
        self.receiver.stop()
    }
}

// =============================================================================
// Invoker
// =============================================================================

/// Triggers whatever command it holds; it never sees the receiver.
pub struct Invoker<'a> {
    command: Box<dyn Command + 'a>,
}

impl<'a> Invoker<'a> {
    pub fn new(command: impl Command + 'a) -> Self {
        Self {
            command: Box::new(command),
        }
    }

    pub fn launch_command(&self) -> Result<()> {
        debug!("invoker: launching command");
        self.command.execute()
    }

    /// Replaces the held command, returning the previous one.
    pub fn set_command(&mut self, command: impl Command + 'a) -> Box<dyn Command + 'a> {
        std::mem::replace(&mut self.command, Box::new(command))
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run_demo<C: Console>(console: C) -> Result<()> {
    let receiver = FirstReceiver::new(console);

    let start_invoker = Invoker::new(StartCommand::new(&receiver));
    let stop_invoker = Invoker::new(StopCommand::new(&receiver));

    start_invoker.launch_command()?;
    stop_invoker.launch_command()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use crate::error::PatternError;
    use std::cell::Cell;
    use std::io;

    struct FailingConsole;

    impl Console for FailingConsole {
        fn print_line(&self, _line: &str) -> Result<()> {
            Err(PatternError::Console(io::Error::from(io::ErrorKind::BrokenPipe)))
        }
    }

    #[derive(Default)]
    struct CountingReceiver {
        starts: Cell<u32>,
        stops: Cell<u32>,
    }

    impl Receiver for CountingReceiver {
        fn start(&self) -> Result<()> {
            self.starts.set(self.starts.get() + 1);
            Ok(())
        }

        fn stop(&self) -> Result<()> {
            self.stops.set(self.stops.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_demo_output() {
        let transcript = Transcript::new();
        run_demo(&transcript).unwrap();

        assert_eq!(
            transcript.lines(),
            vec![
                "FirstReceiver received the start command",
                "FirstReceiver received the stop command",
            ]
        );
    }

    #[test]
    fn test_demo_fails_on_console_error() {
        let result = run_demo(FailingConsole);
        assert!(matches!(result, Err(PatternError::Console(_))));
    }

    #[test]
    fn test_invoker_propagates_receiver_error() {
        let receiver = FirstReceiver::new(FailingConsole);
        let invoker = Invoker::new(StopCommand::new(&receiver));

        assert!(matches!(invoker.launch_command(), Err(PatternError::Console(_))));
    }

    #[test]
    fn test_start_command_hits_start_once() {
        let receiver = CountingReceiver::default();
        Invoker::new(StartCommand::new(&receiver))
            .launch_command()
            .unwrap();

        assert_eq!(receiver.starts.get(), 1);
        assert_eq!(receiver.stops.get(), 0);
    }

    #[test]
    fn test_stop_command_hits_stop_once() {
        let receiver = CountingReceiver::default();
        Invoker::new(StopCommand::new(&receiver))
            .launch_command()
            .unwrap();

        assert_eq!(receiver.starts.get(), 0);
        assert_eq!(receiver.stops.get(), 1);
    }

    #[test]
    fn test_set_command_rebinds_invoker() {
        let receiver = CountingReceiver::default();
        let mut invoker = Invoker::new(StartCommand::new(&receiver));

        let previous = invoker.set_command(StopCommand::new(&receiver));
        invoker.launch_command().unwrap();
        previous.execute().unwrap();

        assert_eq!(receiver.starts.get(), 1);
        assert_eq!(receiver.stops.get(), 1);
    }

    #[test]
    fn test_closure_as_command() {
        let transcript = Transcript::new();
        let invoker = Invoker::new(|| transcript.print_line("closure ran"));

        invoker.launch_command().unwrap();
        invoker.launch_command().unwrap();

        assert_eq!(transcript.lines(), vec!["closure ran", "closure ran"]);
    }
}
