use crate::core::engine::TourEngine;
use crate::domain::model::{MenuCommand, Topic};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// The interactive read-dispatch-print loop.
///
/// One state (showing the menu), six literal tokens. Anything else is
/// expected, recoverable user input: print the diagnostic and re-prompt.
pub struct MenuSession<R: BufRead, W: Write, C: ConfigProvider> {
    reader: R,
    out: W,
    engine: TourEngine<C>,
    rule_width: usize,
    pause: bool,
}

impl<R: BufRead, W: Write, C: ConfigProvider> MenuSession<R, W, C> {
    pub fn new(reader: R, out: W, config: C) -> Self {
        let rule_width = config.rule_width();
        let pause = config.pause_between();
        Self {
            reader,
            out,
            engine: TourEngine::new(config),
            rule_width,
            pause,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_banner()?;

        loop {
            self.print_menu()?;

            // End of input means the session is over; piped input must not spin
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            match MenuCommand::parse(line.trim()) {
                Some(MenuCommand::Run(topic)) => {
                    self.engine.run_topic(&mut self.out, topic)?;
                    self.pause_prompt()?;
                }
                Some(MenuCommand::RunAll) => {
                    self.engine.run_all(&mut self.out)?;
                    self.pause_prompt()?;
                }
                Some(MenuCommand::Exit) => {
                    writeln!(self.out, "\nHappy coding! 🚀")?;
                    break;
                }
                None => {
                    writeln!(self.out, "\n❌ Invalid choice. Please enter 0-5.")?;
                }
            }
        }

        self.engine.finish();
        Ok(())
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.out, "╔════════════════════════════════════════════════════════════╗")?;
        writeln!(self.out, "║             RUST DATA STRUCTURES TOUR                      ║")?;
        writeln!(self.out, "║   Arrays, Vectors, HashMaps, Structs, Constructing Values  ║")?;
        writeln!(self.out, "╚════════════════════════════════════════════════════════════╝")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", "─".repeat(self.rule_width))?;
        writeln!(self.out, "Select a topic to learn:")?;
        for (index, topic) in Topic::ALL.iter().enumerate() {
            writeln!(self.out, "  {}. {}", index + 1, topic.label())?;
        }
        writeln!(self.out, "  5. Run ALL examples")?;
        writeln!(self.out, "  0. Exit")?;
        write!(self.out, "\nYour choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    fn pause_prompt(&mut self) -> Result<()> {
        if !self.pause {
            return Ok(());
        }
        writeln!(self.out, "\n{}", "─".repeat(self.rule_width))?;
        write!(self.out, "Press ENTER to continue...")?;
        self.out.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let bytes_read = self.reader.read_line(&mut buf)?;
        if bytes_read == 0 {
            Ok(None)
        } else {
            Ok(Some(buf))
        }
    }
}
