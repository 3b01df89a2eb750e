//! Full screen countdown.
//!
//! `-`/`+` pick the minutes, enter starts, `q` quits. The terminal bell
//! rings when a countdown finishes.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use countdown_widget::prelude::*;
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

struct App {
    countdown: Countdown,
    finished: u32,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut countdown = countdown_new(&[]);
        let cmd = countdown.focus();
        (
            Self {
                countdown,
                finished: 0,
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches!(key_msg.key, KeyCode::Char('q') | KeyCode::Esc) {
                return Some(quit());
            }
        }

        if msg.downcast_ref::<CountdownFinishedMsg>().is_some() {
            self.finished += 1;
            print!("\x07");
            return None;
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let footer = Style::new()
            .foreground(Color::from("241"))
            .render(&format!("finished: {} • q quit", self.finished));
        format!(
            "\n{}\n\n{}\n{}\n",
            self.countdown.view(),
            self.countdown.help_view(),
            footer
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
