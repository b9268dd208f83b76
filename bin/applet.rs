use anyhow::Error as Anyhow;
use clap::Subcommand;

mod moves;
mod play;

#[derive(Subcommand)]
pub enum Applet {
    Play(play::Play),
    Moves(moves::Moves),
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Moves(a) => a.execute(),
        }
    }
}
