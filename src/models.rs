use crate::core::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerColor {
    Magenta,
    Yellow,
}

impl PlayerColor {
    pub fn flipped(self) -> PlayerColor {
        match self {
            PlayerColor::Magenta => PlayerColor::Yellow,
            PlayerColor::Yellow => PlayerColor::Magenta,
        }
    }
}

/// Everything a frame needs, borrowed from the running game.
pub struct GameRenderState<'a> {
    pub world: &'a World,
    pub player_color: PlayerColor,
    /// `Some(on_start)` while the help overlay is up.
    pub help: Option<bool>,
    pub notice: Option<&'a str>,
}
