pub mod coach;
pub mod player;
pub mod team;

pub use coach::Coach;
pub use player::Player;
pub use team::Team;
