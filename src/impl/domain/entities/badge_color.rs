#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde_derive::Serialize)]
pub enum BadgeColor {
    Blue,
    Green,
    Red,
    Purple,
    Orange,
    Teal,
    Amber,
    Indigo,
    Pink,
    Gray,
}
