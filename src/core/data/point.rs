/// A pixel coordinate: origin top-left, x grows rightward, y grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
