/// Where a card sits when it is `position` places behind the front of the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub z_index: i32,
}

pub fn make_slot(position: usize, spacing_x: f64, spacing_y: f64, total: usize) -> Slot {
    let i = position as f64;
    Slot {
        x: i * spacing_x,
        y: -i * spacing_y,
        z: -i * spacing_x * 1.5,
        z_index: total as i32 - position as i32,
    }
}
