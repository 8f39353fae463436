use crate::{Color, Coord, BOARD_SIZE};

impl quickcheck::Arbitrary for Coord {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Coord {
            row: u8::arbitrary(g) % BOARD_SIZE,
            col: u8::arbitrary(g) % BOARD_SIZE,
        }
    }
}

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Color::Black, Color::White]).unwrap()
    }
}
